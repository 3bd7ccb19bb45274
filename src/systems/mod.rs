pub mod attraction;
pub mod physics;
pub mod picking;
pub mod registry;
