use crate::core::math::{Quat, Vec3};

/// Visual proxy for one simulated ball.
///
/// Owned by the sandbox on behalf of the host renderer; the per-frame sync
/// copies the body transform in, never the other way around.
#[derive(Clone, Copy, Debug)]
pub struct Renderable {
    pub position: Vec3,
    pub rotation: Quat,
    pub radius: f32,
}

impl Renderable {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            rotation: Quat::identity(),
            radius,
        }
    }
}

/// The slice of the host camera the sandbox needs: where pick rays start,
/// and the frustum half-extents the view mask is sized from.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    /// Left frustum bound (negative for the stock orthographic setup)
    pub left: f32,
    /// Top frustum bound
    pub top: f32,
}

impl Camera {
    pub fn new(position: Vec3, left: f32, top: f32) -> Self {
        Self { position, left, top }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            left: -10.0,
            top: 5.0,
        }
    }
}

/// Pointer-event coordinate space, in CSS pixels
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Degenerate dimensions are clamped so NDC math stays finite
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}
