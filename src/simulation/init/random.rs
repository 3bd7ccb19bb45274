use crate::core::math::Vec3;

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform f32 in [0, 1)
#[inline]
pub(super) fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform direction on the unit sphere, by rejection sampling the cube.
/// Deterministic for a given seed, which keeps pool placement testable.
pub(super) fn unit_sphere_dir(state: &mut u32) -> Vec3 {
    loop {
        let v = Vec3::new(
            unit_f32(state) * 2.0 - 1.0,
            unit_f32(state) * 2.0 - 1.0,
            unit_f32(state) * 2.0 - 1.0,
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            return v * (1.0 / len_sq.sqrt());
        }
    }
}
