use crate::domain::view::Renderable;

/// Layout of one entry in the flat transform buffer:
/// x, y, z, qx, qy, qz, qw, radius
pub const FLOATS_PER_TRANSFORM: usize = 8;

/// Repack the renderables into the flat buffer the host renderer reads
/// back (via pointer on wasm). Registration order, rewritten every tick.
pub(super) fn extract(renderables: &[Renderable], out: &mut Vec<f32>) {
    out.clear();
    for r in renderables {
        out.extend_from_slice(&[
            r.position.x,
            r.position.y,
            r.position.z,
            r.rotation.x,
            r.rotation.y,
            r.rotation.z,
            r.rotation.w,
            r.radius,
        ]);
    }
}
