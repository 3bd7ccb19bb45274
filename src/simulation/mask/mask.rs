use crate::domain::view::Camera;

/// Rounded-corner radius of the mask outline, in world units
const CORNER_RADIUS: f32 = 0.1;
/// Line segments each quadratic corner is flattened into
const CORNER_SEGMENTS: u32 = 4;

/// Cosmetic clipping outline for the sandbox view.
///
/// A rounded rectangle sized from the camera frustum (width 1.8x the left
/// bound, height the top bound), exported as a flat `[x, y]` point loop the
/// host turns into stencil-mask geometry. Rebuilt on resize and camera
/// swaps; the physics world never sees it.
pub struct MaskGeometry {
    points: Vec<f32>,
    width: f32,
    height: f32,
}

impl MaskGeometry {
    /// Flat x, y pairs tracing the outline clockwise from the top edge
    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len() / 2
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

pub(super) fn build(camera: &Camera) -> MaskGeometry {
    let width = (camera.left * 1.8).abs();
    let height = camera.top.abs();
    let x = width / 2.0;
    let y = height / 2.0;
    let r = CORNER_RADIUS.min(x).min(y);

    let mut points = Vec::with_capacity(((4 + 4 * CORNER_SEGMENTS) * 2) as usize);

    push(&mut points, -x + r, y);
    push(&mut points, x - r, y);
    corner(&mut points, [x - r, y], [x, y], [x, y - r]);
    push(&mut points, x, -y + r);
    corner(&mut points, [x, -y + r], [x, -y], [x - r, -y]);
    push(&mut points, -x + r, -y);
    corner(&mut points, [-x + r, -y], [-x, -y], [-x, -y + r]);
    push(&mut points, -x, y - r);
    corner(&mut points, [-x, y - r], [-x, y], [-x + r, y]);

    MaskGeometry { points, width, height }
}

fn push(points: &mut Vec<f32>, x: f32, y: f32) {
    points.push(x);
    points.push(y);
}

/// Flatten the quadratic Bezier p0 -> p1 with control point c.
/// The t = 0 point is already in the outline, so start at the first step.
fn corner(points: &mut Vec<f32>, p0: [f32; 2], c: [f32; 2], p1: [f32; 2]) {
    for i in 1..=CORNER_SEGMENTS {
        let t = i as f32 / CORNER_SEGMENTS as f32;
        let u = 1.0 - t;
        let x = u * u * p0[0] + 2.0 * u * t * c[0] + t * t * p1[0];
        let y = u * u * p0[1] + 2.0 * u * t * c[1] + t * t * p1[1];
        push(points, x, y);
    }
}
