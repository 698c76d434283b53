//! Calibration view rendering.
//!
//! Each presentation works on a fresh copy of the reference image, so the
//! annotation of one target never lingers into the next.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};

use crate::types::MarkerTarget;

/// Annotation settings for the calibration view.
#[derive(Clone, Copy, Debug)]
pub struct OverlayStyle {
    /// Radius of the ring drawn around the marker center, in pixels.
    pub ring_radius: i32,
    pub ring_color: Rgb<u8>,
    pub boundary_color: Rgb<u8>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            ring_radius: 50,
            ring_color: Rgb([255, 0, 0]),
            boundary_color: Rgb([0, 255, 0]),
        }
    }
}

/// Render `target` onto a fresh copy of `reference`.
///
/// Draws a hollow ring around the marker center and the marker outline as
/// a closed polyline. The reference image itself is never touched.
pub fn render_target_overlay(
    reference: &RgbImage,
    target: &MarkerTarget,
    style: &OverlayStyle,
) -> RgbImage {
    let mut view = reference.clone();

    draw_hollow_circle_mut(
        &mut view,
        (target.image_x, target.image_y),
        style.ring_radius,
        style.ring_color,
    );

    let boundary = &target.boundary;
    if boundary.len() >= 2 {
        for i in 0..boundary.len() {
            let a = boundary[i];
            let b = boundary[(i + 1) % boundary.len()];
            draw_line_segment_mut(&mut view, (a.x, a.y), (b.x, b.y), style.boundary_color);
        }
    }

    view
}
