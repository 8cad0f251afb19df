use super::common::{Animation, AnimationContext, hue_to_rgb};
use image::Rgb;
use std::f64::consts::PI;

/// Spiral animation - Hue sweeps outward and around the grid center as frames advance
pub(crate) struct Spiral;

impl Spiral {
    /// Map a grid coordinate onto the unit square. Requires `size >= 2`.
    pub(crate) fn normalize(x: u32, y: u32, size: u32) -> (f64, f64) {
        let span = f64::from(size - 1);
        (f64::from(x) / span, f64::from(y) / span)
    }

    /// Phase offset of a normalized position: half its distance from the center plus its
    /// polar angle as a fraction of a full turn.
    pub(crate) fn delay(px: f64, py: f64) -> f64 {
        let dx = px - 0.5;
        let dy = py - 0.5;
        0.5 * (dx * dx + dy * dy).sqrt() + dy.atan2(dx) / (2.0 * PI)
    }

    /// Hue in radians. Left unwrapped; the channel cosines absorb the periodicity.
    pub(crate) fn hue(ctx: &AnimationContext) -> f64 {
        let (px, py) = Self::normalize(ctx.x, ctx.y, ctx.size);
        let progress = f64::from(ctx.frame) / f64::from(ctx.total_frames);
        2.0 * PI * (progress - Self::delay(px, py))
    }
}

impl Animation for Spiral {
    fn render_pixel(&self, ctx: &AnimationContext) -> Rgb<u8> {
        hue_to_rgb(Self::hue(ctx))
    }
}
