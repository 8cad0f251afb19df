use image::Rgb;
use std::f64::consts::PI;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Animation context passed to all animation renderers
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnimationContext {
    /// Current frame index - drives animation progression
    pub frame: u32,
    /// Total frames in one animation cycle
    pub total_frames: u32,
    /// Column index within the grid
    pub x: u32,
    /// Row index within the grid
    pub y: u32,
    /// Grid width and height
    pub size: u32,
}

/// Trait for animation styles
pub(crate) trait Animation {
    /// Render a single grid pixel for the frame described by the context
    fn render_pixel(&self, ctx: &AnimationContext) -> Rgb<u8>;
}

/// One color channel of a pixel. The display name doubles as the hex file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Phase offset subtracted from the hue before taking the cosine.
    pub(crate) fn phase(self) -> f64 {
        match self {
            Self::Red => 0.0,
            Self::Green => 2.0 * PI / 3.0,
            Self::Blue => 4.0 * PI / 3.0,
        }
    }

    /// Cosine argument for this channel at the given hue.
    pub(crate) fn argument(self, hue: f64) -> f64 {
        hue - self.phase()
    }

    /// Channel intensity in `[0.0, 1.0]`: a clipped cosine lifted by one half.
    pub(crate) fn intensity(self, hue: f64) -> f64 {
        0.5 + self.argument(hue).cos().clamp(-0.5, 0.5)
    }
}

/// Scale an intensity to a byte, truncating toward zero.
pub(crate) fn to_channel_value(intensity: f64) -> u8 {
    (255.0 * intensity).trunc().clamp(0.0, 255.0) as u8
}

/// Map a hue (radians, unwrapped) to a pixel through the three phase-shifted cosines
pub(crate) fn hue_to_rgb(hue: f64) -> Rgb<u8> {
    let mut pixel = Rgb([0; 3]);
    for (slot, channel) in pixel.0.iter_mut().zip(Channel::iter()) {
        *slot = to_channel_value(channel.intensity(hue));
    }
    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn channel_names() {
        let names: Vec<String> = Channel::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["red", "green", "blue"]);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.234)]
    #[case(-7.5)]
    #[case(42.0)]
    fn channel_phase_offsets(#[case] hue: f64) {
        let red = Channel::Red.argument(hue);
        let green = Channel::Green.argument(hue);
        let blue = Channel::Blue.argument(hue);
        assert!((red - green - 2.0 * PI / 3.0).abs() < 1e-12);
        assert!((red - blue - 4.0 * PI / 3.0).abs() < 1e-12);
    }

    #[rstest]
    #[case::zero(0.0, 0)]
    #[case::half(0.5, 127)]
    #[case::full(1.0, 255)]
    #[case::just_below_full(0.999, 254)]
    #[case::above_range(1.01, 255)]
    #[case::below_range(-0.2, 0)]
    fn channel_value_truncates(#[case] intensity: f64, #[case] expected: u8) {
        assert_eq!(to_channel_value(intensity), expected);
    }

    #[test]
    fn intensity_is_bounded() {
        for step in -100..100 {
            let hue = f64::from(step) * 0.37;
            for channel in Channel::iter() {
                let value = channel.intensity(hue);
                assert!((0.0..=1.0).contains(&value), "{channel} out of range at hue {hue}: {value}");
            }
        }
    }

    #[test]
    fn hue_zero_is_red() {
        // cos(0) saturates red; green and blue sit at cos(∓2π/3) = -0.5
        assert_eq!(hue_to_rgb(0.0), Rgb([255, 0, 0]));
    }
}
