/// Linear RGB colour with every channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Converts a channel to an 8-bit value, rounding to nearest.
    ///
    /// Out-of-range and NaN inputs are clamped (NaN becomes 0).
    #[must_use]
    pub fn channel_to_u8(channel: f32) -> u8 {
        if channel.is_nan() {
            return 0;
        }

        (channel.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            Self::channel_to_u8(self.r),
            Self::channel_to_u8(self.g),
            Self::channel_to_u8(self.b),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_converts_to_zero_bytes() {
        assert_eq!(Colour::BLACK.to_rgb8(), [0, 0, 0]);
    }

    #[test]
    fn test_full_channels_convert_to_255() {
        let white = Colour {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        };

        assert_eq!(white.to_rgb8(), [255, 255, 255]);
    }

    #[test]
    fn test_channel_rounds_to_nearest() {
        assert_eq!(Colour::channel_to_u8(0.5), 128);
        assert_eq!(Colour::channel_to_u8(0.25), 64);
        assert_eq!(Colour::channel_to_u8(0.001), 0);
    }

    #[test]
    fn test_channel_clamps_out_of_range() {
        assert_eq!(Colour::channel_to_u8(-0.3), 0);
        assert_eq!(Colour::channel_to_u8(1.7), 255);
        assert_eq!(Colour::channel_to_u8(f32::NAN), 0);
    }
}
