use super::clamp_all;
use crate::Float;

/// The default percentage for a single tint or shade step.
pub const DEFAULT_PERCENT: Float = 5.0;

/// The intensity threshold below which overlays switch to white.
const CONTRAST_THRESHOLD: Float = 160.0 / 255.0;

/// The coefficients for computing intensity, i.e., luma.
const INTENSITY: &[Float; 3] = &[0.299, 0.587, 0.114];

/// Compute the intensity of the RGB color.
///
/// Intensity is the luma-weighted sum `0.299R + 0.587G + 0.114B`.
pub fn rgb_intensity(rgb: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *INTENSITY;
    let [r, g, b] = *rgb;
    r.mul_add(c1, g.mul_add(c2, b * c3))
}

/// A color for text or outlines drawn on top of another color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Contrast {
    Black,
    White,
}

impl Contrast {
    /// Get the contrasting color's RGB coordinates.
    pub const fn rgb(&self) -> [Float; 3] {
        match *self {
            Self::Black => [0.0, 0.0, 0.0],
            Self::White => [1.0, 1.0, 1.0],
        }
    }

    /// Get the contrasting color's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// Determine the color that is legible on top of the given RGB color.
///
/// This function returns white for black and for colors with an intensity
/// below 160/255. It returns black otherwise.
pub fn contrast_color(rgb: &[Float; 3]) -> Contrast {
    if *rgb == [0.0, 0.0, 0.0] || rgb_intensity(rgb) < CONTRAST_THRESHOLD {
        Contrast::White
    } else {
        Contrast::Black
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Shift all three channels by the given per-channel deltas.
///
/// Positive deltas move towards white, negative ones towards black. The
/// result is clamped to unit range. A uniform shift simply repeats the same
/// delta, as in `[0.1; 3]`.
pub fn luminosity_transform(rgb: &[Float; 3], delta: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let [dr, dg, db] = *delta;
    clamp_all(&[r + dr, g + dg, b + db])
}

/// Lighten the RGB color by the given percentage.
///
/// The percentage is added to every channel, i.e., the default 5% moves
/// every channel 0.05 towards 1.0.
pub fn rgb_tint(rgb: &[Float; 3], percent: Float) -> [Float; 3] {
    luminosity_transform(rgb, &[percent / 100.0; 3])
}

/// Darken the RGB color by the given percentage.
pub fn rgb_shade(rgb: &[Float; 3], percent: Float) -> [Float; 3] {
    luminosity_transform(rgb, &[-percent / 100.0; 3])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;
    use crate::core::assert_same_coordinates;
    use crate::ColorSpace::Rgb;

    const PINK: [Float; 3] = [1.0, 0.25, 0.5];

    #[test]
    fn test_intensity() {
        assert_close_enough!(rgb_intensity(&PINK), 0.50275);
        assert_close_enough!(rgb_intensity(&[1.0, 1.0, 1.0]), 1.0);
        assert_eq!(rgb_intensity(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_contrast_color() {
        assert_eq!(contrast_color(&[0.0, 0.0, 0.0]), Contrast::White);
        assert_eq!(contrast_color(&[1.0, 1.0, 1.0]), Contrast::Black);
        assert_eq!(contrast_color(&PINK), Contrast::White);
        assert_eq!(contrast_color(&[1.0, 1.0, 0.0]), Contrast::Black);
        assert_eq!(contrast_color(&[0.0, 0.0, 1.0]), Contrast::White);
        assert_eq!(Contrast::White.rgb(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_tint_and_shade() {
        assert_same_coordinates!(Rgb, &rgb_tint(&PINK, 2.0), &[1.0, 0.27, 0.52]);
        assert_same_coordinates!(Rgb, &rgb_tint(&PINK, DEFAULT_PERCENT), &[1.0, 0.3, 0.55]);
        assert_same_coordinates!(Rgb, &rgb_shade(&PINK, 2.0), &[0.98, 0.23, 0.48]);
        assert_same_coordinates!(Rgb, &rgb_shade(&PINK, DEFAULT_PERCENT), &[0.95, 0.2, 0.45]);
    }

    #[test]
    fn test_luminosity_transform() {
        assert_eq!(
            luminosity_transform(&[0.5, 0.5, 0.5], &[0.75, -0.75, 0.0]),
            [1.0, 0.0, 0.5]
        );
    }
}
