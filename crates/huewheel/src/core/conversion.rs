use super::{normalize, ColorSpace};
use crate::Float;

/// Clamp the value to unit range `0..=1`.
///
/// Not-a-number clamps to zero.
#[inline]
pub fn clamp(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamp all three coordinates to unit range `0..=1`.
#[inline]
pub fn clamp_all(coordinates: &[Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;
    [clamp(c1), clamp(c2), clamp(c3)]
}

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the RGB coordinates to 24-bit representation.
///
/// This function clamps the coordinates, scales them by 255, and truncates
/// the result. As a consequence, 0.5 becomes 0x7f and not 0x80.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = clamp_all(coordinates);
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB to HSV.
///
/// Achromatic colors, i.e., grays, have hue and saturation zero.
pub fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let range = max - min;

    if max == min {
        return [0.0, 0.0, max];
    }

    let s = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), s, max]
}

/// Convert HSV to RGB.
pub fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    if s == 0.0 {
        return [v, v, v];
    }

    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i32).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

// --------------------------------------------------------------------------------------------------------------------

const ONE_THIRD: Float = 1.0 / 3.0;
const ONE_SIXTH: Float = 1.0 / 6.0;
const TWO_THIRD: Float = 2.0 / 3.0;

/// Convert RGB to HLS.
///
/// Note the order of coordinates: lightness comes before saturation.
/// Achromatic colors have hue and saturation zero.
pub fn rgb_to_hls(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = sum / 2.0;

    if max == min {
        return [0.0, l, 0.0];
    }

    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max - min)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), l, s]
}

/// Convert HLS to RGB.
pub fn hls_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, l, s] = *value;
    if s == 0.0 {
        return [l, l, l];
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    #[inline]
    fn channel(m1: Float, m2: Float, hue: Float) -> Float {
        let hue = hue.rem_euclid(1.0);
        if hue < ONE_SIXTH {
            m1 + (m2 - m1) * hue * 6.0
        } else if hue < 0.5 {
            m2
        } else if hue < TWO_THIRD {
            m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
        } else {
            m1
        }
    }

    [
        channel(m1, m2, h + ONE_THIRD),
        channel(m1, m2, h),
        channel(m1, m2, h - ONE_THIRD),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB to YIQ.
///
/// YIQ separates luma from chrominance. Palettes use it as one of their sort
/// orders and color info displays it. There is no inverse because nothing
/// edits colors in YIQ.
pub fn rgb_to_yiq(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let y = 0.30 * r + 0.59 * g + 0.11 * b;
    let i = 0.74 * (r - y) - 0.27 * (b - y);
    let q = 0.48 * (r - y) + 0.41 * (b - y);
    [y, i, q]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to the targeted color space, which may be the same as the original
/// color space. Conversions between HSV and HLS go through RGB.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    let rgb = match from_space {
        Rgb => coordinates,
        Hsv => hsv_to_rgb(&coordinates),
        Hls => hls_to_rgb(&coordinates),
    };

    match to_space {
        Rgb => rgb,
        Hsv => rgb_to_hsv(&rgb),
        Hls => rgb_to_hls(&rgb),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_same_coordinates;
    use crate::ColorSpace::*;
    use rand::{Rng, SeedableRng};

    struct Representations {
        rgb: [Float; 3],
        hsv: [Float; 3],
        hls: [Float; 3],
    }

    const BLACK: Representations = Representations {
        rgb: [0.0, 0.0, 0.0],
        hsv: [0.0, 0.0, 0.0],
        hls: [0.0, 0.0, 0.0],
    };

    const PINK: Representations = Representations {
        // #ff3f7f
        rgb: [1.0, 0.25, 0.5],
        hsv: [0.9444444444444444, 0.75, 1.0],
        hls: [0.9444444444444444, 0.625, 1.0],
    };

    const TEAL: Representations = Representations {
        rgb: [0.2, 0.6, 0.6],
        hsv: [0.5, 0.6666666666666667, 0.6],
        hls: [0.5, 0.4, 0.5],
    };

    const GRAY: Representations = Representations {
        rgb: [0.5, 0.5, 0.5],
        hsv: [0.0, 0.0, 0.5],
        hls: [0.0, 0.5, 0.0],
    };

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5), 0.5);
        assert_eq!(clamp(-0.1), 0.0);
        assert_eq!(clamp(1.01), 1.0);
        assert_eq!(clamp(Float::NAN), 0.0);
        for x in [-3.0, -0.0, 0.3, 1.0, 7.5] {
            assert_eq!(clamp(clamp(x)), clamp(x));
        }
        assert_eq!(clamp_all(&[-1.0, 0.5, 2.0]), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_conversions() {
        for color in [&BLACK, &PINK, &TEAL, &GRAY] {
            let hsv = rgb_to_hsv(&color.rgb);
            assert_same_coordinates!(Hsv, &hsv, &color.hsv);

            let rgb = hsv_to_rgb(&hsv);
            assert_same_coordinates!(Rgb, &rgb, &color.rgb);

            let hls = rgb_to_hls(&color.rgb);
            assert_same_coordinates!(Hls, &hls, &color.hls);

            let rgb = hls_to_rgb(&hls);
            assert_same_coordinates!(Rgb, &rgb, &color.rgb);

            let hls = convert(Hsv, Hls, &color.hsv);
            assert_same_coordinates!(Hls, &hls, &color.hls);
        }
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hsv_to_rgb(&[0.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(&[1.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
        assert_same_coordinates!(Rgb, &hsv_to_rgb(&[ONE_THIRD, 1.0, 1.0]), &[0.0, 1.0, 0.0]);
        assert_same_coordinates!(Rgb, &hls_to_rgb(&[TWO_THIRD, 0.5, 1.0]), &[0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[0.0, 0.0, 1.0])[0], TWO_THIRD);
    }

    #[test]
    fn test_round_trips() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);

        for _ in 0..1_000 {
            let rgb: [Float; 3] = [rng.random(), rng.random(), rng.random()];
            assert_same_coordinates!(Rgb, &hsv_to_rgb(&rgb_to_hsv(&rgb)), &rgb);
            assert_same_coordinates!(Rgb, &hls_to_rgb(&rgb_to_hls(&rgb)), &rgb);

            let hsv = rgb_to_hsv(&rgb);
            assert!((0.0..1.0).contains(&hsv[0]));
        }
    }

    #[test]
    fn test_yiq() {
        let [y, i, q] = rgb_to_yiq(&[1.0, 1.0, 1.0]);
        crate::assert_close_enough!(y, 1.0);
        crate::assert_close_enough!(i, 0.0);
        crate::assert_close_enough!(q, 0.0);

        let [y, _, _] = rgb_to_yiq(&PINK.rgb);
        crate::assert_close_enough!(y, 0.5025);
    }

    #[test]
    fn test_24bit() {
        assert_eq!(to_24bit(&[1.0, 0.25, 0.5]), [0xff, 0x3f, 0x7f]);
        assert_eq!(to_24bit(&[1.5, -0.25, 0.999]), [0xff, 0x00, 0xfe]);
        assert_eq!(from_24bit(0xff, 0, 0x33), [1.0, 0.0, 0.2]);
    }
}
