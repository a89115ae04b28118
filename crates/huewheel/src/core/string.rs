use super::{clamp, convert, to_24bit, ColorFormat, ColorSpace};
use crate::error::{ColorFormatError, ColorFormatErrorKind};
use crate::Float;

/// The default number of decimal places for functional notation.
pub const DEFAULT_DECIMALS: usize = 3;

/// Format the RGB color as hashed hexadecimal.
///
/// Each channel is clamped, scaled by 255, and truncated before being
/// formatted as two lowercase hexadecimal digits. Hence `[1.0, 0.25, 0.5]`
/// becomes `#ff3f7f`.
pub fn rgb_to_hex(rgb: &[Float; 3]) -> String {
    let [r, g, b] = to_24bit(rgb);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse a color in hashed hexadecimal format.
///
/// This function accepts `#` followed by six hexadecimal digits or, if
/// `allow_short` is set, three hexadecimal digits, which are duplicated. Both
/// upper- and lowercase digits are valid. Unlike [`color_string_to_color`],
/// this function does not trim white space.
pub fn parse_hex(s: &str, allow_short: bool) -> Result<[Float; 3], ColorFormatError> {
    use ColorFormatErrorKind::*;

    let digits = s.strip_prefix('#').ok_or(ColorFormatError::unknown())?;
    let error = |kind| ColorFormatError::new(ColorFormat::RgbHex, kind);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(error(MalformedHex));
    }

    let width = match digits.len() {
        6 => 2,
        3 if allow_short => 1,
        3 => return Err(error(ShortHexNotAllowed)),
        _ => return Err(error(UnexpectedLength)),
    };

    let mut coordinates = [0.0; 3];
    for (index, coordinate) in coordinates.iter_mut().enumerate() {
        let t = digits
            .get(width * index..width * (index + 1))
            .ok_or(error(UnexpectedLength))?;
        let n = u8::from_str_radix(t, 16).map_err(|_| error(MalformedHex))?;
        let n = if width == 1 { 16 * n + n } else { n };
        *coordinate = n as Float / 255.0;
    }

    Ok(coordinates)
}

/// Parse a color in hashed hexadecimal format, returning `None` on failure.
///
/// See [`parse_hex`] for the accepted syntax.
pub fn hex_to_rgb(s: &str, allow_short: bool) -> Option<[Float; 3]> {
    parse_hex(s, allow_short).ok()
}

// --------------------------------------------------------------------------------------------------------------------

fn format_function(
    space: ColorSpace,
    coordinates: &[Float; 3],
    decimals: usize,
) -> String {
    let [c1, c2, c3] = *coordinates;
    format!(
        "{}({:.*},{:.*},{:.*})",
        space.name(),
        decimals,
        c1,
        decimals,
        c2,
        decimals,
        c3
    )
}

/// Format the RGB color in functional notation, e.g., `rgb(1.000,0.250,0.500)`.
pub fn rgb_to_string(rgb: &[Float; 3], decimals: usize) -> String {
    format_function(ColorSpace::Rgb, rgb, decimals)
}

/// Format the RGB color as HSV in functional notation, e.g.,
/// `hsv(0.944,0.750,1.000)`.
pub fn rgb_to_hsv_string(rgb: &[Float; 3], decimals: usize) -> String {
    format_function(
        ColorSpace::Hsv,
        &convert(ColorSpace::Rgb, ColorSpace::Hsv, rgb),
        decimals,
    )
}

/// Format the RGB color as HLS in functional notation, e.g.,
/// `hls(0.944,0.625,1.000)`.
pub fn rgb_to_hls_string(rgb: &[Float; 3], decimals: usize) -> String {
    format_function(
        ColorSpace::Hls,
        &convert(ColorSpace::Rgb, ColorSpace::Hls, rgb),
        decimals,
    )
}

/// Format the RGB color in the given literal format.
pub(crate) fn format_as(format: ColorFormat, rgb: &[Float; 3], decimals: usize) -> String {
    match format {
        ColorFormat::RgbHex => rgb_to_hex(rgb),
        ColorFormat::Rgb => rgb_to_string(rgb, decimals),
        ColorFormat::Hsv => rgb_to_hsv_string(rgb, decimals),
        ColorFormat::Hls => rgb_to_hls_string(rgb, decimals),
    }
}

/// Describe the RGB color in several formats, one per line.
///
/// Swatches and color info displays use this text. The order of lines
/// follows the order of formats.
pub fn color_info_text(rgb: &[Float; 3], formats: &[ColorFormat], decimals: usize) -> String {
    formats
        .iter()
        .map(|format| format_as(*format, rgb, decimals))
        .collect::<Vec<_>>()
        .join("\n")
}

// --------------------------------------------------------------------------------------------------------------------

const FUNCTIONS: [(&str, ColorFormat); 3] = [
    ("rgb(", ColorFormat::Rgb),
    ("hsv(", ColorFormat::Hsv),
    ("hls(", ColorFormat::Hls),
];

/// Parse a color in functional notation. Components are clamped.
fn parse_function(s: &str) -> Result<(ColorFormat, [Float; 3]), ColorFormatError> {
    use ColorFormatErrorKind::*;

    let (format, rest) = FUNCTIONS
        .iter()
        .filter_map(|(p, f)| s.strip_prefix(p).map(|r| (*f, r)))
        .next()
        .ok_or(ColorFormatError::unknown())?;
    let error = |kind| ColorFormatError::new(format, kind);

    let body = rest.strip_suffix(')').ok_or(error(NoClosingParenthesis))?;

    let parse_coordinate = |s: Option<&str>| -> Result<Float, ColorFormatError> {
        let t = s.ok_or(error(MissingComponent))?;
        let n: Float = t.trim().parse().map_err(|_| error(MalformedFloat))?;
        if n.is_nan() {
            return Err(error(MalformedFloat));
        }
        Ok(clamp(n))
    };

    let mut iter = body.split(',');
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(error(TooManyComponents));
    }

    Ok((format, [c1, c2, c3]))
}

/// Parse a color literal.
///
/// This function trims leading and trailing white space and then dispatches
/// on the first characters: `#` selects hashed hexadecimal, whereas `rgb(`,
/// `hsv(`, and `hls(` select functional notation with three comma-separated
/// floating point components. Components outside unit range are clamped.
///
/// On success, this function returns the recognized format and the
/// coordinates in that format's color space, i.e., HSV coordinates for
/// `hsv(..)`. On failure, the error still reports the recognized format, if
/// any. Malformed input never panics.
pub fn color_string_to_color(
    s: &str,
    allow_short_hex: bool,
) -> Result<(ColorFormat, [Float; 3]), ColorFormatError> {
    let s = s.trim();

    if s.starts_with('#') {
        Ok((ColorFormat::RgbHex, parse_hex(s, allow_short_hex)?))
    } else {
        parse_function(s)
    }
}

/// Parse a color literal and convert it to RGB.
///
/// Short hexadecimal literals are accepted.
pub fn color_string_to_rgb(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let (format, coordinates) = color_string_to_color(s, true)?;
    Ok(convert(format.space(), ColorSpace::Rgb, &coordinates))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the color as a string.
///
/// This function formats the coordinates in functional notation for the
/// given color space. It respects the formatter's precision, defaulting to
/// [`DEFAULT_DECIMALS`].
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(&format_function(
        space,
        coordinates,
        f.precision().unwrap_or(DEFAULT_DECIMALS),
    ))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_same_coordinates;
    use crate::error::ColorFormatErrorKind::*;
    use crate::ColorSpace::Rgb;
    use rand::{Rng, SeedableRng};

    const PINK: [Float; 3] = [1.0, 0.25, 0.5];

    fn kind_of(result: Result<(ColorFormat, [Float; 3]), ColorFormatError>) -> ColorFormatErrorKind {
        result.unwrap_err().kind()
    }

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#123", true)?, parse_hex("#112233", false)?);
        assert_eq!(parse_hex("#FFffFF", false)?, [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex("fff", true), Err(ColorFormatError::unknown()));
        assert_eq!(parse_hex("#ff", true).unwrap_err().kind(), UnexpectedLength);
        assert_eq!(parse_hex("#0g0", true).unwrap_err().kind(), MalformedHex);
        assert_eq!(parse_hex("#💩00", true).unwrap_err().kind(), MalformedHex);
        assert_eq!(parse_hex("#abc", false).unwrap_err().kind(), ShortHexNotAllowed);
        assert_eq!(
            parse_hex("#abc", false).unwrap_err().format(),
            Some(ColorFormat::RgbHex)
        );

        let [r, g, b] = parse_hex("#7f7f7f", false)?;
        for c in [r, g, b] {
            assert!((c - 0.5).abs() < 0.005);
        }

        assert_eq!(hex_to_rgb("#000000", false), Some([0.0, 0.0, 0.0]));
        assert_eq!(hex_to_rgb("#00000", true), None);
        Ok(())
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(&[1.0, 1.0, 1.0]), "#ffffff");
        assert_eq!(rgb_to_hex(&[0.0, 0.0, 0.0]), "#000000");
        assert_eq!(rgb_to_hex(&[0.5, 0.5, 0.5]), "#7f7f7f");
        assert_eq!(rgb_to_hex(&PINK), "#ff3f7f");
        assert_eq!(rgb_to_hex(&[1.5, -1.0, 0.5]), "#ff007f");
    }

    #[test]
    fn test_hex_round_trip() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(255);

        for _ in 0..1_000 {
            let rgb: [Float; 3] = [rng.random(), rng.random(), rng.random()];
            let Some(recovered) = hex_to_rgb(&rgb_to_hex(&rgb), false) else {
                panic!("could not parse hexadecimal for {:?}", rgb);
            };
            for (c1, c2) in rgb.iter().zip(recovered.iter()) {
                assert!((c1 - c2).abs() <= 1.0 / 255.0, "{:?} vs {:?}", rgb, recovered);
            }
        }
    }

    #[test]
    fn test_function_strings() {
        assert_eq!(rgb_to_string(&PINK, DEFAULT_DECIMALS), "rgb(1.000,0.250,0.500)");
        assert_eq!(rgb_to_hsv_string(&PINK, DEFAULT_DECIMALS), "hsv(0.944,0.750,1.000)");
        assert_eq!(rgb_to_hls_string(&PINK, DEFAULT_DECIMALS), "hls(0.944,0.625,1.000)");
        assert_eq!(rgb_to_string(&[0.0, 0.33333, 1.0], 1), "rgb(0.0,0.3,1.0)");
    }

    #[test]
    fn test_color_string_to_color() -> Result<(), ColorFormatError> {
        let (format, rgb) = color_string_to_color("#7f7f7f", false)?;
        assert_eq!(format, ColorFormat::RgbHex);
        assert!(rgb.iter().all(|c| (c - 0.5).abs() < 0.005));

        assert_eq!(
            color_string_to_color("  rgb(1, 0.25 , 0.5)\n", false)?,
            (ColorFormat::Rgb, PINK)
        );
        assert_eq!(
            color_string_to_color("hsv(1.5,-2,0.5)", false)?,
            (ColorFormat::Hsv, [1.0, 0.0, 0.5])
        );
        assert_eq!(
            color_string_to_color("hls(0.5,0.5,1)", false)?,
            (ColorFormat::Hls, [0.5, 0.5, 1.0])
        );

        assert_eq!(
            color_string_to_color("cmyk(0,0,0,0)", true),
            Err(ColorFormatError::unknown())
        );
        assert_eq!(color_string_to_color("", true), Err(ColorFormatError::unknown()));
        assert_eq!(color_string_to_color("RGB(1,1,1)", true), Err(ColorFormatError::unknown()));
        assert_eq!(kind_of(color_string_to_color("rgb(1,1,1", true)), NoClosingParenthesis);
        assert_eq!(kind_of(color_string_to_color("rgb(1,1)", true)), MissingComponent);
        assert_eq!(kind_of(color_string_to_color("rgb(1,1,1,1)", true)), TooManyComponents);
        assert_eq!(kind_of(color_string_to_color("rgb(1,x,1)", true)), MalformedFloat);
        assert_eq!(kind_of(color_string_to_color("rgb(1,,1)", true)), MalformedFloat);
        assert_eq!(kind_of(color_string_to_color("rgb(1,NaN,1)", true)), MalformedFloat);
        assert_eq!(kind_of(color_string_to_color("#abc", false)), ShortHexNotAllowed);

        let error = color_string_to_color("hls(0.5,", true).unwrap_err();
        assert_eq!(error.format(), Some(ColorFormat::Hls));
        Ok(())
    }

    #[test]
    fn test_literal_round_trips() -> Result<(), ColorFormatError> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let rgb: [Float; 3] = [rng.random(), rng.random(), rng.random()];
            for format in [ColorFormat::Rgb, ColorFormat::Hsv, ColorFormat::Hls] {
                let recovered = color_string_to_rgb(&format_as(format, &rgb, 12))?;
                for (c1, c2) in rgb.iter().zip(recovered.iter()) {
                    assert!((c1 - c2).abs() < 1e-9, "{:?} vs {:?}", rgb, recovered);
                }
            }
        }

        assert_same_coordinates!(Rgb, &color_string_to_rgb("hsv(0,1,1)")?, &[1.0, 0.0, 0.0]);
        assert_eq!(color_string_to_rgb("#f00")?, [1.0, 0.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_color_info_text() {
        assert_eq!(
            color_info_text(
                &PINK,
                &[ColorFormat::RgbHex, ColorFormat::Rgb, ColorFormat::Hsv],
                2
            ),
            "#ff3f7f\nrgb(1.00,0.25,0.50)\nhsv(0.94,0.75,1.00)"
        );
        assert_eq!(color_info_text(&PINK, &[], 2), "");
    }
}
