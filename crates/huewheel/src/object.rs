use crate::core::{
    clamp_all, color_string_to_color, contrast_color, convert, format, format_as, from_24bit,
    rgb_intensity, rgb_shade, rgb_tint, to_24bit, to_eq_coordinates, ColorFormat, ColorSpace,
    Contrast, DEFAULT_DECIMALS,
};
use crate::tint::{rgb_shades, rgb_tints, Progression};
use crate::Float;

/// A color object.
///
/// A color combines a [`ColorSpace`] with three coordinates. Since RGB, HSV,
/// and HLS are different coordinate systems for the same RGB cube, no space
/// is canonical and [`Color::to`] freely converts between them. Operations
/// that are only meaningful in RGB, such as computing the intensity or
/// generating tints, implicitly convert to RGB first and return RGB colors.
///
/// ## Equality Testing and Hashing
///
/// Equality testing and hashing require that equal colors also have equal
/// hashes. Hence this struct performs the following steps to prepare
/// coordinates for either operation:
///
///   * To turn coordinates into comparable entities, replace not-a-numbers
///     with positive zero;
///   * To preserve rotation semantics for hues, remove all full turns;
///   * To allow for floating point error, multiply by 1e12 (or 1e4 for `f32`)
///     and then round;
///   * To make zeros comparable, replace negative zero with positive zero;
///   * To convince Rust that coordinates are comparable, convert to bits.
///
/// Colors in different color spaces are never equal, even if they describe
/// the same RGB color.
///
/// ## Coordinate Access
///
/// Rust code can access individual coordinates by indexing a color object
/// with integers `0..2`.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use huewheel::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Hsv, [0.9, 0.75, 1.0]);
    /// assert_eq!(pink.as_ref(), &[0.9, 0.75, 1.0]);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new RGB color.
    pub fn rgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Rgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new HSV color.
    pub fn hsv(h: impl Into<Float>, s: impl Into<Float>, v: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hsv, [h.into(), s.into(), v.into()])
    }

    /// Instantiate a new HLS color. Lightness comes before saturation.
    pub fn hls(h: impl Into<Float>, l: impl Into<Float>, s: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hls, [h.into(), l.into(), s.into()])
    }

    /// Instantiate a new RGB color from its 24-bit representation.
    ///
    /// ```
    /// # use huewheel::{Color, ColorSpace};
    /// let blue = Color::from_24bit(0, 0, 255);
    /// assert_eq!(blue, Color::rgb(0, 0, 1));
    /// ```
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Rgb, from_24bit(r, g, b))
    }

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// ```
    /// # use huewheel::{Color, ColorSpace};
    /// let pink = Color::rgb(1, 0.25, 0.5).to(ColorSpace::Hls);
    /// assert_eq!(pink.space(), ColorSpace::Hls);
    /// assert_eq!(format!("{}", pink), "hls(0.944,0.625,1.000)");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    /// Get this color's RGB coordinates.
    pub fn to_rgb(&self) -> [Float; 3] {
        convert(self.space, ColorSpace::Rgb, &self.coordinates)
    }

    /// Clamp this color's coordinates to unit range.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clamp(&self) -> Self {
        Self::new(self.space, clamp_all(&self.coordinates))
    }

    /// Convert this color to 24-bit RGB representation.
    ///
    /// Coordinates are clamped, scaled by 255, and truncated.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.to_rgb())
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal
    /// representation.
    ///
    /// ```
    /// # use huewheel::Color;
    /// assert_eq!(Color::rgb(1, 0.25, 0.5).to_hex_format(), "#ff3f7f");
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Format this color as a color literal in the given format with the
    /// default number of decimals.
    pub fn to_literal(&self, format: ColorFormat) -> String {
        format_as(format, &self.to_rgb(), DEFAULT_DECIMALS)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute this color's intensity.
    pub fn intensity(&self) -> Float {
        rgb_intensity(&self.to_rgb())
    }

    /// Determine the color for legible text or outlines on top of this color.
    pub fn contrast_color(&self) -> Contrast {
        contrast_color(&self.to_rgb())
    }

    /// Lighten this color by the given percentage, producing an RGB color.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn tint(&self, percent: Float) -> Self {
        Self::new(ColorSpace::Rgb, rgb_tint(&self.to_rgb(), percent))
    }

    /// Darken this color by the given percentage, producing an RGB color.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn shade(&self, percent: Float) -> Self {
        Self::new(ColorSpace::Rgb, rgb_shade(&self.to_rgb(), percent))
    }

    /// Generate up to `count` distinct tints of this color.
    ///
    /// See [`rgb_tints`] for details.
    pub fn tints(&self, base_percent: Float, count: usize, progression: Progression) -> Vec<Self> {
        rgb_tints(&self.to_rgb(), base_percent, count, progression)
            .into_iter()
            .map(|rgb| Self::new(ColorSpace::Rgb, rgb))
            .collect()
    }

    /// Generate up to `count` distinct shades of this color.
    ///
    /// See [`rgb_shades`] for details.
    pub fn shades(&self, base_percent: Float, count: usize, progression: Progression) -> Vec<Self> {
        rgb_shades(&self.to_rgb(), base_percent, count, progression)
            .into_iter()
            .map(|rgb| Self::new(ColorSpace::Rgb, rgb))
            .collect()
    }
}

impl Default for Color {
    /// Create an instance of the default color, i.e., black in RGB.
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Rgb, [0.0, 0.0, 0.0])
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::from_24bit(r, g, b)
    }
}

impl std::str::FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// This method accepts all color literals recognized by
    /// [`color_string_to_color`](crate::color_string_to_color), including the
    /// short hexadecimal form. Hexadecimal literals produce RGB colors and
    /// functional literals colors in the function's color space.
    ///
    /// ```
    /// # use huewheel::{Color, ColorSpace};
    /// # use huewheel::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let red = Color::from_str("#f00")?;
    /// assert_eq!(red, Color::rgb(1, 0, 0));
    ///
    /// let teal: Color = str::parse("hsv(0.5, 0.5, 0.5)")?;
    /// assert_eq!(teal.space(), ColorSpace::Hsv);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        color_string_to_color(s, true)
            .map(|(format, coordinates)| Self::new(format.space(), coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// ```
    /// # use huewheel::Color;
    /// assert_eq!(Color::hsv(1.25, 0.5, 0.5), Color::hsv(0.25, 0.5, 0.5));
    /// assert_eq!(Color::rgb(0.1 + 0.2, 0, 0), Color::rgb(0.3, 0, 0));
    /// assert_ne!(Color::rgb(1, 0, 0), Color::hsv(0, 1, 1));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in functional notation for its color
    /// space, with comma-separated coordinates and no spaces. It respects the
    /// formatter's precision, defaulting to 3 digits past the decimal.
    ///
    /// ```
    /// # use huewheel::Color;
    /// let pink = Color::rgb(1, 0.25, 0.5);
    /// assert_eq!(format!("{}", pink), "rgb(1.000,0.250,0.500)");
    /// assert_eq!(format!("{:.2}", pink), "rgb(1.00,0.25,0.50)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================
