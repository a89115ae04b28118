//! Utility module with huewheel's errors.
//!
//! Errors fall into two camps. Malformed color literals are *data*: they come
//! from people typing into an entry field, so [`ColorFormatError`] carries
//! enough information for the caller to mark the field invalid and move on.
//! Everything else indicates an integration bug, such as an out-of-range hue
//! handed to [`ColorWheel::set_hue`](crate::wheel::ColorWheel::set_hue), and
//! should be propagated as a hard failure.

use crate::core::ColorFormat;
use crate::Float;

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=2` for the element index of a
///     [`ColorSlider`](crate::slider::ColorSlider);
///   * `0..=359` for hue angles in whole degrees.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{value} does not fit into range {}..={}", .expected.start(), .expected.end())]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

// ====================================================================================================================

/// An out-of-range error for a unit-range quantity.
///
/// Hue, saturation, and value setters only accept `0.0..=1.0`. Unlike color
/// literals, these setters are called by code, not people, so a value outside
/// the unit range is a bug and not silently clamped.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{name} must be between 0.0 and 1.0 but is {value}")]
pub struct OutOfRangeError {
    pub name: &'static str,
    pub value: Float,
}

impl OutOfRangeError {
    /// Check that the named value is in unit range.
    pub fn check(name: &'static str, value: Float) -> Result<Float, Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(Self { name, value })
        }
    }
}

// ====================================================================================================================

/// The kinds of malformed color literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatErrorKind {
    /// A color literal that starts with neither `#` nor one of `rgb(`,
    /// `hsv(`, and `hls(`.
    #[error("color literal should start with `#`, `rgb(`, `hsv(`, or `hls(`")]
    UnknownFormat,

    /// A hashed color literal with a length other than 3 or 6 digits. For
    /// example, `#00` is missing a hexadecimal digit.
    #[error("hexadecimal color literal should have 6 digits (or 3 if short form is allowed)")]
    UnexpectedLength,

    /// A three-digit hashed color literal where those are not allowed.
    #[error("short hexadecimal color literal is not allowed here")]
    ShortHexNotAllowed,

    /// A hashed color literal with a character that is not a hexadecimal
    /// digit. For example, `#efg` has a malformed third digit.
    #[error("hexadecimal color literal should contain hexadecimal digits only")]
    MalformedHex,

    /// A functional color literal without the closing parenthesis. For
    /// example, `rgb(1,2,3` is missing the closing parenthesis.
    #[error("color function should end with a closing parenthesis but does not")]
    NoClosingParenthesis,

    /// A functional color literal with fewer than three components. For
    /// example, `hsv(0.5,1)` is missing the third component.
    #[error("color function should have 3 components but is missing one")]
    MissingComponent,

    /// A functional color literal with more than three components.
    #[error("color function should have 3 components but has more")]
    TooManyComponents,

    /// A functional color literal with a component that is not a floating
    /// point number, such as `rgb(1,x,0)`.
    #[error("color function components should be floating point numbers but are not")]
    MalformedFloat,
}

/// An erroneous color literal.
///
/// Parsing a color literal is a two-step process: First recognize the format
/// by its prefix, then decode the components. This error records how far
/// parsing got. [`ColorFormatError::format`] is `None` if the format itself
/// was not recognized and the attempted format otherwise. An entry field can
/// use that to remember the format the user is typing in even while the
/// literal is still incomplete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ColorFormatError {
    format: Option<ColorFormat>,
    kind: ColorFormatErrorKind,
}

impl ColorFormatError {
    /// Create a new error for an unrecognized color literal.
    pub const fn unknown() -> Self {
        Self {
            format: None,
            kind: ColorFormatErrorKind::UnknownFormat,
        }
    }

    /// Create a new error for a malformed color literal of a known format.
    pub const fn new(format: ColorFormat, kind: ColorFormatErrorKind) -> Self {
        Self {
            format: Some(format),
            kind,
        }
    }

    /// Get the format recognized before parsing failed, if any.
    pub const fn format(&self) -> Option<ColorFormat> {
        self.format
    }

    /// Get the kind of error.
    pub const fn kind(&self) -> ColorFormatErrorKind {
        self.kind
    }
}

// ====================================================================================================================

/// An error constructing the color wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    /// The radius leaves no room for the saturation/value triangle.
    #[error("wheel radius {radius} is smaller than the minimum of {minimum}")]
    RadiusTooSmall { radius: u32, minimum: u32 },

    /// The radius results in an unreasonably large image.
    #[error("wheel radius {radius} is larger than the maximum of {maximum}")]
    RadiusTooLarge { radius: u32, maximum: u32 },
}

// ====================================================================================================================

/// An error while loading or modifying a palette.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// An attempt to modify a read-only palette.
    #[error("palette {0} is read only")]
    ReadOnly(String),

    /// A lookup for a color name that is not part of the palette.
    #[error("color name {0} not in palette")]
    UnknownName(String),

    /// A palette line that is neither comment nor `r g b name`.
    #[error("line {line} of palette is malformed: {content}")]
    MalformedLine { line: usize, content: String },
}

// ====================================================================================================================

/// An error while reading, parsing, or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not access settings file")]
    Io(#[from] std::io::Error),

    #[error("could not parse settings")]
    Json(#[from] serde_json::Error),

    #[error("settings version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    #[error("settings entry {key} has invalid color {value:?}")]
    InvalidColor {
        key: &'static str,
        value: String,
        #[source]
        source: ColorFormatError,
    },

    #[error("settings entry wheel.radius is invalid")]
    InvalidRadius(#[from] WheelError),

    #[error("settings entry tints.count is {count} but should be between 1 and {maximum}")]
    InvalidToneCount { count: usize, maximum: usize },

    #[error("could not determine settings directory")]
    NoSettingsDirectory,
}
