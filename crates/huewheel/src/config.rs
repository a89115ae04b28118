//! Persistent settings.
//!
//! [`Settings`] capture the defaults shared by all controls: the colors of
//! decorations, the fonts for text and numbers, the wheel's radius, and the
//! parameters of tint and shade strips. They are stored as versioned JSON in
//! the user's configuration directory.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::color_string_to_rgb;
use crate::error::{ColorFormatError, ConfigError};
use crate::palette::Palette;
use crate::tint::{Direction, Progression, ToneStrip, MAX_TONES};
use crate::var::ColorVar;
use crate::wheel::{WheelGeometry, DEFAULT_RADIUS};
use crate::Float;

/// The current version of the settings format.
pub const CONFIG_VERSION: u32 = 1;

/// The maximum number of parts of a font description.
pub const MAX_FONT_PARTS: usize = 3;

static X11_PALETTE: OnceLock<Option<Palette>> = OnceLock::new();

fn build_x11_palette() -> Option<Palette> {
    Palette::builtin().ok()
}

/// Get the built-in palette, which is parsed only once.
fn get_x11_palette() -> Option<&'static Palette> {
    X11_PALETTE.get_or_init(build_x11_palette).as_ref()
}

/// Resolve a color setting.
///
/// A setting may be empty, which means "use the toolkit's default", a color
/// literal, or the name of an X11 color.
pub fn resolve_color(value: &str) -> Result<Option<[Float; 3]>, ColorFormatError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match color_string_to_rgb(value) {
        Ok(rgb) => Ok(Some(rgb)),
        Err(error) => get_x11_palette()
            .and_then(|palette| palette.lookup_name(value).ok())
            .map(Some)
            .ok_or(error),
    }
}

/// Split a font description into at most three parts: family, size, and style.
pub fn parse_font(description: &str) -> Vec<String> {
    description
        .split(',')
        .take(MAX_FONT_PARTS)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

// --------------------------------------------------------------------------------------------------------------------

/// The colors of decorations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// The background of swatches and calendars.
    pub fill: String,
    /// The outline of the current selection.
    pub select: String,
    /// The outline of the current selection on dark backgrounds.
    pub select_dark: String,
    /// The background of headers.
    pub header: String,
    /// The outline of markers.
    pub outline: String,
    /// The text color of invalid input.
    pub invalid: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            fill: "white".to_string(),
            select: "#FF453A".to_string(),
            select_dark: "#58B1B7".to_string(),
            header: String::new(),
            outline: "#fff".to_string(),
            invalid: "red".to_string(),
        }
    }
}

impl ColorSettings {
    /// Get all entries with their keys.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("fill", self.fill.as_str()),
            ("select", self.select.as_str()),
            ("select_dark", self.select_dark.as_str()),
            ("header", self.header.as_str()),
            ("outline", self.outline.as_str()),
            ("invalid", self.invalid.as_str()),
        ]
    }

    /// Resolve the entry with the given key.
    ///
    /// This method returns `None` for unknown keys, empty entries, and
    /// invalid colors.
    pub fn rgb(&self, key: &str) -> Option<[Float; 3]> {
        self.entries()
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, value)| resolve_color(value).ok().flatten())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.entries() {
            resolve_color(value).map_err(|source| ConfigError::InvalidColor {
                key,
                value: value.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

/// The fonts for text and numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub text: String,
    pub monospace: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            text: "sans-serif".to_string(),
            monospace: "monospace".to_string(),
        }
    }
}

impl FontSettings {
    /// Get the parts of the text font.
    pub fn text_parts(&self) -> Vec<String> {
        parse_font(&self.text)
    }

    /// Get the parts of the monospace font.
    pub fn monospace_parts(&self) -> Vec<String> {
        parse_font(&self.monospace)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    pub radius: u32,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
        }
    }
}

/// The parameters of tint and shade strips.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TintSettings {
    pub count: usize,
    pub min_percent: u32,
    pub max_percent: u32,
    pub progression: Progression,
}

impl Default for TintSettings {
    fn default() -> Self {
        Self {
            count: 5,
            min_percent: 1,
            max_percent: 5,
            progression: Progression::Linear,
        }
    }
}

impl TintSettings {
    /// Get the range of percentages. An inverted range collapses onto its
    /// minimum.
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min_percent..=self.max_percent.max(self.min_percent)
    }

    /// Create a strip with these parameters.
    pub fn strip(&self, var: ColorVar, direction: Direction) -> ToneStrip {
        ToneStrip::new(var, direction, self.count, self.range(), self.progression)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// All settings.
///
/// ```
/// # use huewheel::config::{Settings, CONFIG_VERSION};
/// # fn main() -> Result<(), huewheel::error::ConfigError> {
/// let settings = Settings::from_json(r#"{ "version": 1, "wheel": { "radius": 64 } }"#)?;
/// assert_eq!(settings.wheel.radius, 64);
/// assert_eq!(settings.tints.count, 5);
///
/// let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
/// assert!(Settings::from_json(&json).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub version: u32,
    #[serde(default)]
    pub colors: ColorSettings,
    #[serde(default)]
    pub fonts: FontSettings,
    #[serde(default)]
    pub wheel: WheelSettings,
    #[serde(default)]
    pub tints: TintSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            colors: ColorSettings::default(),
            fonts: FontSettings::default(),
            wheel: WheelSettings::default(),
            tints: TintSettings::default(),
        }
    }
}

impl Settings {
    /// Get the name of the settings file.
    pub const fn default_filename() -> &'static str {
        "settings.json"
    }

    /// Get the path of the settings file in the user's configuration
    /// directory, falling back on `~/.config`.
    pub fn default_path() -> Option<PathBuf> {
        let dir = dirs::config_dir().or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
        Some(dir.join("huewheel").join(Self::default_filename()))
    }

    /// Serialize the settings as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize and validate settings from JSON.
    ///
    /// Missing sections and entries take on their defaults. Settings from a
    /// newer version, invalid colors, radii outside the wheel's limits, and
    /// tone counts outside `1..=MAX_TONES` are errors.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;

        if settings.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: settings.version,
                supported_version: CONFIG_VERSION,
            });
        }

        settings.colors.validate()?;
        WheelGeometry::new(settings.wheel.radius)?;
        if !(1..=MAX_TONES).contains(&settings.tints.count) {
            return Err(ConfigError::InvalidToneCount {
                count: settings.tints.count,
                maximum: MAX_TONES,
            });
        }
        Ok(settings)
    }

    /// Load settings from the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::debug!("loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from the file, falling back on defaults.
    ///
    /// A missing file is expected. Any other error is logged as a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no settings at {:?}, using defaults", path);
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|error| {
            log::warn!("could not load settings from {:?}: {}", path, error);
            Self::default()
        })
    }

    /// Save settings to the file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_json()?)?;
        log::debug!("saved settings to {:?}", path);
        Ok(())
    }

    /// Save settings to the default path.
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoSettingsDirectory)?;
        self.save(path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{ColorFormatErrorKind, WheelError};

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color(""), Ok(None));
        assert_eq!(resolve_color("#fff"), Ok(Some([1.0, 1.0, 1.0])));
        assert_eq!(resolve_color("red"), Ok(Some([1.0, 0.0, 0.0])));
        assert_eq!(resolve_color(" hsv(0, 0, 0) "), Ok(Some([0.0, 0.0, 0.0])));
        assert_eq!(
            resolve_color("#ff45"),
            Err(ColorFormatError::new(
                crate::ColorFormat::RgbHex,
                ColorFormatErrorKind::UnexpectedLength
            ))
        );
        assert!(resolve_color("octarine").is_err());
    }

    #[test]
    fn test_x11_palette_is_shared() {
        let first = get_x11_palette().map(|palette| palette as *const Palette);
        let second = get_x11_palette().map(|palette| palette as *const Palette);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_font() {
        assert_eq!(parse_font("Helvetica, 12, bold, italic"), vec!["Helvetica", "12", "bold"]);
        assert_eq!(parse_font("Courier,,10"), vec!["Courier", "10"]);
        assert!(parse_font("").is_empty());
        assert_eq!(FontSettings::default().monospace_parts(), vec!["monospace"]);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.colors.rgb("fill"), Some([1.0, 1.0, 1.0]));
        assert_eq!(settings.colors.rgb("header"), None);
        assert_eq!(settings.colors.rgb("nemo"), None);
        assert_eq!(settings.tints.range(), 1..=5);
        assert!(settings.colors.validate().is_ok());

        let var = ColorVar::default();
        let strip = settings.tints.strip(var, Direction::Shades);
        assert_eq!(strip.swatches().len(), 5);
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(r#"{"version": 0, "colors": {"select": "navy"}}"#);
        assert!(matches!(settings, Ok(ref s) if s.colors.select == "navy"));

        let error = Settings::from_json(r#"{"version": 1, "colors": {"fill": "rgb(1,2"}}"#);
        assert!(matches!(
            error,
            Err(ConfigError::InvalidColor { key: "fill", .. })
        ));

        let error = Settings::from_json(r#"{"version": 1, "wheel": {"radius": 3}}"#);
        assert!(matches!(
            error,
            Err(ConfigError::InvalidRadius(WheelError::RadiusTooSmall { radius: 3, .. }))
        ));

        let error = Settings::from_json(r#"{"version": 1, "wheel": {"radius": 65536}}"#);
        assert!(matches!(
            error,
            Err(ConfigError::InvalidRadius(WheelError::RadiusTooLarge { radius: 65536, .. }))
        ));

        for count in ["0", "65", "9223372036854775808"] {
            let json = format!(r#"{{"version": 1, "tints": {{"count": {}}}}}"#, count);
            assert!(matches!(
                Settings::from_json(&json),
                Err(ConfigError::InvalidToneCount { maximum: MAX_TONES, .. })
            ));
        }
        let settings = Settings::from_json(r#"{"version": 1, "tints": {"count": 64}}"#);
        assert!(matches!(settings, Ok(ref s) if s.tints.count == MAX_TONES));

        assert!(matches!(
            Settings::from_json(r#"{"version": 7}"#),
            Err(ConfigError::VersionTooNew {
                file_version: 7,
                supported_version: CONFIG_VERSION
            })
        ));
        assert!(matches!(Settings::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_save_and_load() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join(Settings::default_filename());

        let mut settings = Settings::default();
        settings.wheel.radius = 80;
        settings.tints.progression = Progression::Geometric;
        settings.save(&path)?;

        assert_eq!(Settings::load(&path)?, settings);
        assert_eq!(Settings::load_or_default(&path), settings);
        Ok(())
    }

    #[test]
    fn test_load_or_default() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("missing.json");
        assert_eq!(Settings::load_or_default(&missing), Settings::default());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "not json")?;
        assert_eq!(Settings::load_or_default(&broken), Settings::default());
        assert!(Settings::load(&broken).is_err());
        Ok(())
    }
}
