//! Named colors.
//!
//! A [`Palette`] is an ordered collection of 8-bit colors, each with all the
//! names that map to it and a display name derived from the first such name.
//! Palettes are loaded from the X11 `rgb.txt` format, i.e., lines with three
//! 8-bit channels followed by a name, and `!` starting comments:
//!
//! ```
//! # use huewheel::palette::Palette;
//! # fn main() -> Result<(), huewheel::error::PaletteError> {
//! let palette = Palette::parse("tiny", "! comment\n255 0 0 red\n255 0 0 red1\n", false)?;
//! assert_eq!(palette.len(), 1);
//! assert_eq!(palette.lookup_name("red1")?, [1.0, 0.0, 0.0]);
//! # Ok(())
//! # }
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::{from_24bit, rgb_intensity, rgb_to_hex, rgb_to_hls, rgb_to_hsv, rgb_to_yiq};
use crate::error::PaletteError;
use crate::Float;

const X11_COLORS: &str = include_str!("../data/x11.txt");

/// Words that are separated from their neighbors in display names.
const DISPLAY_WORDS: [&str; 27] = [
    "light", "dark", "dim", "medium", "white", "almond", "peach", "lemon", "mint", "blue",
    "lavender", "rose", "slate", "gray", "grey", "turquoise", "cyan", "green", "olive", "brown",
    "red", "salmon", "orange", "pink", "violet", "orchid", "purple",
];

/// Turn a color name into a display name.
///
/// This function separates well-known words and trailing digits from the
/// rest of the name and then capitalizes each word. Hence `DarkSlateGray`,
/// `dark slate gray`, and `darkslategray` all become `Dark Slate Gray`, while
/// `snow2` becomes `Snow 2`.
pub fn display_name(color_name: &str) -> String {
    let mut name = color_name.to_lowercase();
    for word in DISPLAY_WORDS {
        if name.contains(word) {
            name = name.replace(word, &format!(" {} ", word));
        }
    }

    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() < name.len()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        name = format!("{} {}", stem, &name[stem.len()..]);
    }

    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in a palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    rgb: [u8; 3],
    display_name: String,
    names: Vec<String>,
}

impl PaletteEntry {
    /// Get the 8-bit channels.
    pub const fn rgb24(&self) -> [u8; 3] {
        self.rgb
    }

    /// Get the unit range channels.
    pub fn rgb(&self) -> [Float; 3] {
        from_24bit(self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// Get the display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Get all names, in order of definition.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Information about a palette color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorInfo {
    pub name: String,
    pub rgb: [Float; 3],
    pub hsv: [Float; 3],
    pub yiq: [Float; 3],
    pub hls: [Float; 3],
    pub hex: String,
}

impl std::fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn triple(f: &mut std::fmt::Formatter<'_>, label: &str, c: &[Float; 3]) -> std::fmt::Result {
            write!(f, "{}({:.2}, {:.2}, {:.2})", label, c[0], c[1], c[2])
        }

        write!(f, "{}: ", self.name)?;
        triple(f, "rgb", &self.rgb)?;
        f.write_str(", ")?;
        triple(f, "hsv", &self.hsv)?;
        f.write_str(", ")?;
        triple(f, "yiq", &self.yiq)?;
        f.write_str(", ")?;
        triple(f, "hls", &self.hls)?;
        write!(f, ", hex={}", self.hex)
    }
}

/// The order of palette colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Hsv,
    Hls,
    Yiq,
    Intensity,
    Name,
}

impl SortKey {
    /// Get a human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hsv => "HSV",
            Self::Hls => "HLS",
            Self::Yiq => "YIQ",
            Self::Intensity => "RGB",
            Self::Name => "Name",
        }
    }

    fn coordinates(&self, rgb: &[Float; 3]) -> [Float; 3] {
        match self {
            Self::Hsv => rgb_to_hsv(rgb),
            Self::Hls => rgb_to_hls(rgb),
            Self::Yiq => rgb_to_yiq(rgb),
            Self::Intensity => [rgb_intensity(rgb), 0.0, 0.0],
            Self::Name => [0.0; 3],
        }
    }
}

fn compare_coordinates(c1: &[Float; 3], c2: &[Float; 3]) -> Ordering {
    c1[0]
        .total_cmp(&c2[0])
        .then(c1[1].total_cmp(&c2[1]))
        .then(c1[2].total_cmp(&c2[2]))
}

// --------------------------------------------------------------------------------------------------------------------

/// A palette of named colors.
#[derive(Clone, Debug)]
pub struct Palette {
    name: String,
    read_only: bool,
    entries: Vec<PaletteEntry>,
    index: HashMap<[u8; 3], usize>,
}

impl Palette {
    /// Create a new, empty palette.
    pub fn new(name: impl Into<String>, read_only: bool) -> Self {
        Self {
            name: name.into(),
            read_only,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Load the built-in, read-only palette of X11 colors.
    pub fn builtin() -> Result<Self, PaletteError> {
        Self::parse("X11", X11_COLORS, true)
    }

    /// Parse a palette in `rgb.txt` format.
    ///
    /// Empty lines and lines starting with `!` are ignored. All other lines
    /// must start with three 8-bit integers followed by a name, separated by
    /// white space.
    pub fn parse(name: impl Into<String>, text: &str, read_only: bool) -> Result<Self, PaletteError> {
        let mut palette = Self::new(name, false);

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            let malformed = || PaletteError::MalformedLine {
                line: number + 1,
                content: line.to_string(),
            };

            let mut parts = line.split_whitespace();
            let mut channel = || -> Result<u8, PaletteError> {
                parts
                    .next()
                    .and_then(|part| part.parse::<u8>().ok())
                    .ok_or_else(malformed)
            };
            let rgb = [channel()?, channel()?, channel()?];
            let color_name = parts.collect::<Vec<_>>().join(" ");
            if color_name.is_empty() {
                return Err(malformed());
            }

            palette.add(rgb, &color_name);
        }

        palette.read_only = read_only;
        log::debug!(
            "loaded palette {} with {} colors",
            palette.name,
            palette.entries.len()
        );
        Ok(palette)
    }

    /// Get the palette's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Determine whether the palette is read only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the colors in order of definition.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Get the entry for the 8-bit color.
    pub fn get(&self, rgb: [u8; 3]) -> Option<&PaletteEntry> {
        self.index.get(&rgb).map(|index| &self.entries[*index])
    }

    fn add(&mut self, rgb: [u8; 3], color_name: &str) {
        match self.index.get(&rgb) {
            Some(index) => {
                let entry = &mut self.entries[*index];
                if !entry.names.iter().any(|name| name == color_name) {
                    entry.names.push(color_name.to_string());
                }
            }
            None => {
                self.index.insert(rgb, self.entries.len());
                self.entries.push(PaletteEntry {
                    rgb,
                    display_name: display_name(color_name),
                    names: vec![color_name.to_string()],
                });
            }
        }
    }

    /// Add a name for the 8-bit color.
    pub fn insert(&mut self, rgb: [u8; 3], color_name: &str) -> Result<(), PaletteError> {
        if self.read_only {
            return Err(PaletteError::ReadOnly(self.name.clone()));
        }

        self.add(rgb, color_name);
        Ok(())
    }

    /// Remove the 8-bit color with all its names.
    pub fn remove(&mut self, rgb: [u8; 3]) -> Result<Option<PaletteEntry>, PaletteError> {
        if self.read_only {
            return Err(PaletteError::ReadOnly(self.name.clone()));
        }

        let Some(index) = self.index.remove(&rgb) else {
            return Ok(None);
        };

        let entry = self.entries.remove(index);
        for position in self.index.values_mut() {
            if index < *position {
                *position -= 1;
            }
        }
        Ok(Some(entry))
    }

    /// Find the color closest to the given color.
    ///
    /// The distance weighs the squared channel differences with 0.3 for red,
    /// 0.59 for green, and 0.11 for blue. Ties go to the earlier color.
    pub fn find_closest(&self, rgb: &[Float; 3]) -> Option<&PaletteEntry> {
        let distance = |entry: &PaletteEntry| {
            let [r, g, b] = entry.rgb();
            let dr = (rgb[0] - r) * 255.0 * 0.3;
            let dg = (rgb[1] - g) * 255.0 * 0.59;
            let db = (rgb[2] - b) * 255.0 * 0.11;
            dr * dr + dg * dg + db * db
        };

        let mut closest: Option<(&PaletteEntry, Float)> = None;
        for entry in &self.entries {
            let d = distance(entry);
            if closest.map_or(true, |(_, min)| d < min) {
                closest = Some((entry, d));
            }
        }

        closest.map(|(entry, _)| entry)
    }

    /// Look up the color with the given name.
    pub fn lookup_name(&self, name: &str) -> Result<[Float; 3], PaletteError> {
        self.entries
            .iter()
            .find(|entry| entry.names.iter().any(|n| n == name))
            .map(PaletteEntry::rgb)
            .ok_or_else(|| PaletteError::UnknownName(name.to_string()))
    }

    /// Get information about the 8-bit color.
    ///
    /// The name is the color's first name.
    pub fn color_info(&self, rgb: [u8; 3]) -> Option<ColorInfo> {
        let entry = self.get(rgb)?;
        let coordinates = entry.rgb();

        Some(ColorInfo {
            name: entry.names.first().cloned().unwrap_or_default(),
            rgb: coordinates,
            hsv: rgb_to_hsv(&coordinates),
            yiq: rgb_to_yiq(&coordinates),
            hls: rgb_to_hls(&coordinates),
            hex: rgb_to_hex(&coordinates),
        })
    }

    /// Get a line of information about the 8-bit color.
    pub fn color_info_string(&self, rgb: [u8; 3]) -> Option<String> {
        self.color_info(rgb).map(|info| info.to_string())
    }

    /// Get the colors in the given order.
    ///
    /// Sorting is stable, so colors with the same key stay in order of
    /// definition.
    pub fn sorted(&self, key: SortKey) -> Vec<&PaletteEntry> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();

        if key == SortKey::Name {
            entries.sort_by_cached_key(|entry| entry.display_name.to_lowercase());
        } else {
            entries.sort_by(|e1, e2| {
                compare_coordinates(&key.coordinates(&e1.rgb()), &key.coordinates(&e2.rgb()))
            });
        }

        entries
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("DarkSlateGray"), "Dark Slate Gray");
        assert_eq!(display_name("dark slate gray"), "Dark Slate Gray");
        assert_eq!(display_name("ghostwhite"), "Ghost White");
        assert_eq!(display_name("snow2"), "Snow 2");
        assert_eq!(display_name("gray50"), "Gray 50");
        assert_eq!(display_name("red1"), "Red 1");
        assert_eq!(display_name("turquoise"), "Turquoise");
        assert_eq!(display_name("navy"), "Navy");
    }

    #[test]
    fn test_builtin() -> Result<(), PaletteError> {
        let palette = Palette::builtin()?;
        assert_eq!(palette.name(), "X11");
        assert!(palette.is_read_only());
        assert!(!palette.is_empty());

        let red = palette.get([255, 0, 0]).map(PaletteEntry::names);
        assert_eq!(red, Some(&["red".to_string(), "red1".to_string()][..]));
        let gray = palette.get([47, 79, 79]).map(PaletteEntry::display_name);
        assert_eq!(gray, Some("Dark Slate Gray"));

        assert_eq!(palette.lookup_name("GhostWhite")?, from_24bit(248, 248, 255));
        assert_eq!(
            palette.lookup_name("octarine"),
            Err(PaletteError::UnknownName("octarine".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_read_only() -> Result<(), PaletteError> {
        let mut palette = Palette::builtin()?;
        let error = PaletteError::ReadOnly("X11".to_string());
        assert_eq!(palette.insert([1, 2, 3], "nearly black"), Err(error.clone()));
        assert_eq!(palette.remove([255, 0, 0]), Err(error));
        Ok(())
    }

    #[test]
    fn test_insert_remove() -> Result<(), PaletteError> {
        let mut palette = Palette::new("mine", false);
        palette.insert([255, 0, 0], "red")?;
        palette.insert([0, 255, 0], "green")?;
        palette.insert([0, 0, 255], "blue")?;
        palette.insert([255, 0, 0], "scarlet")?;
        palette.insert([255, 0, 0], "red")?;
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.lookup_name("scarlet")?, [1.0, 0.0, 0.0]);

        let removed = palette.remove([0, 255, 0])?;
        assert_eq!(removed.map(|entry| entry.display_name), Some("Green".to_string()));
        assert_eq!(palette.remove([0, 255, 0])?, None);
        assert_eq!(palette.get([0, 0, 255]).map(PaletteEntry::rgb), Some([0.0, 0.0, 1.0]));
        assert_eq!(palette.len(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Palette::parse("bad", "! header\n\n255 0 red\n", false).unwrap_err(),
            PaletteError::MalformedLine {
                line: 3,
                content: "255 0 red".to_string()
            }
        );
        assert!(Palette::parse("bad", "256 0 0 red", false).is_err());
        assert!(Palette::parse("bad", "255 0 0", false).is_err());
    }

    #[test]
    fn test_find_closest() -> Result<(), PaletteError> {
        let palette = Palette::builtin()?;
        let closest = palette.find_closest(&[0.99, 0.01, 0.0]).map(PaletteEntry::rgb24);
        assert_eq!(closest, Some([255, 0, 0]));
        let closest = palette.find_closest(&[0.01, 0.0, 0.49]).map(PaletteEntry::rgb24);
        assert_eq!(closest, Some([0, 0, 128]));
        assert_eq!(Palette::new("empty", true).find_closest(&[0.0; 3]), None);
        Ok(())
    }

    #[test]
    fn test_color_info() -> Result<(), PaletteError> {
        let palette = Palette::builtin()?;
        assert_eq!(
            palette.color_info_string([255, 0, 0]),
            Some(
                "red: rgb(1.00, 0.00, 0.00), hsv(0.00, 1.00, 1.00), yiq(0.30, 0.60, 0.21), \
                 hls(0.00, 0.50, 1.00), hex=#ff0000"
                    .to_string()
            )
        );
        assert_eq!(palette.color_info([1, 2, 3]), None);
        Ok(())
    }

    #[test]
    fn test_sorted() -> Result<(), PaletteError> {
        let palette = Palette::builtin()?;

        let by_intensity = palette.sorted(SortKey::Intensity);
        assert_eq!(by_intensity.first().map(|e| e.rgb24()), Some([0, 0, 0]));
        assert_eq!(by_intensity.last().map(|e| e.rgb24()), Some([255, 255, 255]));

        let by_name = palette.sorted(SortKey::Name);
        assert_eq!(by_name.first().map(|e| e.display_name()), Some("Black"));
        assert_eq!(by_name.last().map(|e| e.display_name()), Some("Yellow"));

        let by_hsv = palette.sorted(SortKey::Hsv);
        assert_eq!(by_hsv.first().map(|e| e.rgb24()), Some([0, 0, 0]));
        assert_eq!(by_hsv.len(), palette.len());
        assert_eq!(SortKey::Intensity.label(), "RGB");
        Ok(())
    }
}
