/// The enumeration of supported coordinate systems.
///
/// All three coordinate systems describe the same colors, the RGB cube. None
/// of them is canonical: A color picker switches between them as the user
/// switches between sliders, and conversions round-trip within floating point
/// precision.
///
/// | Space | First      | Second     | Third      |
/// | ----- | :--------: | :--------: | :--------: |
/// | RGB   | red        | green      | blue       |
/// | HSV   | hue        | saturation | value      |
/// | HLS   | hue        | lightness  | saturation |
///
/// All coordinates range `0..=1`. Hue is measured in cyclic turns, i.e., hue
/// 1.0 is the same as hue 0.0, and achromatic colors have hue 0.0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsv,
    Hls,
}

impl ColorSpace {
    /// Determine whether this coordinate system has a hue.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsv | Self::Hls)
    }

    /// Determine the index of this coordinate system's hue, if any.
    pub const fn hue_index(&self) -> Option<usize> {
        if self.is_polar() {
            Some(0)
        } else {
            None
        }
    }

    /// Get the names of the three coordinates.
    pub const fn labels(&self) -> [&'static str; 3] {
        match *self {
            Self::Rgb => ["Red", "Green", "Blue"],
            Self::Hsv => ["Hue", "Saturation", "Value"],
            Self::Hls => ["Hue", "Lightness", "Saturation"],
        }
    }

    /// Get the lowercase name, which doubles as function name in color
    /// literals.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Hls => "hls",
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Hls => "HLS",
        };

        f.write_str(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The enumeration of color literal formats.
///
/// An entry field remembers the format the user typed so that later changes
/// to the color are displayed in the same format. The serialized form is the
/// format's tag: `rgbhex`, `rgb`, `hsv`, or `hls`.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Hashed hexadecimal as in `#ff3f7f`.
    #[default]
    RgbHex,
    /// Functional RGB as in `rgb(1.000,0.250,0.500)`.
    Rgb,
    /// Functional HSV as in `hsv(0.944,0.750,1.000)`.
    Hsv,
    /// Functional HLS as in `hls(0.944,0.625,1.000)`.
    Hls,
}

impl ColorFormat {
    /// Get the format's tag.
    pub const fn tag(&self) -> &'static str {
        match *self {
            Self::RgbHex => "rgbhex",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Hls => "hls",
        }
    }

    /// Get the coordinate system of the literal's components.
    pub const fn space(&self) -> ColorSpace {
        match *self {
            Self::RgbHex | Self::Rgb => ColorSpace::Rgb,
            Self::Hsv => ColorSpace::Hsv,
            Self::Hls => ColorSpace::Hls,
        }
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = crate::error::ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgbhex" => Ok(Self::RgbHex),
            "rgb" => Ok(Self::Rgb),
            "hsv" => Ok(Self::Hsv),
            "hls" => Ok(Self::Hls),
            _ => Err(crate::error::ColorFormatError::unknown()),
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormat, ColorSpace};

    #[test]
    fn test_format_tags() {
        for format in [
            ColorFormat::RgbHex,
            ColorFormat::Rgb,
            ColorFormat::Hsv,
            ColorFormat::Hls,
        ] {
            assert_eq!(format.tag().parse::<ColorFormat>(), Ok(format));
            assert_eq!(
                serde_json::to_string(&format).unwrap(),
                format!("\"{}\"", format.tag())
            );
        }

        assert!("RGB".parse::<ColorFormat>().is_err());
        assert_eq!(ColorFormat::RgbHex.space(), ColorSpace::Rgb);
        assert_eq!(ColorSpace::Hls.labels()[1], "Lightness");
        assert!(!ColorSpace::Rgb.is_polar());
    }
}
