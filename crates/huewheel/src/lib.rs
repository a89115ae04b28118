//! # Hue 🎨 Wheel
//!
//! Huewheel is the model layer of a color picker: the arithmetic, geometry,
//! and state that sit underneath a hue ring with an inscribed
//! saturation/value triangle, but none of the windowing. Rendering produces
//! plain RGBA pixel buffers and interaction is driven by points, so the crate
//! plugs into whatever toolkit draws the pixels and delivers the clicks.
//!
//!
//! ## 1. Overview
//!
//! Huewheel's main abstractions are:
//!
//!   * The **color conversion kernel**, i.e., pure functions such as
//!     [`rgb_to_hsv`], [`hls_to_rgb`], [`rgb_intensity`], and
//!     [`contrast_color`] that operate on `[Float; 3]` triples with hue in
//!     cyclic turns `0..1`. Color literals in hexadecimal and functional
//!     notation are parsed by [`color_string_to_color`] and formatted by
//!     [`rgb_to_hex`] and [`rgb_to_string`].
//!   * [`Color`] combines a [`ColorSpace`] with three [`Float`] coordinates
//!     and exposes the kernel as methods.
//!   * The [`tint`] module generates bounded, de-duplicated sequences of
//!     **tints and shades**.
//!   * The [`wheel`] module maps between points and hue, saturation, and
//!     value with [`WheelGeometry`](wheel::WheelGeometry) and renders the hue
//!     ring and triangle as [`image::RgbaImage`]s. Its
//!     [`ColorWheel`](wheel::ColorWheel) ties geometry, rendering, and a
//!     [`Scene`](scene::Scene) of drawable items together.
//!   * [`ColorVar`](var::ColorVar) is the observable color value shared by
//!     all controls, including the parametrized
//!     [`ColorSlider`](slider::ColorSlider), the text
//!     [`ColorField`](field::ColorField), and the
//!     [`ToneStrip`](tint::ToneStrip).
//!   * [`Palette`](palette::Palette) manages named colors in X11 `rgb.txt`
//!     format and [`Settings`](config::Settings) the persistent defaults.
//!
//!
//! ## 2. Parsing Is Forgiving
//!
//! Color literals are typed by people, so malformed input is expected. Parse
//! functions return a [`ColorFormatError`](error::ColorFormatError) that still
//! names the recognized format, and components outside the unit range are
//! clamped instead of rejected:
//!
//! ```
//! # use huewheel::{color_string_to_color, ColorFormat};
//! let (format, rgb) = color_string_to_color("rgb(1.5, 0.25, 0.5)", true).unwrap();
//! assert_eq!(format, ColorFormat::Rgb);
//! assert_eq!(rgb, [1.0, 0.25, 0.5]);
//!
//! let error = color_string_to_color("hsv(0.5,1", true).unwrap_err();
//! assert_eq!(error.format(), Some(ColorFormat::Hsv));
//! ```
//!
//!
//! ## 3. Picking Colors
//!
//! A [`ColorWheel`](wheel::ColorWheel) observes a
//! [`ColorVar`](var::ColorVar) and translates clicks into colors:
//!
//! ```
//! # use huewheel::var::ColorVar;
//! # use huewheel::wheel::ColorWheel;
//! # fn main() -> Result<(), huewheel::error::WheelError> {
//! let var = ColorVar::default();
//! let wheel = ColorWheel::new(var.clone(), 64)?;
//!
//! // Click the ring straight above the center: a hue of 90º.
//! wheel.click((64.0, 64.0 - 56.0));
//! assert_eq!(wheel.hue_degrees(), 90);
//! assert_eq!(var.get(), huewheel::hsv_to_rgb(&[0.25, 1.0, 1.0]));
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 4. Feature Flags
//!
//! The `f64` feature, enabled by default, selects `f64` as [`Float`].
//! Without it, huewheel computes with `f32`.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod config;
pub mod error;
pub mod field;
mod object;
pub mod palette;
pub mod scene;
pub mod slider;
pub mod tint;
pub mod var;
pub mod wheel;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    clamp, clamp_all, color_info_text, color_string_to_color, color_string_to_rgb,
    contrast_color, hex_to_rgb, hls_to_rgb, hsv_to_rgb, luminosity_transform, parse_hex,
    rgb_intensity, rgb_shade, rgb_tint, rgb_to_hex, rgb_to_hls, rgb_to_hls_string, rgb_to_hsv,
    rgb_to_hsv_string, rgb_to_string, rgb_to_yiq, ColorFormat, ColorSpace, Contrast,
    DEFAULT_DECIMALS, DEFAULT_PERCENT,
};
pub use object::Color;
