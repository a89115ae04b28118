mod contrast;
mod conversion;
mod equality;
mod math;
mod space;
mod string;

// contrast
pub use contrast::{
    contrast_color, luminosity_transform, rgb_intensity, rgb_shade, rgb_tint, Contrast,
    DEFAULT_PERCENT,
};

// conversion
pub use conversion::{
    clamp, clamp_all, hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_yiq,
};
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// math
pub(crate) use math::{degrees_to_turns, turns_to_degrees, FloatExt};

// space
pub use space::{ColorFormat, ColorSpace};

// string
pub use string::{
    color_info_text, color_string_to_color, color_string_to_rgb, hex_to_rgb, parse_hex,
    rgb_to_hex, rgb_to_hls_string, rgb_to_hsv_string, rgb_to_string, DEFAULT_DECIMALS,
};
pub(crate) use string::{format, format_as};
