use std::error::Error;

use huewheel::palette::{Palette, SortKey};
use huewheel::tint::{rgb_shades, rgb_tints, Progression};
use huewheel::{color_info_text, rgb_to_hex, Color, ColorFormat, DEFAULT_DECIMALS};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let literal = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "#ff4080".to_string());
    let color: Color = literal.parse()?;
    let rgb = color.to_rgb();

    println!(
        "{}\n",
        color_info_text(
            &rgb,
            &[ColorFormat::RgbHex, ColorFormat::Rgb, ColorFormat::Hsv, ColorFormat::Hls],
            DEFAULT_DECIMALS
        )
    );

    for (label, tones) in [
        ("tints", rgb_tints(&rgb, 5.0, 5, Progression::Linear)),
        ("shades", rgb_shades(&rgb, 5.0, 5, Progression::Linear)),
        ("geometric tints", rgb_tints(&rgb, 25.0, 5, Progression::Geometric)),
    ] {
        let hexes = tones.iter().map(rgb_to_hex).collect::<Vec<_>>();
        println!("{:>16}: {}", label, hexes.join(" "));
    }

    let palette = Palette::builtin()?;
    if let Some(closest) = palette.find_closest(&rgb) {
        println!("\nclosest X11 color: {}", closest.display_name());
        if let Some(info) = palette.color_info_string(closest.rgb24()) {
            println!("{}", info);
        }
    }

    println!("\nX11 colors by {}:", SortKey::Hls.label());
    for entry in palette.sorted(SortKey::Hls).iter().take(8) {
        println!("  {} {}", rgb_to_hex(&entry.rgb()), entry.display_name());
    }
    Ok(())
}
