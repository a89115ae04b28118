use std::error::Error;

use huewheel::config::Settings;
use huewheel::var::ColorVar;
use huewheel::wheel::{render_wheel, ColorWheel};
use huewheel::{rgb_to_hex, Color, Float};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "wheel.png".to_string());
    let color = match args.next() {
        Some(literal) => literal.parse::<Color>()?,
        None => Color::rgb(1.0, 0.5, 0.0),
    };

    let settings = Settings::default_path()
        .map(Settings::load_or_default)
        .unwrap_or_default();

    let var = ColorVar::new(color.to_rgb());
    let wheel = ColorWheel::new(var.clone(), settings.wheel.radius)?;
    println!("hue {}º, hsv {:?}", wheel.hue_degrees(), wheel.hsv());

    // Click halfway between center and ring, straight below the center.
    let geometry = wheel.geometry();
    let (cx, cy) = geometry.center();
    let region = wheel.click((cx, cy + geometry.triangle_radius() as Float / 4.0));
    println!("clicked {:?}, picked {}", region, rgb_to_hex(&var.get()));

    render_wheel(&geometry, wheel.hue_degrees()).save(&path)?;
    println!("wrote {}", path);
    Ok(())
}
