use std::sync::OnceLock;

use image::{Rgba, RgbaImage};

use super::geometry::{hue_degrees_at, Triangle, WheelGeometry};
use crate::core::{degrees_to_turns, hsv_to_rgb};
use crate::Float;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

static HUE_TABLE: OnceLock<[[u8; 3]; 360]> = OnceLock::new();

#[inline]
fn build_hue_table() -> [[u8; 3]; 360] {
    let mut table = [[0; 3]; 360];
    for (degrees, entry) in table.iter_mut().enumerate() {
        let rgb = hsv_to_rgb(&[degrees_to_turns(degrees as u16), 1.0, 1.0]);
        *entry = to_bytes(&rgb);
    }
    table
}

#[inline]
fn get_hue_table() -> &'static [[u8; 3]; 360] {
    HUE_TABLE.get_or_init(build_hue_table)
}

/// Get the 8-bit channels of the fully saturated, fully bright hue.
pub fn hue_bytes(hue_degrees: u16) -> [u8; 3] {
    get_hue_table()[(hue_degrees % 360) as usize]
}

/// Scale and truncate unit range channels to bytes.
#[inline]
fn to_bytes(rgb: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *rgb;
    let byte = |c: Float| (c.clamp(0.0, 1.0) * 255.0) as u8;
    [byte(r), byte(g), byte(b)]
}

#[inline]
fn opaque(rgb: &[Float; 3]) -> Rgba<u8> {
    let [r, g, b] = to_bytes(rgb);
    Rgba([r, g, b, 255])
}

/// Interpolate between `a` at `v1` and `b` at `v2`, evaluated at `i`.
#[inline]
fn lerp(a: Float, b: Float, v1: Float, v2: Float, i: Float) -> Float {
    if v1 == v2 {
        a
    } else {
        a + (b - a) * (i - v1) / (v2 - v1)
    }
}

#[inline]
fn lerp3(a: &[Float; 3], b: &[Float; 3], v1: Float, v2: Float, i: Float) -> [Float; 3] {
    [
        lerp(a[0], b[0], v1, v2, i),
        lerp(a[1], b[1], v1, v2, i),
        lerp(a[2], b[2], v1, v2, i),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Render the hue ring.
///
/// The image is as wide and high as the wheel. Pixels strictly between the
/// inner and outer radius show the hue at their angle, all others are
/// transparent.
pub fn render_ring(geometry: &WheelGeometry) -> RgbaImage {
    let radius = geometry.radius() as i64;
    let outer2 = radius * radius;
    let inner2 = (geometry.inner_radius() as i64).pow(2);

    RgbaImage::from_fn(geometry.side(), geometry.side(), |x, y| {
        let dx = x as i64 - radius;
        let dy = y as i64 - radius;
        let d2 = dx * dx + dy * dy;

        if inner2 < d2 && d2 < outer2 {
            let [r, g, b] = hue_bytes(hue_degrees_at(dx as Float, dy as Float));
            Rgba([r, g, b, 255])
        } else {
            TRANSPARENT
        }
    })
}

/// Render the saturation/value triangle for the given hue.
///
/// The image has side `2 * triangle_radius + 1` and its center pixel
/// coincides with the wheel's center. Rows are filled by scanning between
/// the triangle's edges, with colors interpolated along the edges and then
/// across each row.
pub fn render_triangle(geometry: &WheelGeometry, hue_degrees: u16) -> RgbaImage {
    let radius = geometry.triangle_radius();
    let stride = 2 * radius + 1;
    let center = radius as Float;

    let Triangle { hue, black, white } = geometry.triangle(hue_degrees, (center, center)).round();

    let mut h = (hue, hsv_to_rgb(&[degrees_to_turns(hue_degrees), 1.0, 1.0]));
    let mut s = (black, [0.0; 3]);
    let mut v = (white, [1.0; 3]);

    // Sort corners by y.
    if s.0 .1 > v.0 .1 {
        std::mem::swap(&mut s, &mut v);
    }
    if h.0 .1 > v.0 .1 {
        std::mem::swap(&mut h, &mut v);
    }
    if h.0 .1 > s.0 .1 {
        std::mem::swap(&mut h, &mut s);
    }

    let ((hx, hy), hc) = h;
    let ((sx, sy), sc) = s;
    let ((vx, vy), vc) = v;

    let mut image = RgbaImage::new(stride, stride);
    for y in 0..stride {
        let row = y as Float;
        if row < hy || vy < row {
            continue;
        }

        let (mut xl, mut cl) = if row < sy {
            (lerp(hx, sx, hy, sy, row), lerp3(&hc, &sc, hy, sy, row))
        } else {
            (lerp(sx, vx, sy, vy, row), lerp3(&sc, &vc, sy, vy, row))
        };
        let mut xr = lerp(hx, vx, hy, vy, row);
        let mut cr = lerp3(&hc, &vc, hy, vy, row);

        if xl > xr {
            std::mem::swap(&mut xl, &mut xr);
            std::mem::swap(&mut cl, &mut cr);
        }

        for x in 0..stride {
            let column = x as Float;
            if xl <= column && column <= xr {
                image.put_pixel(x, y, opaque(&lerp3(&cl, &cr, xl, xr, column)));
            }
        }
    }

    image
}

/// Render the complete wheel, i.e., the triangle on top of the ring.
pub fn render_wheel(geometry: &WheelGeometry, hue_degrees: u16) -> RgbaImage {
    let mut image = render_ring(geometry);
    let triangle = render_triangle(geometry, hue_degrees);
    let offset = geometry.radius() - geometry.triangle_radius();

    for (x, y, pixel) in triangle.enumerate_pixels() {
        if pixel[3] != 0 {
            image.put_pixel(x + offset, y + offset, *pixel);
        }
    }

    image
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WheelError;

    #[test]
    fn test_hue_table() {
        assert_eq!(hue_bytes(0), [255, 0, 0]);
        assert_eq!(hue_bytes(120), [0, 255, 0]);
        assert_eq!(hue_bytes(240), [0, 0, 255]);
        assert_eq!(hue_bytes(360), [255, 0, 0]);
        assert_eq!(hue_bytes(60), [255, 255, 0]);
        assert!(std::ptr::eq(get_hue_table(), get_hue_table()));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, 5.0, 2.0, 2.0, 7.0), 1.0);
        assert_eq!(lerp(0.0, 10.0, 0.0, 10.0, 5.0), 5.0);
        assert_eq!(lerp(10.0, 0.0, 0.0, 10.0, 2.0), 8.0);
    }

    #[test]
    fn test_render_ring() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(50)?;
        let ring = render_ring(&geometry);
        assert_eq!(ring.dimensions(), (101, 101));

        // Right of the center is red, above is between yellow and green,
        // left is cyan, and below is between blue and magenta.
        assert_eq!(ring.get_pixel(95, 50), &Rgba([255, 0, 0, 255]));
        assert_eq!(ring.get_pixel(50, 5), &Rgba([hue_bytes(90)[0], 255, 0, 255]));
        assert_eq!(ring.get_pixel(5, 50), &Rgba([0, 255, 255, 255]));
        assert_eq!(ring.get_pixel(50, 95), &Rgba([hue_bytes(270)[0], 0, 255, 255]));

        // The center, the corners, and the boundaries are transparent.
        assert_eq!(ring.get_pixel(50, 50), &TRANSPARENT);
        assert_eq!(ring.get_pixel(0, 0), &TRANSPARENT);
        assert_eq!(ring.get_pixel(100, 50), &TRANSPARENT);
        assert_eq!(ring.get_pixel(50 + 37, 50), &TRANSPARENT);
        assert_eq!(ring.get_pixel(50 + 38, 50)[3], 255);
        Ok(())
    }

    #[test]
    fn test_render_triangle() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(125)?;
        let radius = geometry.triangle_radius();
        let triangle = render_triangle(&geometry, 0);
        assert_eq!(triangle.dimensions(), (2 * radius + 1, 2 * radius + 1));

        // The hue corner is right of the center and pure red.
        assert_eq!(triangle.get_pixel(2 * radius, radius), &Rgba([255, 0, 0, 255]));
        // The center is opaque, the top-right corner is not.
        assert_eq!(triangle.get_pixel(radius, radius)[3], 255);
        assert_eq!(triangle.get_pixel(2 * radius, 0), &TRANSPARENT);
        assert_eq!(triangle.get_pixel(0, radius), &TRANSPARENT);

        // The black corner is above, the white corner below.
        let corners = geometry
            .triangle(0, (radius as Float, radius as Float))
            .round();
        let (bx, by) = corners.black;
        let (wx, wy) = corners.white;
        assert_eq!(triangle.get_pixel(bx as u32, by as u32), &Rgba([0, 0, 0, 255]));
        assert_eq!(triangle.get_pixel(wx as u32, wy as u32), &Rgba([255, 255, 255, 255]));

        // Every opaque pixel is gray or red-tinted, never green or blue.
        for pixel in triangle.pixels().filter(|pixel| pixel[3] != 0) {
            let [r, g, b, _] = pixel.0.map(i32::from);
            assert!(g <= r + 1 && b <= r + 1, "{:?}", pixel);
        }
        Ok(())
    }

    #[test]
    fn test_render_wheel() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(64)?;
        let wheel = render_wheel(&geometry, 120);
        assert_eq!(wheel.dimensions(), (129, 129));
        assert_eq!(wheel.get_pixel(64, 64), render_triangle(&geometry, 120).get_pixel(42, 42));
        assert_eq!(wheel.get_pixel(124, 64), &Rgba([255, 0, 0, 255]));
        assert_eq!(wheel.get_pixel(0, 0), &TRANSPARENT);
        Ok(())
    }
}
