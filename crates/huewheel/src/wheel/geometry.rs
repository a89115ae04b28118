use crate::core::FloatExt;
use crate::error::WheelError;
use crate::scene::Point;
use crate::Float;

/// The default outer radius of a color wheel.
pub const DEFAULT_RADIUS: u32 = 125;

/// The smallest outer radius that still leaves room for a triangle.
pub const MIN_RADIUS: u32 = 16;

/// The largest outer radius.
pub const MAX_RADIUS: u32 = 2048;

/// The gap between the inner radius of the ring and the triangle's corners.
const TRIANGLE_GAP: u32 = 6;

/// The radius of the selection markers.
pub const MARKER_RADIUS: Float = 3.0;

/// The result of hit testing a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The annulus for selecting the hue.
    Ring,
    /// The triangle for selecting saturation and value.
    Triangle,
    /// Everything else, including the gap between ring and triangle.
    Outside,
}

/// The corners of the saturation/value triangle.
///
/// The hue corner has the fully saturated hue, the black corner has value
/// zero, and the white corner has saturation zero and value one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub hue: Point,
    pub black: Point,
    pub white: Point,
}

impl Triangle {
    /// Determine whether the point is inside the triangle or on its edges.
    ///
    /// This method solves for the point's coordinates in the basis spanned by
    /// the edges starting at the black corner. A degenerate triangle contains
    /// no points.
    pub fn contains(&self, point: Point) -> bool {
        let (hx, hy) = self.hue;
        let (sx, sy) = self.black;
        let (vx, vy) = self.white;
        let (x, y) = point;

        let det = (vx - sx) * (hy - sy) - (vy - sy) * (hx - sx);
        if det == 0.0 {
            return false;
        }

        let s = ((x - sx) * (hy - sy) - (y - sy) * (hx - sx)) / det;
        let v = ((vx - sx) * (y - sy) - (vy - sy) * (x - sx)) / det;
        0.0 <= s && 0.0 <= v && s + v <= 1.0
    }

    /// Round all corners to the nearest pixel.
    #[must_use = "method returns a new triangle and does not mutate original value"]
    pub fn round(&self) -> Self {
        fn round((x, y): Point) -> Point {
            ((x + 0.5).floor(), (y + 0.5).floor())
        }

        Self {
            hue: round(self.hue),
            black: round(self.black),
            white: round(self.white),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The geometry of a color wheel.
///
/// A color wheel is a square image with side `2 * radius + 1` pixels and its
/// center at pixel `(radius, radius)`. It has an outer ring for selecting the
/// hue and an inscribed triangle for selecting saturation and value. The
/// triangle's corners lie on a circle with the triangle radius and rotate
/// with the hue.
///
/// Points use screen coordinates, with y growing downward. Angles grow
/// counterclockwise, i.e., hue 90º is straight above the center.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WheelGeometry {
    radius: u32,
    inner_radius: u32,
    triangle_radius: u32,
}

impl WheelGeometry {
    /// Create the geometry for a wheel with the given outer radius.
    ///
    /// The ring is a quarter of the radius wide and the triangle's corners
    /// are six pixels inside the ring.
    ///
    /// ```
    /// # use huewheel::wheel::WheelGeometry;
    /// # fn main() -> Result<(), huewheel::error::WheelError> {
    /// let geometry = WheelGeometry::new(125)?;
    /// assert_eq!(geometry.inner_radius(), 93);
    /// assert_eq!(geometry.triangle_radius(), 87);
    /// assert_eq!(geometry.hue_radius(), 109.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(radius: u32) -> Result<Self, WheelError> {
        if radius < MIN_RADIUS {
            return Err(WheelError::RadiusTooSmall {
                radius,
                minimum: MIN_RADIUS,
            });
        } else if MAX_RADIUS < radius {
            return Err(WheelError::RadiusTooLarge {
                radius,
                maximum: MAX_RADIUS,
            });
        }

        let inner_radius = radius * 3 / 4;
        Ok(Self {
            radius,
            inner_radius,
            triangle_radius: inner_radius - TRIANGLE_GAP,
        })
    }

    /// Get the outer radius.
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Get the inner radius of the ring.
    pub const fn inner_radius(&self) -> u32 {
        self.inner_radius
    }

    /// Get the radius of the circle through the triangle's corners.
    pub const fn triangle_radius(&self) -> u32 {
        self.triangle_radius
    }

    /// Get the radius of the circle the hue marker travels on, which is
    /// halfway through the ring.
    pub fn hue_radius(&self) -> Float {
        (self.radius + self.inner_radius) as Float / 2.0
    }

    /// Get the side length of the wheel image in pixels.
    pub const fn side(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Get the center of the wheel.
    pub fn center(&self) -> Point {
        (self.radius as Float, self.radius as Float)
    }

    fn offset(&self, point: Point) -> Point {
        let (x, y) = point;
        let (cx, cy) = self.center();
        (x - cx, y - cy)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Classify the point.
    ///
    /// Points strictly between the inner and outer radius are on the ring.
    /// Points strictly inside the triangle's circle that also pass the
    /// in-triangle test for the given hue are on the triangle.
    pub fn hit_test(&self, hue_degrees: u16, point: Point) -> Region {
        let (dx, dy) = self.offset(point);
        let d2 = dx * dx + dy * dy;

        let outer2 = (self.radius * self.radius) as Float;
        let inner2 = (self.inner_radius * self.inner_radius) as Float;
        let triangle2 = (self.triangle_radius * self.triangle_radius) as Float;

        if inner2 < d2 && d2 < outer2 {
            Region::Ring
        } else if d2 < triangle2 && self.triangle(hue_degrees, self.center()).contains(point) {
            Region::Triangle
        } else {
            Region::Outside
        }
    }

    /// Determine the hue in whole degrees `0..360` at the point.
    ///
    /// The angle is truncated towards zero before wrapping, so the hue of a
    /// pixel is the same when clicking and when rendering.
    pub fn hue_at(&self, point: Point) -> u16 {
        let (dx, dy) = self.offset(point);
        hue_degrees_at(dx, dy)
    }

    /// Compute the triangle's corners for the given hue around the center.
    pub fn triangle(&self, hue_degrees: u16, center: Point) -> Triangle {
        let (cx, cy) = center;
        let radius = self.triangle_radius as Float;
        let angle = ((hue_degrees % 360) as Float).to_radians();
        let third = std::f64::consts::TAU as Float / 3.0;

        let corner = |angle: Float| (cx + angle.cos() * radius, cy - angle.sin() * radius);

        Triangle {
            hue: corner(angle),
            black: corner(angle + third),
            white: corner(angle + 2.0 * third),
        }
    }

    /// Determine the saturation and value at the point.
    ///
    /// Points beyond the black corner's edges project onto the nearest edge
    /// and points beyond the hue/white edge have value one. All other points
    /// are solved for exactly. Both results are clamped to unit range.
    pub fn sv_at(&self, hue_degrees: u16, point: Point) -> (Float, Float) {
        let Triangle {
            hue: (hx, hy),
            black: (sx, sy),
            white: (vx, vy),
        } = self.triangle(hue_degrees, (0.0, 0.0));
        let (x, y) = self.offset(point);

        #[inline]
        fn project(dx: Float, dy: Float, ex: Float, ey: Float) -> Float {
            ((dx * ex + dy * ey) / (ex * ex + ey * ey)).clamp(0.0, 1.0)
        }

        if vx * (x - sx) + vy * (y - sy) < 0.0 {
            // Beyond the black/hue edge.
            (1.0, project(x - sx, y - sy, hx - sx, hy - sy))
        } else if hx * (x - sx) + hy * (y - sy) < 0.0 {
            // Beyond the black/white edge.
            (0.0, project(x - sx, y - sy, vx - sx, vy - sy))
        } else if sx * (x - hx) + sy * (y - hy) < 0.0 {
            // Beyond the white/hue edge.
            (project(x - vx, y - vy, hx - vx, hy - vy), 1.0)
        } else {
            let v = ((x - sx) * (hy - vy) - (y - sy) * (hx - vx))
                / ((vx - sx) * (hy - vy) - (vy - sy) * (hx - vx));
            if v <= 0.0 {
                return (0.0, 0.0);
            }

            let v = v.min(1.0);
            let s = if (hy - vy).abs() < (hx - vx).abs() {
                (x - sx - v * (vx - sx)) / (v * (hx - vx))
            } else {
                (y - sy - v * (vy - sy)) / (v * (hy - vy))
            };

            (s.clamp(0.0, 1.0), v)
        }
    }

    /// Determine the point for the saturation and value.
    ///
    /// This is the inverse of [`WheelGeometry::sv_at`] for points inside the
    /// triangle.
    pub fn point_for(&self, hue_degrees: u16, saturation: Float, value: Float) -> Point {
        let Triangle {
            hue: (hx, hy),
            black: (sx, sy),
            white: (vx, vy),
        } = self.triangle(hue_degrees, self.center());
        let sv = saturation * value;

        (
            sx + (vx - sx) * value + (hx - vx) * sv,
            sy + (vy - sy) * value + (hy - vy) * sv,
        )
    }

    /// Determine the center of the hue marker for the hue.
    pub fn hue_marker(&self, hue_degrees: u16) -> Point {
        let (cx, cy) = self.center();
        let angle = ((hue_degrees % 360) as Float).to_radians();
        let radius = self.hue_radius();
        (cx + angle.cos() * radius, cy - angle.sin() * radius)
    }
}

impl Default for WheelGeometry {
    fn default() -> Self {
        let inner_radius = DEFAULT_RADIUS * 3 / 4;
        Self {
            radius: DEFAULT_RADIUS,
            inner_radius,
            triangle_radius: inner_radius - TRIANGLE_GAP,
        }
    }
}

/// Determine the hue in whole degrees for the offset from the center.
pub(crate) fn hue_degrees_at(dx: Float, dy: Float) -> u16 {
    // Snap angles such as 89.99999999999999º to whole degrees before truncating.
    let degrees = (-dy).atan2(dx).to_degrees();
    let degrees = (degrees * Float::ROUNDING_FACTOR).round() / Float::ROUNDING_FACTOR;
    (degrees.trunc() as i32).rem_euclid(360) as u16
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_radii() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(64)?;
        assert_eq!(geometry.inner_radius(), 48);
        assert_eq!(geometry.triangle_radius(), 42);
        assert_eq!(geometry.hue_radius(), 56.0);
        assert_eq!(geometry.side(), 129);
        assert_eq!(geometry.center(), (64.0, 64.0));
        assert_eq!(WheelGeometry::default(), WheelGeometry::new(DEFAULT_RADIUS)?);

        assert_eq!(
            WheelGeometry::new(15),
            Err(WheelError::RadiusTooSmall {
                radius: 15,
                minimum: MIN_RADIUS
            })
        );
        assert_eq!(WheelGeometry::new(MIN_RADIUS)?.triangle_radius(), 6);

        assert_eq!(WheelGeometry::new(MAX_RADIUS)?.side(), 4097);
        assert_eq!(
            WheelGeometry::new(65_536),
            Err(WheelError::RadiusTooLarge {
                radius: 65_536,
                maximum: MAX_RADIUS
            })
        );
        Ok(())
    }

    #[test]
    fn test_hue_at() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(100)?;
        assert_eq!(geometry.hue_at((110.0, 100.0)), 0);
        assert_eq!(geometry.hue_at((100.0, 90.0)), 90);
        assert_eq!(geometry.hue_at((90.0, 100.0)), 180);
        assert_eq!(geometry.hue_at((100.0, 110.0)), 270);
        assert_eq!(geometry.hue_at((110.0, 100.1)), 0);
        assert_eq!(geometry.hue_at((110.0, 100.5)), 358);
        assert_eq!(geometry.hue_at((110.0, 90.0)), 45);
        Ok(())
    }

    #[test]
    fn test_hit_test() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(100)?;
        // inner 75, triangle 69
        assert_eq!(geometry.hit_test(0, (100.0, 100.0)), Region::Triangle);
        assert_eq!(geometry.hit_test(0, (190.0, 100.0)), Region::Ring);
        assert_eq!(geometry.hit_test(0, (175.0, 100.0)), Region::Outside);
        assert_eq!(geometry.hit_test(0, (200.0, 100.0)), Region::Outside);
        assert_eq!(geometry.hit_test(0, (100.0, 12.5)), Region::Ring);
        assert_eq!(geometry.hit_test(0, (0.0, 0.0)), Region::Outside);
        assert_eq!(geometry.hit_test(0, (172.0, 100.0)), Region::Outside);
        assert_eq!(geometry.hit_test(0, (160.0, 100.0)), Region::Triangle);
        // The same point is outside once the hue vertex rotates away.
        assert_eq!(geometry.hit_test(180, (160.0, 100.0)), Region::Outside);
        Ok(())
    }

    #[test]
    fn test_triangle() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(100)?;
        let radius = geometry.triangle_radius() as Float;

        for hue in [0_u16, 45, 90, 217, 359] {
            let triangle = geometry.triangle(hue, geometry.center());
            for (x, y) in [triangle.hue, triangle.black, triangle.white] {
                let (dx, dy) = (x - 100.0, y - 100.0);
                assert_close_enough!((dx * dx + dy * dy).sqrt(), radius);
            }
            assert_eq!(geometry.hue_at(triangle.hue) as i32 - hue as i32, 0);
        }

        let triangle = geometry.triangle(0, (0.0, 0.0));
        assert_eq!(triangle.hue, (69.0, 0.0));
        assert_close_enough!(triangle.black.0, -34.5);
        assert!(triangle.black.1 < 0.0);
        assert!(triangle.white.1 > 0.0);
        assert_eq!(triangle.round().hue, (69.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_centroid() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(125)?;
        let (s, v) = geometry.sv_at(0, geometry.center());
        assert_close_enough!(s, 0.5);
        assert_close_enough!(v, 2.0 / 3.0);

        let (x, y) = geometry.point_for(0, s, v);
        assert_close_enough!(x, 125.0);
        assert_close_enough!(y, 125.0);
        Ok(())
    }

    #[test]
    fn test_corners_and_outside() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(125)?;
        let triangle = geometry.triangle(120, geometry.center());

        let (s, v) = geometry.sv_at(120, triangle.hue);
        assert_close_enough!(s, 1.0);
        assert_close_enough!(v, 1.0);
        let (_, v) = geometry.sv_at(120, triangle.black);
        assert_close_enough!(v, 0.0);
        let (s, v) = geometry.sv_at(120, triangle.white);
        assert_close_enough!(s, 0.0);
        assert_close_enough!(v, 1.0);

        // Far beyond each corner, results stay in unit range.
        for hue in [0, 120, 300] {
            for point in [(0.0, 0.0), (250.0, 0.0), (0.0, 250.0), (250.0, 250.0), (125.0, -400.0)] {
                let (s, v) = geometry.sv_at(hue, point);
                assert!((0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&v));
            }
        }
        Ok(())
    }

    #[test]
    fn test_sv_round_trip() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(125)?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(360);

        for _ in 0..1_000 {
            let hue: u16 = rng.random_range(0..360);
            let s: Float = rng.random_range(0.05..0.95);
            let v: Float = rng.random_range(0.1..0.95);

            let point = geometry.point_for(hue, s, v);
            assert_eq!(geometry.hit_test(hue, point), Region::Triangle);

            let (s2, v2) = geometry.sv_at(hue, point);
            assert!((s - s2).abs() < 1e-9, "saturation {} vs {}", s, s2);
            assert!((v - v2).abs() < 1e-9, "value {} vs {}", v, v2);
        }
        Ok(())
    }

    #[test]
    fn test_hue_marker() -> Result<(), WheelError> {
        let geometry = WheelGeometry::new(64)?;
        assert_eq!(geometry.hue_marker(0), (120.0, 64.0));
        let (x, y) = geometry.hue_marker(90);
        assert_close_enough!(x, 64.0);
        assert_close_enough!(y, 8.0);
        assert_eq!(geometry.hit_test(0, geometry.hue_marker(0)), Region::Ring);
        Ok(())
    }
}
