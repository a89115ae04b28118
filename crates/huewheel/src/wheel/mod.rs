//! The hue ring and saturation/value triangle of a color picker.
//!
//! [`WheelGeometry`] maps between points and colors, the `render_*`
//! functions produce the wheel's pixels, and [`ColorWheel`] combines both
//! into the interactive model of the control. The wheel shows the hue in
//! whole degrees, so every hue the ring displays is also a hue it reports.

mod geometry;
mod raster;

pub use geometry::{
    Region, Triangle, WheelGeometry, DEFAULT_RADIUS, MARKER_RADIUS, MAX_RADIUS, MIN_RADIUS,
};
pub use raster::{hue_bytes, render_ring, render_triangle, render_wheel};

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::core::{degrees_to_turns, hsv_to_rgb, rgb_to_hsv, turns_to_degrees};
use crate::error::{OutOfRangeError, WheelError};
use crate::scene::{Bounds, Item, ItemId, Point, Scene, Shape};
use crate::var::{ColorVar, SubscriptionId};
use crate::Float;

const MARKER_FILL: [Float; 3] = [0.0, 0.0, 0.0];
const MARKER_OUTLINE: [Float; 3] = [250.0 / 255.0, 250.0 / 255.0, 250.0 / 255.0];

fn marker(center: Point) -> Shape {
    Shape::Oval {
        bounds: Bounds::around(center, MARKER_RADIUS),
        fill: Some(MARKER_FILL),
        outline: Some(MARKER_OUTLINE),
    }
}

/// Move the oval with the given identifier so that it is centered on the point.
fn place(scene: &mut Scene, id: ItemId, center: Point) {
    let current = match scene.get(id) {
        Some(Item {
            shape: Shape::Oval { bounds, .. },
            ..
        }) => bounds.center(),
        _ => return,
    };

    scene.move_by(id, center.0 - current.0, center.1 - current.1);
}

// --------------------------------------------------------------------------------------------------------------------

struct WheelState {
    geometry: WheelGeometry,
    hue_degrees: u16,
    hsv: [Float; 3],
    scene: Scene,
    triangle: ItemId,
    hue_marker: ItemId,
    sv_marker: ItemId,
}

impl WheelState {
    fn new(geometry: WheelGeometry, rgb: &[Float; 3]) -> Self {
        let hsv = rgb_to_hsv(rgb);
        let hue_degrees = turns_to_degrees(hsv[0]);
        let offset = (geometry.radius() - geometry.triangle_radius()) as Float;

        let mut scene = Scene::new();
        scene.add(
            Some("ring"),
            Shape::Image {
                origin: (0.0, 0.0),
                pixels: render_ring(&geometry),
            },
        );
        let triangle = scene.add(
            Some("triangle"),
            Shape::Image {
                origin: (offset, offset),
                pixels: render_triangle(&geometry, hue_degrees),
            },
        );
        let hue_marker = scene.add(Some("hue"), marker(geometry.hue_marker(hue_degrees)));
        let sv_marker = scene.add(
            Some("sv"),
            marker(geometry.point_for(hue_degrees, hsv[1], hsv[2])),
        );

        Self {
            geometry,
            hue_degrees,
            hsv,
            scene,
            triangle,
            hue_marker,
            sv_marker,
        }
    }

    /// Switch to the hue, moving the hue marker and re-rendering the triangle.
    fn update_hue(&mut self, hue_degrees: u16) {
        self.hue_degrees = hue_degrees;
        place(
            &mut self.scene,
            self.hue_marker,
            self.geometry.hue_marker(hue_degrees),
        );

        let pixels = render_triangle(&self.geometry, hue_degrees);
        self.scene.replace_image(self.triangle, pixels);
        log::trace!("rendered triangle for hue {}º", hue_degrees);
    }

    fn update_sv_marker(&mut self) {
        let center = self
            .geometry
            .point_for(self.hue_degrees, self.hsv[1], self.hsv[2]);
        place(&mut self.scene, self.sv_marker, center);
    }

    /// Respond to a color published by some other control.
    fn on_change(&mut self, rgb: &[Float; 3]) {
        self.hsv = rgb_to_hsv(rgb);
        let hue_degrees = turns_to_degrees(self.hsv[0]);
        if hue_degrees != self.hue_degrees {
            self.update_hue(hue_degrees);
        }
        self.update_sv_marker();
    }
}

/// The interactive model of a color wheel.
///
/// A color wheel observes a [`ColorVar`]. Clicking the ring picks the fully
/// saturated, fully bright hue at the clicked angle. Clicking the triangle
/// picks saturation and value under the current hue. Either way, the wheel
/// publishes the new color to all other subscribers of the variable. When
/// another control changes the variable, the wheel follows along.
///
/// The wheel's [`Scene`] holds four named items, drawn in this order: the
/// `"ring"` and `"triangle"` images, and the `"hue"` and `"sv"` markers.
pub struct ColorWheel {
    var: ColorVar,
    state: Rc<RefCell<WheelState>>,
    subscription: SubscriptionId,
}

impl ColorWheel {
    /// Create a new color wheel with the given radius for the color variable.
    pub fn new(var: ColorVar, radius: u32) -> Result<Self, WheelError> {
        let geometry = WheelGeometry::new(radius)?;
        let state = Rc::new(RefCell::new(WheelState::new(geometry, &var.get())));

        let weak: Weak<RefCell<WheelState>> = Rc::downgrade(&state);
        let subscription = var.subscribe(move |rgb| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().on_change(rgb);
            }
        });

        Ok(Self {
            var,
            state,
            subscription,
        })
    }

    /// Get the color variable.
    pub fn var(&self) -> &ColorVar {
        &self.var
    }

    /// Get the wheel's geometry.
    pub fn geometry(&self) -> WheelGeometry {
        self.state.borrow().geometry
    }

    /// Get the current hue in whole degrees.
    pub fn hue_degrees(&self) -> u16 {
        self.state.borrow().hue_degrees
    }

    /// Get the current hue, saturation, and value.
    pub fn hsv(&self) -> [Float; 3] {
        self.state.borrow().hsv
    }

    /// Get the scene with the wheel's drawable items.
    pub fn scene(&self) -> Ref<'_, Scene> {
        Ref::map(self.state.borrow(), |state| &state.scene)
    }

    /// Handle a click at the given point.
    ///
    /// This method returns the region that was clicked. Clicks outside ring
    /// and triangle are ignored.
    pub fn click(&self, point: Point) -> Region {
        let (region, rgb) = {
            let mut state = self.state.borrow_mut();
            let region = state.geometry.hit_test(state.hue_degrees, point);

            match region {
                Region::Ring => {
                    let hue_degrees = state.geometry.hue_at(point);
                    state.hsv = [degrees_to_turns(hue_degrees), 1.0, 1.0];
                    state.update_hue(hue_degrees);
                    state.update_sv_marker();
                }
                Region::Triangle => {
                    let (s, v) = state.geometry.sv_at(state.hue_degrees, point);
                    state.hsv = [degrees_to_turns(state.hue_degrees), s, v];
                    let sv_marker = state.sv_marker;
                    place(&mut state.scene, sv_marker, point);
                }
                Region::Outside => {}
            }

            (region, hsv_to_rgb(&state.hsv))
        };

        log::debug!(
            "click at ({:.1}, {:.1}) on {:?}",
            point.0,
            point.1,
            region
        );
        if region != Region::Outside {
            self.var.set_from(self.subscription, rgb);
        }
        region
    }

    /// Set the hue.
    ///
    /// The hue must be in unit range. The wheel snaps its display to whole
    /// degrees but publishes the exact hue.
    pub fn set_hue(&self, hue: Float) -> Result<(), OutOfRangeError> {
        let hue = OutOfRangeError::check("hue", hue)?;
        let rgb = {
            let mut state = self.state.borrow_mut();
            state.hsv[0] = hue;
            let hue_degrees = turns_to_degrees(hue);
            if hue_degrees != state.hue_degrees {
                state.update_hue(hue_degrees);
            }
            state.update_sv_marker();
            hsv_to_rgb(&state.hsv)
        };

        self.var.set_from(self.subscription, rgb);
        Ok(())
    }

    /// Set the saturation, which must be in unit range.
    pub fn set_saturation(&self, saturation: Float) -> Result<(), OutOfRangeError> {
        let saturation = OutOfRangeError::check("saturation", saturation)?;
        self.update_sv(1, saturation);
        Ok(())
    }

    /// Set the value, which must be in unit range.
    pub fn set_value(&self, value: Float) -> Result<(), OutOfRangeError> {
        let value = OutOfRangeError::check("value", value)?;
        self.update_sv(2, value);
        Ok(())
    }

    fn update_sv(&self, index: usize, component: Float) {
        let rgb = {
            let mut state = self.state.borrow_mut();
            state.hsv[index] = component;
            state.update_sv_marker();
            hsv_to_rgb(&state.hsv)
        };

        self.var.set_from(self.subscription, rgb);
    }
}

impl Drop for ColorWheel {
    fn drop(&mut self) {
        self.var.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for ColorWheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ColorWheel")
            .field("radius", &state.geometry.radius())
            .field("hue_degrees", &state.hue_degrees)
            .field("hsv", &state.hsv)
            .finish()
    }
}
