//! Three-element color sliders.
//!
//! A [`ColorSlider`] edits a color as three unit-range elements in some color
//! space. The color space is data, captured by a [`SliderModel`], so RGB,
//! HSV, and HLS sliders are one type with three model constants.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::{clamp, hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, DEFAULT_DECIMALS};
use crate::error::OutOfBoundsError;
use crate::var::{ColorVar, SubscriptionId};
use crate::{ColorSpace, Float};

/// The conversion between a slider's elements and RGB.
#[derive(Copy, Clone, Debug)]
pub struct SliderModel {
    /// The color space of the elements.
    pub space: ColorSpace,
    /// The one-letter labels of the elements.
    pub labels: [&'static str; 3],
    /// The elements of a slider's own color variable.
    pub default: [Float; 3],
    /// Convert elements to RGB.
    pub to_rgb: fn(&[Float; 3]) -> [Float; 3],
    /// Convert RGB to elements.
    pub from_rgb: fn(&[Float; 3]) -> [Float; 3],
}

fn identity(rgb: &[Float; 3]) -> [Float; 3] {
    *rgb
}

/// The model of an RGB slider, defaulting to red.
pub const RGB_SLIDER: SliderModel = SliderModel {
    space: ColorSpace::Rgb,
    labels: ["R", "G", "B"],
    default: [1.0, 0.0, 0.0],
    to_rgb: identity,
    from_rgb: identity,
};

/// The model of an HSV slider, defaulting to red.
pub const HSV_SLIDER: SliderModel = SliderModel {
    space: ColorSpace::Hsv,
    labels: ["H", "S", "V"],
    default: [0.0, 1.0, 1.0],
    to_rgb: hsv_to_rgb,
    from_rgb: rgb_to_hsv,
};

/// The model of an HLS slider, defaulting to red.
pub const HLS_SLIDER: SliderModel = SliderModel {
    space: ColorSpace::Hls,
    labels: ["H", "L", "S"],
    default: [0.0, 0.5, 1.0],
    to_rgb: hls_to_rgb,
    from_rgb: rgb_to_hls,
};

impl SliderModel {
    /// Get the model for the color space.
    pub const fn of(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Rgb => RGB_SLIDER,
            ColorSpace::Hsv => HSV_SLIDER,
            ColorSpace::Hls => HLS_SLIDER,
        }
    }
}

fn check_index(index: usize) -> Result<usize, OutOfBoundsError> {
    if index <= 2 {
        Ok(index)
    } else {
        Err(OutOfBoundsError::new(index, 0..=2))
    }
}

/// A slider with three elements bound to a color variable.
///
/// Changing an element publishes the converted color to all other
/// subscribers. Changes from other controls update all three elements.
pub struct ColorSlider {
    model: SliderModel,
    var: ColorVar,
    elements: Rc<RefCell<[Float; 3]>>,
    subscription: SubscriptionId,
}

impl ColorSlider {
    /// Create a new slider for the color variable.
    pub fn new(model: SliderModel, var: ColorVar) -> Self {
        let elements = Rc::new(RefCell::new((model.from_rgb)(&var.get())));

        let weak: Weak<RefCell<[Float; 3]>> = Rc::downgrade(&elements);
        let from_rgb = model.from_rgb;
        let subscription = var.subscribe(move |rgb| {
            if let Some(elements) = weak.upgrade() {
                *elements.borrow_mut() = from_rgb(rgb);
            }
        });

        Self {
            model,
            var,
            elements,
            subscription,
        }
    }

    /// Create a new slider with its own color variable holding the model's
    /// default.
    pub fn with_default(model: SliderModel) -> Self {
        let var = ColorVar::new((model.to_rgb)(&model.default));
        Self::new(model, var)
    }

    /// Get the model.
    pub fn model(&self) -> &SliderModel {
        &self.model
    }

    /// Get the color variable.
    pub fn var(&self) -> &ColorVar {
        &self.var
    }

    /// Get all three elements.
    pub fn elements(&self) -> [Float; 3] {
        *self.elements.borrow()
    }

    /// Get the element with the given index.
    pub fn element(&self, index: usize) -> Result<Float, OutOfBoundsError> {
        Ok(self.elements.borrow()[check_index(index)?])
    }

    /// Get the text for the element with the given index.
    pub fn text(&self, index: usize) -> Result<String, OutOfBoundsError> {
        let value = self.element(index)?;
        Ok(format!("{:.*}", DEFAULT_DECIMALS, value))
    }

    /// Set the element with the given index.
    ///
    /// The value is clamped to unit range before the slider publishes the
    /// updated color.
    pub fn set_element(&self, index: usize, value: Float) -> Result<(), OutOfBoundsError> {
        let index = check_index(index)?;
        let elements = {
            let mut elements = self.elements.borrow_mut();
            elements[index] = clamp(value);
            *elements
        };

        let rgb = (self.model.to_rgb)(&elements);
        log::trace!(
            "{} slider element {} set to {}",
            self.model.space,
            index,
            elements[index]
        );
        self.var.set_from(self.subscription, rgb);
        Ok(())
    }

    /// Enter text for the element with the given index.
    ///
    /// The text must be a number no greater than one. Accepted text updates
    /// the element. This method returns whether the text was accepted.
    pub fn enter_text(&self, index: usize, text: &str) -> Result<bool, OutOfBoundsError> {
        let index = check_index(index)?;
        match text.trim().parse::<Float>() {
            Ok(value) if value.is_finite() && value <= 1.0 => {
                self.set_element(index, value)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl Drop for ColorSlider {
    fn drop(&mut self) {
        self.var.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for ColorSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSlider")
            .field("space", &self.model.space)
            .field("elements", &*self.elements.borrow())
            .finish()
    }
}
