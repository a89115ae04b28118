//! A text field for color literals.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::{color_string_to_color, convert, format_as, rgb_to_hls, rgb_to_hsv};
use crate::error::ColorFormatError;
use crate::var::{ColorVar, SubscriptionId};
use crate::{ColorFormat, ColorSpace, Float, DEFAULT_DECIMALS};

struct FieldState {
    text: String,
    format: ColorFormat,
    valid: bool,
}

impl FieldState {
    fn reformat(&mut self, rgb: &[Float; 3]) {
        self.text = format_as(self.format, rgb, DEFAULT_DECIMALS);
        self.valid = true;
    }
}

/// A text field bound to a color variable.
///
/// The field shows the color as a literal in its current format. Text typed
/// into the field is parsed as a color literal, with the three-digit
/// hexadecimal form disallowed since it usually is a six-digit literal that
/// is not finished yet. Valid text updates the color variable and switches
/// the field to the literal's format. Invalid text only marks the field as
/// invalid. When another control changes the color, the field replaces its
/// text.
///
/// ```
/// # use huewheel::field::ColorField;
/// # use huewheel::var::ColorVar;
/// # use huewheel::ColorFormat;
/// let var = ColorVar::default();
/// let field = ColorField::new(var.clone(), ColorFormat::RgbHex);
/// assert_eq!(field.text(), "#ff0000");
///
/// assert!(field.set_text("#00ff0").is_err());
/// assert!(!field.is_valid());
/// assert_eq!(var.get(), [1.0, 0.0, 0.0]);
///
/// assert!(field.set_text("hsv(0.5, 1, 1)").is_ok());
/// assert_eq!(field.format(), ColorFormat::Hsv);
/// assert_eq!(var.get(), [0.0, 1.0, 1.0]);
/// ```
pub struct ColorField {
    var: ColorVar,
    state: Rc<RefCell<FieldState>>,
    subscription: SubscriptionId,
}

impl ColorField {
    /// Create a new field showing the color variable in the given format.
    pub fn new(var: ColorVar, format: ColorFormat) -> Self {
        let mut state = FieldState {
            text: String::new(),
            format,
            valid: true,
        };
        state.reformat(&var.get());

        let state = Rc::new(RefCell::new(state));
        let weak: Weak<RefCell<FieldState>> = Rc::downgrade(&state);
        let subscription = var.subscribe(move |rgb| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().reformat(rgb);
            }
        });

        Self {
            var,
            state,
            subscription,
        }
    }

    /// Get the text.
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Get the current format.
    pub fn format(&self) -> ColorFormat {
        self.state.borrow().format
    }

    /// Determine whether the text is a valid color literal.
    pub fn is_valid(&self) -> bool {
        self.state.borrow().valid
    }

    /// Get the color as RGB.
    pub fn rgb(&self) -> [Float; 3] {
        self.var.get()
    }

    /// Get the color as HSV.
    pub fn hsv(&self) -> [Float; 3] {
        rgb_to_hsv(&self.var.get())
    }

    /// Get the color as HLS.
    pub fn hls(&self) -> [Float; 3] {
        rgb_to_hls(&self.var.get())
    }

    /// Switch to the format and reformat the text.
    pub fn set_format(&self, format: ColorFormat) {
        let mut state = self.state.borrow_mut();
        state.format = format;
        state.reformat(&self.var.get());
    }

    /// Replace the text as if typed.
    ///
    /// If the text is a valid color literal, this method updates the color
    /// variable. If the text is malformed but its format was recognized, the
    /// field still switches to that format.
    pub fn set_text(&self, text: &str) -> Result<(), ColorFormatError> {
        let result = color_string_to_color(text, false);

        let rgb = {
            let mut state = self.state.borrow_mut();
            state.text = text.to_string();

            match result {
                Ok((format, coordinates)) => {
                    state.format = format;
                    state.valid = true;
                    convert(format.space(), ColorSpace::Rgb, &coordinates)
                }
                Err(error) => {
                    if let Some(format) = error.format() {
                        state.format = format;
                    }
                    state.valid = false;
                    log::debug!("invalid color literal {:?}: {}", text, error);
                    return Err(error);
                }
            }
        };

        self.var.set_from(self.subscription, rgb);
        Ok(())
    }
}

impl Drop for ColorField {
    fn drop(&mut self) {
        self.var.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for ColorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ColorField")
            .field("text", &state.text)
            .field("format", &state.format)
            .field("valid", &state.valid)
            .finish()
    }
}
