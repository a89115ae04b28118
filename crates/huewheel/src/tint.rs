//! Tints and shades of a base color.
//!
//! A tint moves every channel of a color towards 1.0, a shade towards 0.0.
//! [`rgb_tints`] and [`rgb_shades`] produce a row of progressively lighter or
//! darker variants for display as swatches. Since large steps collapse into
//! the same displayable color once channels saturate, both functions
//! over-generate `2 * count - 1` candidates, drop trailing candidates that
//! are absent or indistinguishable from their predecessor, and only then
//! truncate to `count`.
//!
//! [`ToneStrip`] keeps such a row up to date with a [`ColorVar`].

use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::{Rc, Weak};

use crate::core::{luminosity_transform, to_24bit};
use crate::var::{ColorVar, SubscriptionId};
use crate::Float;

/// The maximum number of swatches in a [`ToneStrip`].
pub const MAX_TONES: usize = 64;

/// The progression of step sizes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Progression {
    /// Each step adds the base percentage to the running factor.
    #[default]
    Linear,
    /// Each step multiplies the running factor by `1 ± base/100`, using plus
    /// for tints and minus for shades.
    Geometric,
}

/// Lighter or darker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Tints,
    Shades,
}

impl Direction {
    fn sign(&self) -> Float {
        match *self {
            Self::Tints => 1.0,
            Self::Shades => -1.0,
        }
    }

    /// Get a human-readable title.
    pub const fn title(&self) -> &'static str {
        match *self {
            Self::Tints => "Tints",
            Self::Shades => "Shades",
        }
    }
}

fn generate(
    rgb: &[Float; 3],
    base_percent: Float,
    count: usize,
    progression: Progression,
    direction: Direction,
) -> Vec<[Float; 3]> {
    if count == 0 {
        return Vec::new();
    }

    let sign = direction.sign();
    let total = count.saturating_mul(2) - 1;
    let mut candidates = Vec::with_capacity(total.min(2 * MAX_TONES));
    let mut factor = base_percent;

    for _ in 0..total {
        let absent = 100.0 <= factor;
        if absent {
            candidates.push(None);
        } else {
            candidates.push(Some(luminosity_transform(rgb, &[sign * factor / 100.0; 3])));
        }

        let next = match progression {
            Progression::Linear => factor + base_percent,
            Progression::Geometric => factor * (1.0 + sign * base_percent / 100.0),
        };

        // Once absent and not shrinking, all remaining candidates are absent.
        if absent && factor <= next {
            break;
        }
        factor = next;
    }

    // Trim absent and duplicate candidates from the end.
    while 2 <= candidates.len() {
        let last = candidates[candidates.len() - 1];
        let previous = candidates[candidates.len() - 2];
        match (previous, last) {
            (_, None) => {
                candidates.pop();
            }
            (Some(c1), Some(c2)) if to_24bit(&c1) == to_24bit(&c2) => {
                candidates.pop();
            }
            _ => break,
        }
    }

    candidates.truncate(count);
    candidates.into_iter().flatten().collect()
}

/// Generate up to `count` progressively lighter tints of the RGB color.
///
/// The first tint is `base_percent` lighter than the color. Subsequent tints
/// follow the given progression. Candidates whose factor reaches 100% are
/// absent. The result never ends with two tints that have the same 24-bit
/// representation and is empty for a count of zero. Only the end is checked,
/// so very small percentages may repeat 24-bit colors earlier in the result.
///
/// ```
/// # use huewheel::tint::{rgb_tints, Progression};
/// let tints = rgb_tints(&[0.5, 0.5, 0.5], 20.0, 5, Progression::Linear);
/// assert_eq!(tints.len(), 3);
/// assert_eq!(tints[2], [1.0, 1.0, 1.0]);
/// ```
pub fn rgb_tints(
    rgb: &[Float; 3],
    base_percent: Float,
    count: usize,
    progression: Progression,
) -> Vec<[Float; 3]> {
    generate(rgb, base_percent, count, progression, Direction::Tints)
}

/// Generate up to `count` progressively darker shades of the RGB color.
///
/// This function mirrors [`rgb_tints`], moving towards black instead of
/// white. Note that the geometric progression shrinks the step size for
/// shades.
pub fn rgb_shades(
    rgb: &[Float; 3],
    base_percent: Float,
    count: usize,
    progression: Progression,
) -> Vec<[Float; 3]> {
    generate(rgb, base_percent, count, progression, Direction::Shades)
}

// --------------------------------------------------------------------------------------------------------------------

struct StripState {
    direction: Direction,
    progression: Progression,
    count: usize,
    range: RangeInclusive<u32>,
    percent: u32,
    swatches: Vec<Option<[Float; 3]>>,
}

impl StripState {
    fn regenerate(&mut self, rgb: &[Float; 3]) {
        let tones = generate(
            rgb,
            self.percent as Float,
            self.count,
            self.progression,
            self.direction,
        );

        self.swatches = (0..self.count).map(|index| tones.get(index).copied()).collect();
        log::trace!(
            "regenerated {} {} at {}%",
            tones.len(),
            self.direction.title().to_lowercase(),
            self.percent
        );
    }
}

/// A row of tint or shade swatches for a color variable.
///
/// The strip always has `count` slots, with the count capped at
/// [`MAX_TONES`]. Slots beyond the generated sequence are empty. A percentage slider controls the step size. It only accepts
/// whole percentages within its range.
pub struct ToneStrip {
    var: ColorVar,
    state: Rc<RefCell<StripState>>,
    subscription: SubscriptionId,
}

impl ToneStrip {
    /// Create a new strip observing the given color variable.
    ///
    /// The initial percentage is the start of the range. An inverted range
    /// collapses onto its start.
    pub fn new(
        var: ColorVar,
        direction: Direction,
        count: usize,
        range: RangeInclusive<u32>,
        progression: Progression,
    ) -> Self {
        let (start, end) = (*range.start(), *range.end());
        let mut state = StripState {
            direction,
            progression,
            count: count.min(MAX_TONES),
            percent: start,
            range: start..=end.max(start),
            swatches: Vec::new(),
        };
        state.regenerate(&var.get());

        let state = Rc::new(RefCell::new(state));
        let weak: Weak<RefCell<StripState>> = Rc::downgrade(&state);
        let subscription = var.subscribe(move |rgb| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().regenerate(rgb);
            }
        });

        Self {
            var,
            state,
            subscription,
        }
    }

    /// Create a strip of five tints with a range of 1% to 5%.
    pub fn tints(var: ColorVar) -> Self {
        Self::new(var, Direction::Tints, 5, 1..=5, Progression::Linear)
    }

    /// Create a strip of five shades with a range of 1% to 5%.
    pub fn shades(var: ColorVar) -> Self {
        Self::new(var, Direction::Shades, 5, 1..=5, Progression::Linear)
    }

    /// Get the direction.
    pub fn direction(&self) -> Direction {
        self.state.borrow().direction
    }

    /// Get the current percentage.
    pub fn percent(&self) -> u32 {
        self.state.borrow().percent
    }

    /// Update the percentage.
    ///
    /// The percentage is floored and clamped to the range. This method
    /// regenerates the swatches and returns `true` only if the whole
    /// percentage changed.
    pub fn set_percent(&self, percent: Float) -> bool {
        let mut state = self.state.borrow_mut();
        let (start, end) = (*state.range.start(), *state.range.end());
        let percent = (percent.floor().max(0.0) as u32).clamp(start, end);
        if percent == state.percent {
            return false;
        }

        state.percent = percent;
        state.regenerate(&self.var.get());
        true
    }

    /// Get the swatches. There always are `count` of them.
    pub fn swatches(&self) -> Vec<Option<[Float; 3]>> {
        self.state.borrow().swatches.clone()
    }

    /// Pick the swatch with the given index as new color.
    ///
    /// This method returns the picked color or `None` if the slot is empty.
    pub fn select(&self, index: usize) -> Option<[Float; 3]> {
        let rgb = self.state.borrow().swatches.get(index).copied().flatten()?;
        self.var.set(rgb);
        Some(rgb)
    }
}

impl Drop for ToneStrip {
    fn drop(&mut self) {
        self.var.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for ToneStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ToneStrip")
            .field("direction", &state.direction)
            .field("percent", &state.percent)
            .field("swatches", &state.swatches)
            .finish()
    }
}
