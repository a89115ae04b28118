//! The observable color value shared by color controls.
//!
//! A [`ColorVar`] holds one RGB color and a list of subscribers. Every
//! control bound to the same variable subscribes to it and publishes its own
//! edits with [`ColorVar::set_from`], which skips the publishing control's
//! own subscription. All of this happens on one thread: subscribers run
//! synchronously, in subscription order, right after the new value has been
//! stored.
//!
//! ```
//! # use huewheel::var::ColorVar;
//! # use std::cell::Cell;
//! # use std::rc::Rc;
//! let var = ColorVar::default();
//! let seen = Rc::new(Cell::new(0.0));
//!
//! let seen_too = seen.clone();
//! let id = var.subscribe(move |rgb| seen_too.set(rgb[1]));
//!
//! // Values greater than one are 8-bit channels.
//! var.set([255.0, 51.0, 0.0]);
//! assert_eq!(seen.get(), 0.2);
//!
//! assert!(var.unsubscribe(id));
//! var.set([0.0, 1.0, 0.0]);
//! assert_eq!(seen.get(), 0.2);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::clamp_all;
use crate::Float;

/// The default color, pure red.
pub const DEFAULT_RGB: [Float; 3] = [1.0, 0.0, 0.0];

/// The identifier of a subscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(usize);

type Callback = Rc<dyn Fn(&[Float; 3])>;

struct State {
    value: [Float; 3],
    next_id: usize,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

/// Normalize a color value before storing it.
///
/// If any channel is greater than 1.0, all channels are treated as 8-bit
/// values and divided by 255. The result is clamped to unit range.
pub fn normalize_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    if 1.0 < r || 1.0 < g || 1.0 < b {
        clamp_all(&[r / 255.0, g / 255.0, b / 255.0])
    } else {
        clamp_all(value)
    }
}

/// A shared, observable RGB color.
///
/// Cloning a color variable produces another handle for the same value and
/// subscribers.
#[derive(Clone)]
pub struct ColorVar {
    inner: Rc<RefCell<State>>,
}

impl ColorVar {
    /// Create a new color variable with the given value.
    pub fn new(value: [Float; 3]) -> Self {
        Self {
            inner: Rc::new(RefCell::new(State {
                value: normalize_rgb(&value),
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> [Float; 3] {
        self.inner.borrow().value
    }

    /// Register a callback that is invoked with every new value.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&[Float; 3]) + 'static,
    {
        let mut state = self.inner.borrow_mut();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.subscribers.push((id, Rc::new(callback)));
        id
    }

    /// Remove the subscription with the given identifier.
    ///
    /// This method returns `false` if there was no such subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.inner.borrow_mut();
        let before = state.subscribers.len();
        state.subscribers.retain(|(sid, _)| *sid != id);
        before != state.subscribers.len()
    }

    /// Get the number of subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Update the value and notify all subscribers.
    pub fn set(&self, value: [Float; 3]) {
        self.store(value);
        self.dispatch(None);
    }

    /// Update the value and notify all subscribers but the origin.
    ///
    /// Controls use this method to publish their own edits without being
    /// notified about them.
    pub fn set_from(&self, origin: SubscriptionId, value: [Float; 3]) {
        self.store(value);
        self.dispatch(Some(origin));
    }

    /// Notify all subscribers of the current value.
    pub fn notify(&self) {
        self.dispatch(None);
    }

    /// Determine whether both handles refer to the same variable.
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn store(&self, value: [Float; 3]) {
        self.inner.borrow_mut().value = normalize_rgb(&value);
    }

    fn dispatch(&self, skip: Option<SubscriptionId>) {
        // Release the borrow before running callbacks, so that they may read
        // or even update this variable.
        let (value, callbacks) = {
            let state = self.inner.borrow();
            let callbacks = state
                .subscribers
                .iter()
                .filter(|(id, _)| Some(*id) != skip)
                .map(|(_, callback)| callback.clone())
                .collect::<Vec<_>>();
            (state.value, callbacks)
        };

        log::trace!(
            "notifying {} subscribers of rgb {:?}",
            callbacks.len(),
            value
        );
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl Default for ColorVar {
    /// Create a new color variable holding [`DEFAULT_RGB`].
    fn default() -> Self {
        Self::new(DEFAULT_RGB)
    }
}

impl std::fmt::Debug for ColorVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("ColorVar")
            .field("value", &state.value)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}
