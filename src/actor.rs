//! Emission sink for the state machine.

use crate::enums::{Action, ActionClass};

/// Receives every action the state machine emits.
///
/// The parser performs no accumulation of its own: [`Action::Collect`],
/// [`Action::Param`], [`Action::Put`] and [`Action::OscPut`] arrive one
/// code point at a time and the implementation buffers whatever it
/// needs. Implementations should be cheap and non-blocking; heavy work
/// belongs behind the sink, not in it.
///
/// Pairing is guaranteed by the machine: an `Enter` carrying
/// [`Action::Hook`] always gets a matching `Leave` with
/// [`Action::Unhook`], and [`Action::OscStart`] a matching
/// [`Action::OscEnd`]. [`Action::Ignore`] emissions keep the
/// Leave/Transition/Enter framing uniform and can fall through a
/// `_ => {}` arm.
pub trait Actor {
    /// Called once per emission with the reason it fires, the action,
    /// and the code point that triggered it.
    fn perform(&mut self, class: ActionClass, action: Action, cp: char);
}

/// Closures work as one-off sinks, mostly in tests and demos.
impl<F> Actor for F
where
    F: FnMut(ActionClass, Action, char),
{
    fn perform(&mut self, class: ActionClass, action: Action, cp: char) {
        self(class, action, cp)
    }
}
