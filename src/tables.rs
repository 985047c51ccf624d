//! Transition tables for the escape sequence state machine.
//!
//! The grammar is written down as a flat list of
//! `(state, byte range, action, next state)` rules plus a set of rules
//! that apply from any state. A `const fn` expands the lists into dense
//! per-state arrays at compile time, so a lookup at parse time is two
//! array indexes. A hand-written switch rendition of the same grammar
//! lives in `switched.rs` and the test suite requires the two to agree
//! cell by cell.

use crate::enums::Action::{
    Clear, Collect, CsiDispatch, EscDispatch, Execute, Hook, Ignore, OscEnd,
    OscPut, OscStart, Param, Print, Put, Unhook,
};
use crate::enums::State::{
    CsiEntry, CsiIgnore, CsiIntermediate, CsiParam, DcsEntry, DcsIgnore,
    DcsIntermediate, DcsParam, DcsPassthrough, Escape, EscapeIntermediate,
    Ground, OscString, SosPmApcString,
};
use crate::enums::{Action, State};

/// Number of table-indexable states. `State::Undefined` is a lookup
/// result, never an index.
pub(crate) const STATE_COUNT: usize = State::Undefined as usize;

/// Only code points below this bound index the tables. Anything higher
/// is either printable (handled by the ground fast path) or dropped.
pub(crate) const TABLE_WIDTH: usize = 0xA0;

/// One grammar rule: in the first state, bytes `first..=last` fire the
/// action. A next-state of [`STAY`] keeps the machine where it is.
type Rule = (State, u8, u8, Action, State);

/// Marker next-state for rules that do not change state.
const STAY: State = State::Undefined;

/// Per-state grammar. The execute class is 0x00..=0x17, 0x19 and
/// 0x1C..=0x1F throughout; CAN, SUB and ESC belong to [`ANYWHERE`].
const RULES: &[Rule] = &[
    (Ground, 0x00, 0x17, Execute, STAY),
    (Ground, 0x19, 0x19, Execute, STAY),
    (Ground, 0x1c, 0x1f, Execute, STAY),
    (Ground, 0x20, 0x7f, Print, STAY),
    //
    (Escape, 0x00, 0x17, Execute, STAY),
    (Escape, 0x19, 0x19, Execute, STAY),
    (Escape, 0x1c, 0x1f, Execute, STAY),
    (Escape, 0x20, 0x2f, Collect, EscapeIntermediate),
    (Escape, 0x30, 0x4f, EscDispatch, Ground),
    (Escape, 0x50, 0x50, Ignore, DcsEntry),
    (Escape, 0x51, 0x57, EscDispatch, Ground),
    (Escape, 0x58, 0x58, Ignore, SosPmApcString),
    (Escape, 0x59, 0x5a, EscDispatch, Ground),
    (Escape, 0x5b, 0x5b, Ignore, CsiEntry),
    (Escape, 0x5c, 0x5c, EscDispatch, Ground),
    (Escape, 0x5d, 0x5d, Ignore, OscString),
    (Escape, 0x5e, 0x5f, Ignore, SosPmApcString),
    (Escape, 0x60, 0x7e, EscDispatch, Ground),
    (Escape, 0x7f, 0x7f, Ignore, STAY),
    //
    (EscapeIntermediate, 0x00, 0x17, Execute, STAY),
    (EscapeIntermediate, 0x19, 0x19, Execute, STAY),
    (EscapeIntermediate, 0x1c, 0x1f, Execute, STAY),
    (EscapeIntermediate, 0x20, 0x2f, Collect, STAY),
    (EscapeIntermediate, 0x30, 0x7e, EscDispatch, Ground),
    (EscapeIntermediate, 0x7f, 0x7f, Ignore, STAY),
    //
    (CsiEntry, 0x00, 0x17, Execute, STAY),
    (CsiEntry, 0x19, 0x19, Execute, STAY),
    (CsiEntry, 0x1c, 0x1f, Execute, STAY),
    (CsiEntry, 0x20, 0x2f, Collect, CsiIntermediate),
    (CsiEntry, 0x30, 0x39, Param, CsiParam),
    (CsiEntry, 0x3a, 0x3a, Ignore, STAY),
    (CsiEntry, 0x3b, 0x3b, Param, CsiParam),
    (CsiEntry, 0x3c, 0x3f, Collect, CsiParam),
    (CsiEntry, 0x40, 0x7e, CsiDispatch, Ground),
    (CsiEntry, 0x7f, 0x7f, Ignore, STAY),
    //
    (CsiParam, 0x00, 0x17, Execute, STAY),
    (CsiParam, 0x19, 0x19, Execute, STAY),
    (CsiParam, 0x1c, 0x1f, Execute, STAY),
    (CsiParam, 0x20, 0x2f, Collect, CsiIntermediate),
    (CsiParam, 0x30, 0x39, Param, STAY),
    (CsiParam, 0x3a, 0x3a, Ignore, CsiIgnore),
    (CsiParam, 0x3b, 0x3b, Param, STAY),
    (CsiParam, 0x3c, 0x3f, Ignore, CsiIgnore),
    (CsiParam, 0x40, 0x7e, CsiDispatch, Ground),
    (CsiParam, 0x7f, 0x7f, Ignore, STAY),
    //
    (CsiIntermediate, 0x00, 0x17, Execute, STAY),
    (CsiIntermediate, 0x19, 0x19, Execute, STAY),
    (CsiIntermediate, 0x1c, 0x1f, Execute, STAY),
    (CsiIntermediate, 0x20, 0x2f, Collect, STAY),
    (CsiIntermediate, 0x30, 0x3f, Ignore, CsiIgnore),
    (CsiIntermediate, 0x40, 0x7e, CsiDispatch, Ground),
    (CsiIntermediate, 0x7f, 0x7f, Ignore, STAY),
    //
    (CsiIgnore, 0x00, 0x17, Execute, STAY),
    (CsiIgnore, 0x19, 0x19, Execute, STAY),
    (CsiIgnore, 0x1c, 0x1f, Execute, STAY),
    (CsiIgnore, 0x20, 0x3f, Ignore, STAY),
    (CsiIgnore, 0x40, 0x7e, Ignore, Ground),
    (CsiIgnore, 0x7f, 0x7f, Ignore, STAY),
    // DCS entry does not execute C0 controls, per the DEC table.
    (DcsEntry, 0x00, 0x17, Ignore, STAY),
    (DcsEntry, 0x19, 0x19, Ignore, STAY),
    (DcsEntry, 0x1c, 0x1f, Ignore, STAY),
    (DcsEntry, 0x20, 0x2f, Collect, DcsIntermediate),
    (DcsEntry, 0x30, 0x39, Param, DcsParam),
    (DcsEntry, 0x3a, 0x3a, Ignore, DcsIgnore),
    (DcsEntry, 0x3b, 0x3b, Param, DcsParam),
    (DcsEntry, 0x3c, 0x3f, Collect, DcsParam),
    (DcsEntry, 0x40, 0x7e, Ignore, DcsPassthrough),
    (DcsEntry, 0x7f, 0x7f, Ignore, STAY),
    //
    (DcsParam, 0x00, 0x17, Execute, STAY),
    (DcsParam, 0x19, 0x19, Execute, STAY),
    (DcsParam, 0x1c, 0x1f, Execute, STAY),
    (DcsParam, 0x20, 0x2f, Collect, DcsIntermediate),
    (DcsParam, 0x30, 0x39, Param, STAY),
    (DcsParam, 0x3a, 0x3a, Ignore, DcsIgnore),
    (DcsParam, 0x3b, 0x3b, Param, STAY),
    (DcsParam, 0x3c, 0x3f, Ignore, DcsIgnore),
    (DcsParam, 0x40, 0x7e, Ignore, DcsPassthrough),
    (DcsParam, 0x7f, 0x7f, Ignore, STAY),
    //
    (DcsIntermediate, 0x00, 0x17, Execute, STAY),
    (DcsIntermediate, 0x19, 0x19, Execute, STAY),
    (DcsIntermediate, 0x1c, 0x1f, Execute, STAY),
    (DcsIntermediate, 0x20, 0x2f, Collect, STAY),
    (DcsIntermediate, 0x30, 0x3f, Ignore, DcsIgnore),
    (DcsIntermediate, 0x40, 0x7e, Ignore, DcsPassthrough),
    (DcsIntermediate, 0x7f, 0x7f, Ignore, STAY),
    //
    (DcsPassthrough, 0x00, 0x17, Put, STAY),
    (DcsPassthrough, 0x19, 0x19, Put, STAY),
    (DcsPassthrough, 0x1c, 0x1f, Put, STAY),
    (DcsPassthrough, 0x20, 0x7e, Put, STAY),
    (DcsPassthrough, 0x7f, 0x7f, Ignore, STAY),
    //
    (DcsIgnore, 0x00, 0x17, Ignore, STAY),
    (DcsIgnore, 0x19, 0x19, Ignore, STAY),
    (DcsIgnore, 0x1c, 0x1f, Ignore, STAY),
    (DcsIgnore, 0x20, 0x7f, Ignore, STAY),
    //
    (OscString, 0x00, 0x17, Ignore, STAY),
    (OscString, 0x19, 0x19, Ignore, STAY),
    (OscString, 0x1c, 0x1f, Ignore, STAY),
    (OscString, 0x20, 0x7f, OscPut, STAY),
    //
    (SosPmApcString, 0x00, 0x17, Ignore, STAY),
    (SosPmApcString, 0x19, 0x19, Ignore, STAY),
    (SosPmApcString, 0x1c, 0x1f, Ignore, STAY),
];

/// Rules that outrank the per-state grammar. Applied to every row last,
/// so they overwrite whatever the row says. These are what terminate
/// strings cleanly: the generic transition machinery fires the exit
/// action of the interrupted state (OscEnd, Unhook) on the way out.
const ANYWHERE: &[(u8, u8, Action, State)] = &[
    (0x18, 0x18, Ignore, Ground),
    (0x1a, 0x1a, Ignore, Ground),
    (0x1b, 0x1b, Ignore, Escape),
    (0x80, 0x8f, Ignore, Ground),
    (0x90, 0x90, Ignore, DcsEntry),
    (0x91, 0x97, Ignore, Ground),
    (0x98, 0x98, Ignore, SosPmApcString),
    (0x9c, 0x9c, Ignore, Ground),
    (0x9e, 0x9f, Ignore, SosPmApcString),
];

pub(crate) struct Table {
    transitions: [[State; TABLE_WIDTH]; STATE_COUNT],
    events: [[Action; TABLE_WIDTH]; STATE_COUNT],
    entry: [Action; STATE_COUNT],
    exit: [Action; STATE_COUNT],
}

impl Table {
    const fn build() -> Self {
        let mut table = Table {
            transitions: [[State::Undefined; TABLE_WIDTH]; STATE_COUNT],
            events: [[Action::Undefined; TABLE_WIDTH]; STATE_COUNT],
            entry: [Ignore; STATE_COUNT],
            exit: [Ignore; STATE_COUNT],
        };

        let mut i = 0;
        while i < RULES.len() {
            let (from, first, last, event, to) = RULES[i];
            let mut byte = first as usize;
            while byte <= last as usize {
                table.events[from as usize][byte] = event;
                if to as usize != State::Undefined as usize {
                    table.transitions[from as usize][byte] = to;
                }
                byte += 1;
            }
            i += 1;
        }

        let mut state = 0;
        while state < STATE_COUNT {
            let mut i = 0;
            while i < ANYWHERE.len() {
                let (first, last, event, to) = ANYWHERE[i];
                let mut byte = first as usize;
                while byte <= last as usize {
                    table.events[state][byte] = event;
                    table.transitions[state][byte] = to;
                    byte += 1;
                }
                i += 1;
            }
            state += 1;
        }

        table.entry[Escape as usize] = Clear;
        table.entry[CsiEntry as usize] = Clear;
        table.entry[DcsEntry as usize] = Clear;
        table.entry[DcsPassthrough as usize] = Hook;
        table.entry[OscString as usize] = OscStart;

        table.exit[DcsPassthrough as usize] = Unhook;
        table.exit[OscString as usize] = OscEnd;

        table
    }
}

static TABLE: Table = Table::build();

/// Target state for `cp` in `state`, or [`State::Undefined`] when the
/// pair does not change state.
#[inline(always)]
pub(crate) fn transition(state: State, cp: char) -> State {
    let cp = cp as usize;
    if cp < TABLE_WIDTH {
        TABLE.transitions[state as usize][cp]
    } else {
        State::Undefined
    }
}

/// In-state or transition action for `cp` in `state`.
#[inline(always)]
pub(crate) fn event(state: State, cp: char) -> Action {
    let cp = cp as usize;
    if cp < TABLE_WIDTH {
        TABLE.events[state as usize][cp]
    } else {
        Action::Undefined
    }
}

/// Action fired when `state` is entered.
#[inline(always)]
pub(crate) fn entry_action(state: State) -> Action {
    TABLE.entry[state as usize]
}

/// Action fired when `state` is left.
#[inline(always)]
pub(crate) fn exit_action(state: State) -> Action {
    TABLE.exit[state as usize]
}
