//! Open-coded rendition of the state machine, test support only.
//!
//! The grammar exists twice in this crate: the dense tables the parser
//! runs on, and this switch form. The test suite drives both over the
//! same input and requires identical emission streams and final states,
//! which guards the table rules against authoring slips.

use crate::actor::Actor;
use crate::classify::{is_execute, is_param, is_printable};
use crate::enums::{Action, ActionClass, State};
use crate::utf8::{Decoder, Outcome};

pub(crate) struct SwitchedParser {
    pub(crate) state: State,
    decoder: Decoder,
}

impl SwitchedParser {
    pub(crate) fn new() -> Self {
        Self::with_state(State::Ground)
    }

    pub(crate) fn with_state(state: State) -> Self {
        Self {
            state,
            decoder: Decoder::default(),
        }
    }

    pub(crate) fn advance<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        for &byte in bytes {
            match self.decoder.decode(byte) {
                Outcome::Incomplete => {},
                Outcome::Success(cp) => self.process(cp, actor),
                Outcome::Invalid(replacement) => {
                    self.process(replacement, actor);
                    if let Outcome::Success(cp) = self.decoder.decode(byte) {
                        self.process(cp, actor);
                    }
                },
            }
        }
    }

    pub(crate) fn process<A: Actor>(&mut self, cp: char, actor: &mut A) {
        use Action::*;
        use State::*;

        match cp {
            '\x18' | '\x1a' | '\u{9c}' => {
                return self.transition(Ground, Ignore, cp, actor);
            },
            '\u{80}'..='\u{8f}' | '\u{91}'..='\u{97}' => {
                return self.transition(Ground, Ignore, cp, actor);
            },
            '\x1b' => return self.transition(Escape, Ignore, cp, actor),
            '\u{90}' => return self.transition(DcsEntry, Ignore, cp, actor),
            '\u{98}' | '\u{9e}' | '\u{9f}' => {
                return self.transition(SosPmApcString, Ignore, cp, actor);
            },
            _ => {},
        }

        match self.state {
            Ground => {
                if is_printable(cp) {
                    self.event(Print, cp, actor);
                } else if is_execute(cp) {
                    self.event(Execute, cp, actor);
                }
            },
            Escape => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.transition(EscapeIntermediate, Collect, cp, actor);
                } else if cp == 'P' {
                    self.transition(DcsEntry, Ignore, cp, actor);
                } else if matches!(cp, 'X' | '^' | '_') {
                    self.transition(SosPmApcString, Ignore, cp, actor);
                } else if cp == '[' {
                    self.transition(CsiEntry, Ignore, cp, actor);
                } else if cp == ']' {
                    self.transition(OscString, Ignore, cp, actor);
                } else if matches!(cp, '\x30'..='\x7e') {
                    self.transition(Ground, EscDispatch, cp, actor);
                }
            },
            EscapeIntermediate => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.event(Collect, cp, actor);
                } else if cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x30'..='\x7e') {
                    self.transition(Ground, EscDispatch, cp, actor);
                }
            },
            CsiEntry => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if cp == '\x7f' || cp == ':' {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.transition(CsiIntermediate, Collect, cp, actor);
                } else if is_param(cp) {
                    self.transition(CsiParam, Param, cp, actor);
                } else if matches!(cp, '<'..='?') {
                    self.transition(CsiParam, Collect, cp, actor);
                } else if matches!(cp, '\x40'..='\x7e') {
                    self.transition(Ground, CsiDispatch, cp, actor);
                }
            },
            CsiParam => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if is_param(cp) {
                    self.event(Param, cp, actor);
                } else if cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                } else if cp == ':' || matches!(cp, '<'..='?') {
                    self.transition(CsiIgnore, Ignore, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.transition(CsiIntermediate, Collect, cp, actor);
                } else if matches!(cp, '\x40'..='\x7e') {
                    self.transition(Ground, CsiDispatch, cp, actor);
                }
            },
            CsiIntermediate => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.event(Collect, cp, actor);
                } else if cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x30'..='\x3f') {
                    self.transition(CsiIgnore, Ignore, cp, actor);
                } else if matches!(cp, '\x40'..='\x7e') {
                    self.transition(Ground, CsiDispatch, cp, actor);
                }
            },
            CsiIgnore => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if matches!(cp, '\x20'..='\x3f' | '\x7f') {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x40'..='\x7e') {
                    self.transition(Ground, Ignore, cp, actor);
                }
            },
            DcsEntry => {
                if is_execute(cp) || cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.transition(DcsIntermediate, Collect, cp, actor);
                } else if cp == ':' {
                    self.transition(DcsIgnore, Ignore, cp, actor);
                } else if is_param(cp) {
                    self.transition(DcsParam, Param, cp, actor);
                } else if matches!(cp, '<'..='?') {
                    self.transition(DcsParam, Collect, cp, actor);
                } else if matches!(cp, '\x40'..='\x7e') {
                    self.transition(DcsPassthrough, Ignore, cp, actor);
                }
            },
            DcsParam => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if is_param(cp) {
                    self.event(Param, cp, actor);
                } else if cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                } else if cp == ':' || matches!(cp, '<'..='?') {
                    self.transition(DcsIgnore, Ignore, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.transition(DcsIntermediate, Collect, cp, actor);
                } else if matches!(cp, '\x40'..='\x7e') {
                    self.transition(DcsPassthrough, Ignore, cp, actor);
                }
            },
            DcsIntermediate => {
                if is_execute(cp) {
                    self.event(Execute, cp, actor);
                } else if matches!(cp, '\x20'..='\x2f') {
                    self.event(Collect, cp, actor);
                } else if cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x30'..='\x3f') {
                    self.transition(DcsIgnore, Ignore, cp, actor);
                } else if matches!(cp, '\x40'..='\x7e') {
                    self.transition(DcsPassthrough, Ignore, cp, actor);
                }
            },
            DcsPassthrough => {
                if is_execute(cp) || matches!(cp, '\x20'..='\x7e') {
                    self.event(Put, cp, actor);
                } else if cp == '\x7f' {
                    self.event(Ignore, cp, actor);
                }
            },
            DcsIgnore => {
                if is_execute(cp) || matches!(cp, '\x20'..='\x7f') {
                    self.event(Ignore, cp, actor);
                }
            },
            OscString => {
                if is_execute(cp) {
                    self.event(Ignore, cp, actor);
                } else if matches!(cp, '\x20'..='\x7f') {
                    self.event(OscPut, cp, actor);
                }
            },
            SosPmApcString => {
                if is_execute(cp) {
                    self.event(Ignore, cp, actor);
                }
            },
            State::Undefined => {},
        }
    }

    fn event<A: Actor>(&self, action: Action, cp: char, actor: &mut A) {
        actor.perform(ActionClass::Event, action, cp);
    }

    fn transition<A: Actor>(
        &mut self,
        target: State,
        action: Action,
        cp: char,
        actor: &mut A,
    ) {
        use Action::*;
        use State::*;

        let exit = match self.state {
            DcsPassthrough => Unhook,
            OscString => OscEnd,
            _ => Ignore,
        };
        actor.perform(ActionClass::Leave, exit, cp);
        actor.perform(ActionClass::Transition, action, cp);

        self.state = target;

        let entry = match target {
            Escape | CsiEntry | DcsEntry => Clear,
            DcsPassthrough => Hook,
            OscString => OscStart,
            _ => Ignore,
        };
        actor.perform(ActionClass::Enter, entry, cp);
    }
}
