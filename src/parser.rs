//! Byte-stream driver for the escape sequence state machine.

use crate::actor::Actor;
use crate::classify;
use crate::enums::{Action, ActionClass, State};
use crate::tables;
use crate::utf8::{Decoder, Outcome};

/// DEC/ANSI compatible escape sequence parser.
///
/// Feed byte fragments with [`Parser::advance`]; the parser decodes
/// UTF-8, walks the transition table, and reports every action to the
/// supplied [`Actor`]. Machine and decoder state persist between
/// fragments, so a sequence may be split across reads at any byte
/// boundary.
///
/// A parser owns mutable decoder and machine state and serves exactly
/// one stream; for several streams, instantiate several parsers.
#[derive(Default)]
pub struct Parser {
    state: State,
    decoder: Decoder,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one fragment of the input stream.
    ///
    /// Every byte is consumed. Malformed input is substituted or
    /// dropped, with a debug log; nothing is ever reported back as an
    /// error.
    pub fn advance<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        for &byte in bytes {
            match self.decoder.decode(byte) {
                Outcome::Incomplete => {},
                Outcome::Success(cp) => self.process(cp, actor),
                Outcome::Invalid(replacement) => {
                    log::debug!(
                        "invalid utf-8 at byte {byte:#04x}, substituting U+FFFD"
                    );
                    self.process(replacement, actor);
                    // The byte that broke the sequence may itself start
                    // a fresh one; run it through the reset decoder.
                    if let Outcome::Success(cp) = self.decoder.decode(byte) {
                        self.process(cp, actor);
                    }
                },
            }
        }
    }

    fn process<A: Actor>(&mut self, cp: char, actor: &mut A) {
        // Most input is plain text; skip the table walk for it. This
        // also keeps code points at and above 0xA0 away from the
        // tables, which they cannot index.
        if self.state == State::Ground && classify::is_printable(cp) {
            actor.perform(ActionClass::Event, Action::Print, cp);
            return;
        }

        let target = tables::transition(self.state, cp);
        if target != State::Undefined {
            log::trace!(
                "{:?} -> {target:?} on U+{:04X}",
                self.state,
                cp as u32
            );
            actor.perform(
                ActionClass::Leave,
                tables::exit_action(self.state),
                cp,
            );
            actor.perform(
                ActionClass::Transition,
                tables::event(self.state, cp),
                cp,
            );
            self.state = target;
            actor.perform(ActionClass::Enter, tables::entry_action(target), cp);
            return;
        }

        match tables::event(self.state, cp) {
            Action::Undefined => log::debug!(
                "{:?}: no rule for U+{:04X}, dropping",
                self.state,
                cp as u32
            ),
            action => actor.perform(ActionClass::Event, action, cp),
        }
    }
}
