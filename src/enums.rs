/// Position of the parser in the escape sequence grammar.
///
/// The set of states and the transitions between them follow the DEC
/// compatible state diagram at <https://vt100.net/emu/dec_ansi_parser>.
/// Sequences interrupted by CAN, SUB or a fresh ESC are cancelled by the
/// anywhere rules rather than per-state handling; see
/// [`Parser`](crate::Parser) for the transition mechanics.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Steady state. Printable code points are emitted as
    /// [`Action::Print`] and C0 controls are executed immediately;
    /// introducer bytes switch into the sequence states below.
    #[default]
    Ground,

    /// Entered on ESC (0x1B). The next byte selects the sequence family:
    ///
    /// | Input | Next |
    /// |---|---|
    /// | `0x20..=0x2F` (intermediates) | [`State::EscapeIntermediate`] |
    /// | `[` | [`State::CsiEntry`] |
    /// | `]` | [`State::OscString`] |
    /// | `P` | [`State::DcsEntry`] |
    /// | `X`, `^`, `_` | [`State::SosPmApcString`] |
    /// | other finals in `0x30..=0x7E` | dispatch, back to [`State::Ground`] |
    ///
    /// Entering here cancels whatever sequence was in progress, which is
    /// why entry clears the collected sequence context
    /// ([`Action::Clear`]).
    Escape,

    /// Collecting intermediate bytes (`0x20..=0x2F`) of a plain escape
    /// sequence, e.g. the `(` of `ESC ( B`. A final in `0x30..=0x7E`
    /// dispatches and returns to ground.
    EscapeIntermediate,

    /// First character after a CSI introducer. Only here may the private
    /// markers `0x3C..=0x3F` appear; parameters continue in
    /// [`State::CsiParam`] and a final byte dispatches immediately
    /// (e.g. `ESC [ m`).
    CsiEntry,

    /// Collecting CSI parameter characters: digits and `;`. A private
    /// marker or `:` at this point makes the sequence malformed and
    /// moves to [`State::CsiIgnore`].
    CsiParam,

    /// Collecting CSI intermediates after the parameters, e.g. the space
    /// in `CSI Ps SP q`. Parameter characters are no longer valid here.
    CsiIntermediate,

    /// Consuming the remainder of a malformed control sequence. Exits on
    /// a final character, back to ground, without dispatching. C0
    /// controls still execute while ignoring.
    CsiIgnore,

    /// First character after a DCS introducer; mirrors
    /// [`State::CsiEntry`] except that a final character selects the
    /// passthrough handler instead of dispatching.
    DcsEntry,

    /// Collecting DCS parameter characters; mirrors [`State::CsiParam`]
    /// with [`State::DcsIgnore`] as the malformed sink.
    DcsParam,

    /// Collecting DCS intermediates; mirrors [`State::CsiIntermediate`].
    DcsIntermediate,

    /// Streaming the data part of a device control string to the handler
    /// hooked on entry. Every payload character arrives as
    /// [`Action::Put`]; leaving (via ST, CAN, SUB or ESC) emits
    /// [`Action::Unhook`] so the handler can finish.
    DcsPassthrough,

    /// Consuming a malformed device control string until ST.
    DcsIgnore,

    /// Collecting an operating system command. Entry emits
    /// [`Action::OscStart`], every string character
    /// [`Action::OscPut`], and leaving emits [`Action::OscEnd`].
    OscString,

    /// Consuming SOS, PM and APC strings. No function is assigned to
    /// these, so everything up to ST is discarded.
    SosPmApcString,

    /// Table-lookup miss marker. The machine never enters this state; as
    /// a transition target it means "no state change".
    Undefined,
}

/// What a single emission asks the consumer to do.
///
/// The set is closed: extending the grammar never introduces new
/// actions, so consumers can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Table-lookup miss marker; never emitted.
    Undefined,

    /// Nothing to do. Emitted for transitions with no payload so that
    /// the Leave/Transition/Enter framing stays uniform.
    Ignore,

    /// Display the current code point. Only emitted in ground state.
    Print,

    /// Execute a C0 or C1 control function (cursor motion, bell, shift
    /// states and the like).
    Execute,

    /// Forget collected private markers, intermediates and parameters.
    /// Fired on entry to the Escape, CsiEntry and DcsEntry states so a
    /// sequence restarted midway (`CSI 3 ; 1 CSI 2 J`) starts clean.
    Clear,

    /// Store the current private marker or intermediate character for
    /// the dispatch decision a later final character will trigger.
    Collect,

    /// Store a parameter character: a digit, or `;` separating two
    /// parameters.
    Param,

    /// A plain escape sequence is complete; the current code point is
    /// its final character.
    EscDispatch,

    /// A control sequence is complete; the current code point is its
    /// final character.
    CsiDispatch,

    /// The first part of a device control string is complete: select a
    /// handler from the collected context and the final character, then
    /// expect [`Action::Put`] data.
    Hook,

    /// One character of the device control string payload.
    Put,

    /// The device control string ended; tell the hooked handler.
    Unhook,

    /// An operating system command string begins.
    OscStart,

    /// One character of the operating system command string.
    OscPut,

    /// The operating system command string ended.
    OscEnd,
}

/// Why an action is being emitted.
///
/// The same [`Action`] can fire for different reasons, and consumers
/// sometimes care: `Clear` arrives as `Enter`, a final character's
/// dispatch as `Transition`, an in-state `Param` as `Event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionClass {
    /// The machine just entered a new state.
    Enter,
    /// The machine is staying in its current state.
    Event,
    /// The machine is about to leave its current state.
    Leave,
    /// The action attached to a state change, fired between Leave and
    /// Enter.
    Transition,
}
