//! Line-oriented command protocol.
//!
//! One command per line, matched case-insensitively against a fixed
//! vocabulary. Unknown tokens are ignored by policy, not reported. The
//! `focuser` command needs a second line carrying the step count, so the
//! dispatcher is a two-state machine rather than an inline blocking read:
//! its state is inspectable and the nested prompt testable without real
//! I/O.

/// The fixed command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Camera,
    Focuser,
    IrLamp,
    Status,
    Temperatures,
    ScanI2c,
    Backlight,
}

const VOCABULARY: &[(&str, Command)] = &[
    ("camera", Command::Camera),
    ("focuser", Command::Focuser),
    ("irlamp", Command::IrLamp),
    ("status", Command::Status),
    ("temperatures", Command::Temperatures),
    ("scani2c", Command::ScanI2c),
    ("backlight", Command::Backlight),
    ("display", Command::Backlight),
];

impl Command {
    /// Case-insensitive exact-token match; surrounding whitespace is
    /// ignored. Returns `None` for anything outside the vocabulary.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        VOCABULARY
            .iter()
            .find(|(name, _)| token.eq_ignore_ascii_case(name))
            .map(|&(_, command)| command)
    }
}

/// Dispatcher position in the line protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    AwaitingCommand,
    AwaitingFocuserSteps,
}

/// What the agent should do with the line just fed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    ToggleCamera,
    ToggleLamp,
    ToggleBacklight,
    /// Emit the step-count prompt and wait for the next line.
    PromptFocuserSteps,
    MoveFocuser(i32),
    Status,
    Temperatures,
    ScanBus,
    /// Unknown token; by policy nothing is reported back.
    Ignored,
}

#[derive(Debug, Default)]
pub struct CommandDispatcher {
    state: DispatchState,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Consume one input line and produce the request it maps to.
    pub fn feed_line(&mut self, line: &str) -> Request {
        match self.state {
            DispatchState::AwaitingFocuserSteps => {
                self.state = DispatchState::AwaitingCommand;
                Request::MoveFocuser(parse_step_count(line))
            }
            DispatchState::AwaitingCommand => match Command::parse(line) {
                Some(Command::Camera) => Request::ToggleCamera,
                Some(Command::IrLamp) => Request::ToggleLamp,
                Some(Command::Backlight) => Request::ToggleBacklight,
                Some(Command::Focuser) => {
                    self.state = DispatchState::AwaitingFocuserSteps;
                    Request::PromptFocuserSteps
                }
                Some(Command::Status) => Request::Status,
                Some(Command::Temperatures) => Request::Temperatures,
                Some(Command::ScanI2c) => Request::ScanBus,
                None => Request::Ignored,
            },
        }
    }
}

// A non-numeric count parses to 0, matching the bench firmware this
// protocol came from; the zero-step move still runs and releases the
// coils.
fn parse_step_count(line: &str) -> i32 {
    line.trim().parse().unwrap_or(0)
}
