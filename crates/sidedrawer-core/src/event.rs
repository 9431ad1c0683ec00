//! Input delivered to [`Drawer::handle`](crate::Drawer::handle).

use crate::scheduler::TaskHandle;

/// Keyboard keys the drawer reacts to, decoded from legacy key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Other(u32),
}

impl Key {
    pub const TAB_CODE: u32 = 9;
    pub const ESCAPE_CODE: u32 = 27;

    pub fn from_code(code: u32) -> Self {
        match code {
            Self::TAB_CODE => Key::Tab,
            Self::ESCAPE_CODE => Key::Escape,
            other => Key::Other(other),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Key::Tab => Self::TAB_CODE,
            Key::Escape => Self::ESCAPE_CODE,
            Key::Other(code) => code,
        }
    }
}

impl From<u32> for Key {
    fn from(code: u32) -> Self {
        Key::from_code(code)
    }
}

/// A key press with the one modifier the focus trap cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }

    pub fn tab() -> Self {
        Self::new(Key::Tab, false)
    }

    pub fn shift_tab() -> Self {
        Self::new(Key::Tab, true)
    }
}

/// Event types the backdrop listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropEventKind {
    Click,
    TouchStart,
    KeyUp(Key),
}

/// Everything a host forwards to the drawer.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent<N> {
    /// The trigger button was activated.
    TriggerClick,
    /// An event reached the backdrop; `target` is the event's original target.
    Backdrop { kind: BackdropEventKind, target: N },
    /// A key went down inside the panel.
    KeyDown { target: N, key: KeyPress },
    /// The viewport was resized.
    Resize,
    /// Window-level touch input, using the first touch's page Y.
    TouchStart { y: f64 },
    TouchMove { y: f64 },
    TouchEnd,
    /// The body finished a CSS transition.
    TransitionEnd,
    /// A frame requested through the scheduler fired.
    Frame(TaskHandle),
    /// An interval tick or timeout requested through the scheduler fired.
    Timer(TaskHandle),
}

/// What the host should do with the native event after handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub prevent_default: bool,
}

impl EventOutcome {
    pub const IGNORED: EventOutcome = EventOutcome {
        prevent_default: false,
    };

    pub const CONSUMED: EventOutcome = EventOutcome {
        prevent_default: true,
    };
}
