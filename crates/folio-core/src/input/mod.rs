//! Input abstraction layer.

pub mod mock;

/// Keys the navigation layer reacts to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    Space,
    Home,
    End,
    PageUp,
    PageDown,
    /// Digit row key, `0..=9`.
    Digit(u8),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowRight" => Self::ArrowRight,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowUp" => Self::ArrowUp,
            " " | "Spacebar" => Self::Space,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            _ => match key.as_bytes() {
                [digit @ b'0'..=b'9'] => Self::Digit(digit - b'0'),
                _ => Self::Other,
            },
        }
    }
}

/// Raw events delivered by the hosting environment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Wheel { delta_x: i32, delta_y: i32 },
    Key(Key),
    TouchStart { x: i32, y: i32 },
    TouchEnd { x: i32, y: i32 },
    /// Native page scroll position changed.
    Scroll { scroll_y: i32 },
    Resize { width_px: u32 },
    /// The renderer finished the container transform transition.
    TransitionEnd,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
