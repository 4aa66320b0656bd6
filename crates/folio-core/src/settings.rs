//! Tunables shared by the gesture, scroll and layout layers.

/// Fixed header height reserved above a section in native scrolling mode.
pub const DEFAULT_HEADER_OFFSET_PX: u16 = 80;
/// Matches the CSS transform transition of the sections container.
pub const DEFAULT_TRANSITION_MS: u16 = 800;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SiteConfig {
    /// Minimum absolute wheel delta that counts as an intentional step.
    pub wheel_threshold: u16,
    /// Minimum swipe distance on the dominant axis.
    pub touch_threshold: u16,
    /// How long the transition lock is held after a paged move.
    pub transition_ms: u16,
    /// Window in which at most one gesture turns into a navigation.
    pub gesture_throttle_ms: u16,
    pub resize_debounce_ms: u16,
    pub scroll_spy_throttle_ms: u16,
    /// Probe line below the top of the viewport used by the scroll spy.
    pub scroll_spy_probe_px: u16,
    pub header_offset_px: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 50,
            touch_threshold: 50,
            transition_ms: DEFAULT_TRANSITION_MS,
            gesture_throttle_ms: DEFAULT_TRANSITION_MS,
            resize_debounce_ms: 250,
            scroll_spy_throttle_ms: 100,
            scroll_spy_probe_px: 100,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
        }
    }
}

impl SiteConfig {
    pub const fn with_wheel_threshold(mut self, wheel_threshold: u16) -> Self {
        self.wheel_threshold = wheel_threshold;
        self
    }

    pub const fn with_touch_threshold(mut self, touch_threshold: u16) -> Self {
        self.touch_threshold = touch_threshold;
        self
    }

    pub const fn with_transition_ms(mut self, transition_ms: u16) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub const fn with_gesture_throttle_ms(mut self, gesture_throttle_ms: u16) -> Self {
        self.gesture_throttle_ms = gesture_throttle_ms;
        self
    }

    pub const fn with_resize_debounce_ms(mut self, resize_debounce_ms: u16) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;
        self
    }

    pub const fn with_scroll_spy_throttle_ms(mut self, scroll_spy_throttle_ms: u16) -> Self {
        self.scroll_spy_throttle_ms = scroll_spy_throttle_ms;
        self
    }

    pub const fn with_scroll_spy_probe_px(mut self, scroll_spy_probe_px: u16) -> Self {
        self.scroll_spy_probe_px = scroll_spy_probe_px;
        self
    }

    pub const fn with_header_offset_px(mut self, header_offset_px: u16) -> Self {
        self.header_offset_px = header_offset_px;
        self
    }

    /// Clamp values so that wheel spam can never outrun the transition lock.
    pub fn sanitized(mut self) -> Self {
        self.transition_ms = self.transition_ms.max(1);
        self.gesture_throttle_ms = self.gesture_throttle_ms.max(self.transition_ms);
        self.scroll_spy_throttle_ms = self.scroll_spy_throttle_ms.max(1);
        self
    }
}
