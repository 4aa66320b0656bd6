//! Raw input to navigation intent.
//!
//! Wheel, keyboard and touch only act in the wide (paged) layout and are
//! dropped while a transition is in flight. In the narrow layout the only
//! consumer is the scroll spy, which highlights the section under the probe
//! line without moving anything.

use log::debug;

use crate::{
    input::{InputEvent, Key},
    layout::ResponsiveState,
    navigation::NavigationState,
    scroll::ScrollSurface,
    sections::RegistryKind,
    settings::SiteConfig,
    timing::{LatestThrottle, Throttle},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavIntent {
    Next,
    Previous,
    First,
    Last,
    JumpTo(u16),
    /// Highlight only; the page is already where the user scrolled it.
    Highlight(&'static str),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GestureOutcome {
    pub intent: Option<NavIntent>,
    /// The host should cancel the browser's default handling.
    pub prevent_default: bool,
}

impl GestureOutcome {
    pub const IGNORED: Self = Self {
        intent: None,
        prevent_default: false,
    };

    pub const SWALLOWED: Self = Self {
        intent: None,
        prevent_default: true,
    };

    pub const fn navigate(intent: NavIntent, prevent_default: bool) -> Self {
        Self {
            intent: Some(intent),
            prevent_default,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GestureDispatcher {
    wheel_threshold: i32,
    touch_threshold: i32,
    spy_probe_px: i32,
    throttle: Throttle,
    touch_start: Option<(i32, i32)>,
    scroll_spy: LatestThrottle<i32>,
}

impl GestureDispatcher {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            wheel_threshold: config.wheel_threshold as i32,
            touch_threshold: config.touch_threshold as i32,
            spy_probe_px: config.scroll_spy_probe_px as i32,
            throttle: Throttle::new(config.gesture_throttle_ms as u64),
            touch_start: None,
            scroll_spy: LatestThrottle::new(config.scroll_spy_throttle_ms as u64),
        }
    }

    pub fn dispatch<S: ScrollSurface>(
        &mut self,
        event: InputEvent,
        nav: &NavigationState,
        responsive: &ResponsiveState,
        surface: &S,
        transitioning: bool,
        now_ms: u64,
    ) -> GestureOutcome {
        if let InputEvent::Scroll { scroll_y } = event {
            if responsive.is_wide_layout {
                return GestureOutcome::IGNORED;
            }
            return match self.scroll_spy.offer(scroll_y, now_ms) {
                Some(scroll_y) => self.spy(scroll_y, nav, surface),
                None => GestureOutcome::IGNORED,
            };
        }

        if !responsive.is_wide_layout {
            self.touch_start = None;
            return GestureOutcome::IGNORED;
        }

        match event {
            InputEvent::Wheel { delta_x, delta_y } => {
                self.on_wheel(delta_x, delta_y, transitioning, now_ms)
            }
            InputEvent::Key(key) => self.on_key(key, nav, transitioning),
            InputEvent::TouchStart { x, y } => {
                self.touch_start = Some((x, y));
                GestureOutcome::IGNORED
            }
            InputEvent::TouchEnd { x, y } => self.on_touch_end(x, y, transitioning, now_ms),
            InputEvent::Scroll { .. } | InputEvent::Resize { .. } | InputEvent::TransitionEnd => {
                GestureOutcome::IGNORED
            }
        }
    }

    /// Deliver a scroll position held back by the spy throttle.
    pub fn tick<S: ScrollSurface>(
        &mut self,
        nav: &NavigationState,
        responsive: &ResponsiveState,
        surface: &S,
        now_ms: u64,
    ) -> Option<NavIntent> {
        let scroll_y = self.scroll_spy.poll(now_ms)?;
        if responsive.is_wide_layout {
            return None;
        }
        self.spy(scroll_y, nav, surface).intent
    }

    /// Forget half-finished gestures, e.g. after a page context change.
    pub fn reset(&mut self) {
        self.touch_start = None;
        self.scroll_spy.clear();
    }

    fn on_wheel(
        &mut self,
        delta_x: i32,
        delta_y: i32,
        transitioning: bool,
        now_ms: u64,
    ) -> GestureOutcome {
        let delta = if delta_y.unsigned_abs() >= delta_x.unsigned_abs() {
            delta_y
        } else {
            delta_x
        };

        if delta.unsigned_abs() <= self.wheel_threshold.unsigned_abs() {
            return GestureOutcome::SWALLOWED;
        }
        if transitioning || !self.throttle.try_fire(now_ms) {
            debug!("gesture: wheel delta={} dropped (throttled)", delta);
            return GestureOutcome::SWALLOWED;
        }

        let intent = if delta > 0 {
            NavIntent::Next
        } else {
            NavIntent::Previous
        };
        GestureOutcome::navigate(intent, true)
    }

    fn on_key(&mut self, key: Key, nav: &NavigationState, transitioning: bool) -> GestureOutcome {
        let intent = match key {
            Key::ArrowRight | Key::ArrowDown | Key::Space => NavIntent::Next,
            Key::ArrowLeft | Key::ArrowUp => NavIntent::Previous,
            Key::Home => NavIntent::First,
            Key::End => NavIntent::Last,
            Key::Digit(digit) => {
                let total = nav.registry().len();
                let home = nav.registry().kind() == RegistryKind::Home;
                if !home || digit == 0 || digit as u16 > total {
                    return GestureOutcome::IGNORED;
                }
                NavIntent::JumpTo(digit as u16 - 1)
            }
            Key::PageUp | Key::PageDown => return GestureOutcome::SWALLOWED,
            Key::Other => return GestureOutcome::IGNORED,
        };

        if transitioning {
            debug!("gesture: key {:?} dropped during transition", key);
            return GestureOutcome::SWALLOWED;
        }
        GestureOutcome::navigate(intent, true)
    }

    fn on_touch_end(&mut self, x: i32, y: i32, transitioning: bool, now_ms: u64) -> GestureOutcome {
        let Some((start_x, start_y)) = self.touch_start.take() else {
            return GestureOutcome::IGNORED;
        };

        // Positive difference means the finger travelled left or up: forward.
        let diff_x = start_x.saturating_sub(x);
        let diff_y = start_y.saturating_sub(y);
        let (abs_x, abs_y) = (diff_x.unsigned_abs(), diff_y.unsigned_abs());
        let threshold = self.touch_threshold.unsigned_abs();

        let diff = if abs_x > abs_y && abs_x > threshold {
            diff_x
        } else if abs_y > abs_x && abs_y > threshold {
            diff_y
        } else {
            return GestureOutcome::IGNORED;
        };

        if transitioning || !self.throttle.try_fire(now_ms) {
            debug!("gesture: swipe diff={} dropped (throttled)", diff);
            return GestureOutcome::IGNORED;
        }

        let intent = if diff > 0 {
            NavIntent::Next
        } else {
            NavIntent::Previous
        };
        GestureOutcome::navigate(intent, false)
    }

    fn spy<S: ScrollSurface>(
        &self,
        scroll_y: i32,
        nav: &NavigationState,
        surface: &S,
    ) -> GestureOutcome {
        let probe = scroll_y.saturating_add(self.spy_probe_px);
        let registry = nav.registry();
        let mut active = registry.id_at(0).unwrap_or_default();

        for section in registry.sections() {
            if surface
                .section_bounds(section.id)
                .is_some_and(|bounds| bounds.contains(probe))
            {
                active = section.id;
            }
        }

        GestureOutcome::navigate(NavIntent::Highlight(active), false)
    }
}
