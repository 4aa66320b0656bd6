//! Viewport classification and the scrolling strategy it selects.

use crate::timing::Debounce;

pub const DESKTOP_BREAKPOINT_PX: u32 = 992;
pub const TABLET_BREAKPOINT_PX: u32 = 768;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenSize {
    Desktop,
    Tablet,
    Mobile,
}

impl ScreenSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }
}

/// How a navigation action becomes visible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollStrategy {
    /// Sections side by side, one translated container.
    HorizontalPaged,
    /// Sections stacked, the page scrolls natively.
    VerticalNative,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResponsiveState {
    pub width_px: u32,
    pub size: ScreenSize,
    pub is_wide_layout: bool,
}

impl ResponsiveState {
    pub const fn strategy(&self) -> ScrollStrategy {
        if self.is_wide_layout {
            ScrollStrategy::HorizontalPaged
        } else {
            ScrollStrategy::VerticalNative
        }
    }
}

pub const fn classify(width_px: u32) -> ResponsiveState {
    let size = if width_px >= DESKTOP_BREAKPOINT_PX {
        ScreenSize::Desktop
    } else if width_px >= TABLET_BREAKPOINT_PX {
        ScreenSize::Tablet
    } else {
        ScreenSize::Mobile
    };

    ResponsiveState {
        width_px,
        size,
        is_wide_layout: width_px >= DESKTOP_BREAKPOINT_PX,
    }
}

/// Collapses a burst of resize notifications into one snapshot.
#[derive(Clone, Copy, Debug)]
pub struct ResizeDebouncer {
    pending: Debounce<u32>,
}

impl ResizeDebouncer {
    pub const fn new(settle_ms: u16) -> Self {
        Self {
            pending: Debounce::new(settle_ms as u64),
        }
    }

    pub fn observe(&mut self, width_px: u32, now_ms: u64) {
        self.pending.observe(width_px, now_ms);
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<ResponsiveState> {
        self.pending.poll(now_ms).map(classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_starts_at_desktop_breakpoint() {
        for width in [0, 320, 767, 768, 991, 992, 1440, 4096] {
            assert_eq!(classify(width).is_wide_layout, width >= 992, "width {width}");
        }
        assert_ne!(classify(991).size, classify(992).size);
        assert_eq!(classify(991).size, ScreenSize::Tablet);
        assert_eq!(classify(767).size, ScreenSize::Mobile);
        assert_eq!(classify(768).size, ScreenSize::Tablet);
    }

    #[test]
    fn strategy_follows_wide_flag() {
        assert_eq!(classify(1280).strategy(), ScrollStrategy::HorizontalPaged);
        assert_eq!(classify(800).strategy(), ScrollStrategy::VerticalNative);
    }

    #[test]
    fn resize_burst_publishes_last_width_after_settle() {
        let mut resize = ResizeDebouncer::new(250);
        resize.observe(1200, 0);
        resize.observe(700, 120);
        assert_eq!(resize.poll(300), None);
        let state = resize.poll(370).unwrap();
        assert_eq!(state.width_px, 700);
        assert_eq!(state.size, ScreenSize::Mobile);
        assert_eq!(resize.poll(1_000), None);
    }
}
