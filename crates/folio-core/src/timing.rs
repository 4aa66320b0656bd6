//! Deadline-based throttle and debounce helpers.
//!
//! Nothing here owns a timer. Callers pass the current time in and poll again
//! on their next tick, which keeps every deferred callback on the same logical
//! thread as the event that scheduled it.

/// Leading-edge throttle: the first call in a window fires, the rest are dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Throttle {
    window_ms: u64,
    reopens_at_ms: Option<u64>,
}

impl Throttle {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            reopens_at_ms: None,
        }
    }

    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn is_closed(&self, now_ms: u64) -> bool {
        self.reopens_at_ms.is_some_and(|reopens| now_ms < reopens)
    }

    /// Returns `true` when the caller may act now, and closes the window.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        if self.is_closed(now_ms) {
            return false;
        }
        self.reopens_at_ms = Some(now_ms.saturating_add(self.window_ms));
        true
    }

    pub fn reset(&mut self) {
        self.reopens_at_ms = None;
    }
}

/// Throttle that also delivers the most recent dropped value once the window
/// reopens, so the last observation in a burst is never lost.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LatestThrottle<T> {
    throttle: Throttle,
    pending: Option<T>,
}

impl<T> LatestThrottle<T> {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            throttle: Throttle::new(window_ms),
            pending: None,
        }
    }

    pub fn offer(&mut self, value: T, now_ms: u64) -> Option<T> {
        if self.throttle.try_fire(now_ms) {
            self.pending = None;
            return Some(value);
        }
        self.pending = Some(value);
        None
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.pending.is_none() || self.throttle.is_closed(now_ms) {
            return None;
        }
        self.throttle.try_fire(now_ms);
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.throttle.reset();
    }
}

/// Trailing debounce: only the last value of a burst survives, and only once
/// the burst has been quiet for `settle_ms`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Debounce<T> {
    settle_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debounce<T> {
    pub const fn new(settle_ms: u64) -> Self {
        Self {
            settle_ms,
            pending: None,
        }
    }

    pub fn observe(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.settle_ms)));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((_, due_ms)) if now_ms >= due_ms => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_drops_inside_window() {
        let mut throttle = Throttle::new(800);
        assert!(throttle.try_fire(0));
        assert!(!throttle.try_fire(10));
        assert!(!throttle.try_fire(799));
        assert!(throttle.try_fire(800));
    }

    #[test]
    fn latest_throttle_delivers_trailing_value() {
        let mut throttle = LatestThrottle::new(100);
        assert_eq!(throttle.offer(1, 0), Some(1));
        assert_eq!(throttle.offer(2, 20), None);
        assert_eq!(throttle.offer(3, 40), None);
        assert_eq!(throttle.poll(90), None);
        assert_eq!(throttle.poll(100), Some(3));
        assert_eq!(throttle.poll(300), None);
    }

    #[test]
    fn debounce_keeps_only_last_value() {
        let mut debounce = Debounce::new(250);
        debounce.observe(1200, 0);
        debounce.observe(900, 100);
        debounce.observe(700, 200);
        assert_eq!(debounce.poll(400), None);
        assert_eq!(debounce.poll(450), Some(700));
        assert!(!debounce.is_pending());
    }
}
