//! Turns navigation state into a visible scroll effect.
//!
//! Wide layouts translate one sections container by whole viewport widths.
//! Narrow layouts ask the surface to scroll the section element into view.
//! Paged moves hold a [`TransitionLock`] so transforms never overlap; requests
//! arriving while it is held collapse into a single pending move that is
//! applied once the lock releases.

use log::{debug, warn};

use crate::{
    layout::{ResponsiveState, ScrollStrategy},
    navigation::NavigationState,
    render::TransitionSpec,
};

/// Vertical extent of a rendered section, in page pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionBounds {
    pub top_px: i32,
    pub height_px: i32,
}

impl SectionBounds {
    pub const fn contains(&self, y_px: i32) -> bool {
        y_px >= self.top_px && y_px < self.top_px.saturating_add(self.height_px)
    }
}

/// Rendering collaborator that owns the actual elements.
///
/// Errors mean the target element is not rendered (yet); the coordinator
/// logs them and carries on.
pub trait ScrollSurface {
    type Error;

    /// Translate the sections container to `offset_vw` viewport widths.
    fn set_container_offset(&mut self, offset_vw: i32, animated: bool) -> Result<(), Self::Error>;

    /// Scroll the page so the section starts `top_offset_px` below the top edge.
    fn scroll_to_section(
        &mut self,
        section_id: &str,
        top_offset_px: u16,
        smooth: bool,
    ) -> Result<(), Self::Error>;

    /// Switch page overflow between paged and native scrolling.
    fn set_layout_mode(&mut self, strategy: ScrollStrategy) -> Result<(), Self::Error>;

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds>;
}

/// Fixed-duration guard around a paged transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionLock {
    duration_ms: u16,
    held_until_ms: Option<u64>,
}

impl TransitionLock {
    pub const fn new(duration_ms: u16) -> Self {
        Self {
            duration_ms,
            held_until_ms: None,
        }
    }

    pub const fn duration_ms(&self) -> u16 {
        self.duration_ms
    }

    pub fn is_held(&self, now_ms: u64) -> bool {
        self.held_until_ms.is_some_and(|until| now_ms < until)
    }

    pub fn acquire(&mut self, now_ms: u64) {
        self.held_until_ms = Some(now_ms.saturating_add(self.duration_ms as u64));
    }

    /// Idempotent; a stale release after a newer acquire is harmless.
    pub fn release(&mut self) {
        self.held_until_ms = None;
    }

    fn has_expired(&self, now_ms: u64) -> bool {
        self.held_until_ms.is_some_and(|until| now_ms >= until)
    }
}

/// What a call to [`ScrollCoordinator::apply`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollEffect {
    Paged { offset_vw: i32, animated: bool },
    /// A paged move is in flight; this target will follow it.
    Deferred { index: u16 },
    Native { section_id: &'static str, smooth: bool },
    /// The surface had nothing to move.
    Unavailable,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollCoordinator {
    lock: TransitionLock,
    header_offset_px: u16,
    pending_index: Option<u16>,
    applied_offset_vw: Option<i32>,
    transition: Option<TransitionSpec>,
}

pub const fn paged_offset_vw(index: u16) -> i32 {
    -(index as i32) * 100
}

impl ScrollCoordinator {
    pub const fn new(transition_ms: u16, header_offset_px: u16) -> Self {
        Self {
            lock: TransitionLock::new(transition_ms),
            header_offset_px,
            pending_index: None,
            applied_offset_vw: None,
            transition: None,
        }
    }

    pub fn is_transitioning(&self, now_ms: u64) -> bool {
        self.lock.is_held(now_ms)
    }

    pub fn applied_offset_vw(&self) -> Option<i32> {
        self.applied_offset_vw
    }

    pub fn pending_index(&self) -> Option<u16> {
        self.pending_index
    }

    pub fn transition(&self) -> Option<TransitionSpec> {
        self.transition
    }

    pub fn apply<S: ScrollSurface>(
        &mut self,
        surface: &mut S,
        nav: &NavigationState,
        responsive: &ResponsiveState,
        animated: bool,
        now_ms: u64,
    ) -> ScrollEffect {
        match responsive.strategy() {
            ScrollStrategy::HorizontalPaged => {
                let index = nav.current_index();
                if animated && self.lock.is_held(now_ms) {
                    debug!(
                        "scroll: transition in flight, deferring index={} (was {:?})",
                        index, self.pending_index
                    );
                    self.pending_index = Some(index);
                    return ScrollEffect::Deferred { index };
                }
                self.page_to(surface, index, animated, now_ms)
            }
            ScrollStrategy::VerticalNative => {
                self.pending_index = None;
                let section_id = nav.current_id();
                match surface.scroll_to_section(section_id, self.header_offset_px, animated) {
                    Ok(()) => {
                        debug!("scroll: native to section={} smooth={}", section_id, animated);
                        ScrollEffect::Native {
                            section_id,
                            smooth: animated,
                        }
                    }
                    Err(_) => {
                        warn!("scroll: section element {:?} not rendered", section_id);
                        ScrollEffect::Unavailable
                    }
                }
            }
        }
    }

    /// Re-align the surface after the layout strategy changed.
    pub fn apply_layout<S: ScrollSurface>(
        &mut self,
        surface: &mut S,
        nav: &NavigationState,
        responsive: &ResponsiveState,
        now_ms: u64,
    ) -> ScrollEffect {
        let strategy = responsive.strategy();
        if surface.set_layout_mode(strategy).is_err() {
            warn!("scroll: surface rejected layout mode {:?}", strategy);
        }

        self.lock.release();
        self.transition = None;
        self.pending_index = None;

        match strategy {
            ScrollStrategy::HorizontalPaged => {
                self.page_to(surface, nav.current_index(), false, now_ms)
            }
            ScrollStrategy::VerticalNative => {
                self.applied_offset_vw = None;
                ScrollEffect::Unavailable
            }
        }
    }

    /// Early release driven by the renderer's transition-end notification.
    pub fn finish_transition(&mut self) {
        if self.transition.is_some() {
            debug!("scroll: transition end reported");
        }
        self.lock.release();
        self.transition = None;
    }

    /// Release an expired lock and flush the pending move, if any.
    pub fn tick<S: ScrollSurface>(
        &mut self,
        surface: &mut S,
        nav: &NavigationState,
        responsive: &ResponsiveState,
        now_ms: u64,
    ) -> Option<ScrollEffect> {
        if self.lock.has_expired(now_ms) {
            self.lock.release();
            self.transition = None;
        }

        if self.lock.is_held(now_ms) {
            return None;
        }

        let pending = self.pending_index.take()?;
        if !responsive.is_wide_layout {
            return None;
        }

        let index = nav.current_index();
        if self.applied_offset_vw == Some(paged_offset_vw(index)) {
            debug!("scroll: pending index={} already on screen", pending);
            return None;
        }
        Some(self.page_to(surface, index, true, now_ms))
    }

    fn page_to<S: ScrollSurface>(
        &mut self,
        surface: &mut S,
        index: u16,
        animated: bool,
        now_ms: u64,
    ) -> ScrollEffect {
        let offset_vw = paged_offset_vw(index);
        if surface.set_container_offset(offset_vw, animated).is_err() {
            warn!("scroll: sections container not rendered, index={} skipped", index);
            return ScrollEffect::Unavailable;
        }

        let from_vw = self.applied_offset_vw.unwrap_or(offset_vw);
        self.applied_offset_vw = Some(offset_vw);
        self.pending_index = None;

        if animated {
            self.lock.acquire(now_ms);
            self.transition = Some(TransitionSpec::new(
                from_vw,
                offset_vw,
                now_ms,
                self.lock.duration_ms(),
            ));
        } else {
            self.lock.release();
            self.transition = None;
        }

        debug!(
            "scroll: paged index={} offset={}vw animated={}",
            index, offset_vw, animated
        );
        ScrollEffect::Paged {
            offset_vw,
            animated,
        }
    }
}
