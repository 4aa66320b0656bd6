//! App-level view models and transition metadata.

use crate::{
    catalog::ProjectRecord,
    layout::{ScreenSize, ScrollStrategy},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionFrame {
    pub from_vw: i32,
    pub to_vw: i32,
    /// 0..=100
    pub progress_pct: u8,
}

impl TransitionFrame {
    /// Linear interpolation; easing is left to the renderer.
    pub fn offset_vw(&self) -> i32 {
        let span = self.to_vw - self.from_vw;
        self.from_vw + span * self.progress_pct as i32 / 100
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionSpec {
    pub from_vw: i32,
    pub to_vw: i32,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl TransitionSpec {
    pub const fn new(from_vw: i32, to_vw: i32, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            from_vw,
            to_vw,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<TransitionFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(TransitionFrame {
            from_vw: self.from_vw,
            to_vw: self.to_vw,
            progress_pct: progress,
        })
    }
}

/// One entry of the sidebar / top bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavLinkView {
    pub section_id: &'static str,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArrowsView {
    /// Arrows only exist in the paged layout.
    pub visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum PageView<'a> {
    Home,
    Project {
        project: &'a ProjectRecord,
        previous: Option<&'a ProjectRecord>,
        next: Option<&'a ProjectRecord>,
    },
}

/// View model consumed by the outer renderer.
#[derive(Clone, Copy, Debug)]
pub struct SiteView<'a> {
    pub page: PageView<'a>,
    /// In-page section links of the current context.
    pub sections: &'a [NavLinkView],
    /// Top-level site link to highlight (`casos` on project pages).
    pub active_link: &'static str,
    pub current_index: u16,
    pub section_total: u16,
    /// One-based `"current/total"`, e.g. `"2/5"`.
    pub progress_label: &'a str,
    pub arrows: ArrowsView,
    pub size: ScreenSize,
    pub strategy: ScrollStrategy,
    pub transition: Option<TransitionFrame>,
}
