//! Site coordinator: owns navigation, layout, scrolling and gestures.

use heapless::Vec;
use log::{debug, info, warn};

use crate::{
    catalog::ProjectCatalog,
    gesture::{GestureDispatcher, GestureOutcome, NavIntent},
    input::{InputEvent, InputProvider},
    layout::{ResizeDebouncer, ResponsiveState, classify},
    navigation::NavigationState,
    render::{ArrowsView, NavLinkView, PageView, SiteView},
    route::{HOME_PATH, Route, parse_route},
    scroll::{ScrollCoordinator, ScrollSurface},
    sections::{MAX_SECTIONS, SectionRegistry},
    settings::SiteConfig,
    text_policy::section_progress_label,
    watch::{Subscriber, Watch},
};

/// Top-level link highlighted while a case study is open.
const CASES_LINK: &str = "casos";
const PROGRESS_LABEL_BYTES: usize = 12;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Page context currently shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    Home,
    Project { id: &'static str },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RouteOutcome {
    Home,
    Project { id: &'static str },
    /// The route was invalid; the home page is shown instead.
    Redirected,
}

pub struct SiteApp<IN, SF>
where
    IN: InputProvider,
    SF: ScrollSurface,
{
    input: IN,
    surface: SF,
    config: SiteConfig,
    catalog: ProjectCatalog,
    page: Page,
    nav: Watch<NavigationState>,
    responsive: Watch<ResponsiveState>,
    resize: ResizeDebouncer,
    scroll: ScrollCoordinator,
    gestures: GestureDispatcher,
    pending_layout: bool,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
