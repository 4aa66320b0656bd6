use std::{path::PathBuf, sync::mpsc::Sender};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use folio_core::{
    app::{RouteOutcome, SiteApp, TickResult},
    input::InputEvent,
    render::PageView,
    settings::SiteConfig,
};
use log::{LevelFilter, debug, info, warn};

use channel_input::ChannelInput;
use script::{Action, Dispatch, Script};
use surface::ConsoleSurface;

#[path = "main/channel_input.rs"]
mod channel_input;
#[path = "main/initial_catalog.rs"]
mod initial_catalog;
#[path = "main/script.rs"]
mod script;
#[path = "main/surface.rs"]
mod surface;

/// One animation frame at 60 Hz.
const FRAME_MS: u64 = 16;
const SECTION_HEIGHT_PX: i32 = 900;

/// Replays a browsing session against the portfolio navigation core.
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
struct Args {
    /// JSON session script; the built-in tour runs when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Initial viewport width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Initial route, e.g. `/home#casos` or `/project/proyecto-1`.
    #[arg(long)]
    route: Option<String>,

    #[arg(long, default_value_t = 50)]
    wheel_threshold: u16,

    #[arg(long, default_value_t = 50)]
    touch_threshold: u16,

    /// Paged transition length; should match the renderer's CSS transition.
    #[arg(long, default_value_t = 800)]
    transition_ms: u16,

    #[arg(long, default_value_t = 80)]
    header_offset: u16,

    /// Keep simulating after the last step until transitions settle.
    #[arg(long, default_value_t = 1_000)]
    settle_ms: u64,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio", LevelFilter::Info)
        .filter_module("folio_core", LevelFilter::Debug)
        .init();
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::demo(),
    };

    let config = SiteConfig::default()
        .with_wheel_threshold(args.wheel_threshold)
        .with_touch_threshold(args.touch_threshold)
        .with_transition_ms(args.transition_ms)
        .with_gesture_throttle_ms(args.transition_ms)
        .with_header_offset_px(args.header_offset);
    let width_px = args.width.or(script.width_px).unwrap_or(1280);
    let route = args
        .route
        .clone()
        .or_else(|| script.route.clone())
        .unwrap_or_else(|| "/home".to_owned());

    let catalog = initial_catalog::load_initial_catalog().context("loading project catalog")?;
    let (events, input) = ChannelInput::new();
    let surface = ConsoleSurface::new(SECTION_HEIGHT_PX);
    let mut app = SiteApp::new(input, surface, catalog, config, width_px);

    let outcome = app.open_route(&route, 0);
    report_route(&route, outcome);

    let mut now_ms = 0u64;
    let mut frames = 0u32;
    for step in script.steps {
        while now_ms < step.at_ms {
            frames += render_frame(&mut app, now_ms);
            now_ms = (now_ms + FRAME_MS).min(step.at_ms);
        }
        run_action(&mut app, &events, step.action, now_ms)?;
    }

    let end_ms = now_ms.saturating_add(args.settle_ms);
    while now_ms <= end_ms {
        frames += render_frame(&mut app, now_ms);
        now_ms += FRAME_MS;
    }

    let nav = app.navigation();
    info!(
        "done: page={:?} section={} offset={}vw scroll_y={} frames={}",
        app.page(),
        nav.current_id(),
        app.surface().offset_vw(),
        app.surface().scroll_y(),
        frames
    );
    Ok(())
}

fn run_action(
    app: &mut SiteApp<ChannelInput, ConsoleSurface>,
    events: &Sender<InputEvent>,
    action: Action,
    now_ms: u64,
) -> Result<()> {
    match action.dispatch() {
        Dispatch::Events(batch) => {
            for event in batch {
                events.send(event).context("input channel closed")?;
            }
        }
        Dispatch::Direct(Action::Link { section }) => {
            if !app.navigate_to_section(&section, now_ms) {
                info!("link: #{} left navigation unchanged", section);
            }
        }
        Dispatch::Direct(Action::NextArrow) => {
            let _ = app.navigate_next(now_ms);
        }
        Dispatch::Direct(Action::PreviousArrow) => {
            let _ = app.navigate_previous(now_ms);
        }
        Dispatch::Direct(Action::Route { url }) => {
            let outcome = app.open_route(&url, now_ms);
            report_route(&url, outcome);
        }
        Dispatch::Direct(Action::NextProject) => match app.next_project(now_ms) {
            Some(id) => info!("project: next -> {}", id),
            None => warn!("project: next requested outside a project page"),
        },
        Dispatch::Direct(Action::PreviousProject) => match app.previous_project(now_ms) {
            Some(id) => info!("project: previous -> {}", id),
            None => warn!("project: previous requested outside a project page"),
        },
        Dispatch::Direct(other) => warn!("script: {:?} is not a direct action", other),
    }
    Ok(())
}

/// Returns 1 when a frame was drawn.
fn render_frame(app: &mut SiteApp<ChannelInput, ConsoleSurface>, now_ms: u64) -> u32 {
    if app.tick(now_ms) == TickResult::NoRender {
        return 0;
    }

    app.with_view(now_ms, |view| {
        let title = match view.page {
            PageView::Home => "home",
            PageView::Project { project, .. } => project.title,
        };
        match view.transition {
            Some(frame) => debug!(
                "frame t={} {} [{}] link={} {}% offset={}vw",
                now_ms,
                title,
                view.progress_label,
                view.active_link,
                frame.progress_pct,
                frame.offset_vw()
            ),
            None => info!(
                "frame t={} {} [{}] link={} size={} arrows={}",
                now_ms,
                title,
                view.progress_label,
                view.active_link,
                view.size.as_str(),
                if view.arrows.visible { "shown" } else { "hidden" }
            ),
        }
    });
    1
}

fn report_route(url: &str, outcome: RouteOutcome) {
    match outcome {
        RouteOutcome::Home => info!("route: {} -> home", url),
        RouteOutcome::Project { id } => info!("route: {} -> project {}", url, id),
        RouteOutcome::Redirected => warn!("route: {} redirected to home", url),
    }
}
