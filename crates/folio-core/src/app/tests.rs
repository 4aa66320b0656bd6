use super::*;
use crate::{
    catalog::ProjectRecord,
    input::{
        Key,
        mock::{MockInput, ScriptedInput},
    },
    layout::ScrollStrategy,
    render::PageView,
    scroll::tests::RecordingSurface,
    sections::RegistryKind,
};

const PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord::new("atlas", "Atlas", 2),
    ProjectRecord::new("ledger", "Ledger", 1),
    ProjectRecord::new("pulse", "Pulse", 3),
];

fn catalog() -> ProjectCatalog {
    ProjectCatalog::from_records(&PROJECTS).unwrap()
}

fn site<IN: InputProvider>(input: IN, width_px: u32) -> SiteApp<IN, RecordingSurface> {
    let surface = RecordingSurface {
        section_height_px: 500,
        ..RecordingSurface::default()
    };
    let mut app = SiteApp::new(input, surface, catalog(), SiteConfig::default(), width_px);
    let _ = app.tick(0);
    app
}

const WHEEL_FORWARD: InputEvent = InputEvent::Wheel {
    delta_x: 0,
    delta_y: 120,
};

#[test]
fn first_tick_enters_paged_mode_at_origin() {
    let app = site(MockInput::new(), 1280);

    assert_eq!(app.surface().modes, [ScrollStrategy::HorizontalPaged]);
    assert_eq!(app.surface().offsets, [(0, false)]);
    assert_eq!(app.navigation().current_id(), "inicio");
    assert_eq!(app.page(), Page::Home);
}

#[test]
fn wheel_burst_produces_one_transition() {
    let mut app = site(MockInput::new(), 1280);

    let first = app.handle_event(WHEEL_FORWARD, 1_000);
    let second = app.handle_event(WHEEL_FORWARD, 1_010);

    assert_eq!(first.intent, Some(NavIntent::Next));
    assert!(first.prevent_default);
    assert_eq!(second.intent, None);
    assert!(second.prevent_default);
    assert_eq!(app.navigation().current_index(), 1);
    assert_eq!(app.surface().offsets, [(0, false), (-100, true)]);
}

#[test]
fn second_section_forward_lands_on_minus_two_hundred() {
    let mut app = site(MockInput::new(), 1280);

    let _ = app.handle_event(WHEEL_FORWARD, 1_000);
    let _ = app.tick(1_800);
    let _ = app.handle_event(WHEEL_FORWARD, 2_000);

    assert_eq!(app.navigation().current_id(), "acerca");
    assert_eq!(app.surface().offsets.last(), Some(&(-200, true)));
}

#[test]
fn small_wheel_deltas_are_swallowed_without_navigating() {
    let mut app = site(MockInput::new(), 1280);

    let outcome = app.handle_event(
        InputEvent::Wheel {
            delta_x: 0,
            delta_y: 50,
        },
        1_000,
    );

    assert_eq!(outcome, GestureOutcome::SWALLOWED);
    assert_eq!(app.navigation().current_index(), 0);
}

#[test]
fn keys_during_transition_are_dropped() {
    let events = [
        InputEvent::Key(Key::ArrowRight),
        InputEvent::Key(Key::PageDown),
        InputEvent::Key(Key::End),
    ];
    let mut app = site(ScriptedInput::new(&events), 1280);

    assert_eq!(app.tick(1_000), TickResult::RenderRequested);
    assert_eq!(app.navigation().current_id(), "casos");
    assert_eq!(app.surface().offsets, [(0, false), (-100, true)]);
}

#[test]
fn direct_navigation_during_lock_coalesces_to_latest() {
    let mut app = site(MockInput::new(), 1280);

    assert!(app.navigate_next(0));
    assert!(app.navigate_next(100));
    assert!(app.navigate_next(200));

    assert_eq!(app.navigation().current_id(), "contacto");
    assert_eq!(app.surface().offsets, [(0, false), (-100, true)]);

    let _ = app.tick(500);
    assert_eq!(app.surface().offsets.len(), 2);

    assert_eq!(app.tick(800), TickResult::RenderRequested);
    assert_eq!(app.surface().offsets, [(0, false), (-100, true), (-300, true)]);
}

#[test]
fn transition_end_unlocks_before_timer() {
    let mut app = site(MockInput::new(), 1280);

    assert!(app.navigate_next(0));
    assert!(app.is_transitioning(100));
    let _ = app.handle_event(InputEvent::TransitionEnd, 100);
    assert!(!app.is_transitioning(100));

    let outcome = app.handle_event(InputEvent::Key(Key::ArrowRight), 200);
    assert_eq!(outcome.intent, Some(NavIntent::Next));
    assert_eq!(app.navigation().current_index(), 2);
}

#[test]
fn arrows_stop_at_registry_edges() {
    let mut app = site(MockInput::new(), 1280);

    assert!(!app.navigate_previous(0));
    let _ = app.handle_event(InputEvent::Key(Key::End), 0);
    assert_eq!(app.navigation().current_id(), "traduccion");
    assert!(!app.navigate_next(5_000));
    assert_eq!(app.navigation().current_index(), 4);
}

#[test]
fn nav_link_to_unknown_section_is_ignored() {
    let mut app = site(MockInput::new(), 1280);

    assert!(!app.navigate_to_section("proceso", 0));
    assert!(app.navigate_to_section("acerca", 0));
    assert_eq!(app.surface().offsets.last(), Some(&(-200, true)));
}

#[test]
fn replace_registry_keeps_section_and_snaps() {
    let mut app = site(MockInput::new(), 1280);
    assert!(app.navigate_to_section("acerca", 0));
    let _ = app.tick(800);

    app.replace_registry(SectionRegistry::home(), 1_000);

    assert_eq!(app.navigation().current_id(), "acerca");
    assert_eq!(app.navigation().current_index(), 2);
    assert_eq!(app.surface().offsets.last(), Some(&(-200, false)));
    assert!(!app.is_transitioning(1_000));
}

#[test]
fn keys_navigate_right_after_a_snap() {
    let mut app = site(MockInput::new(), 1280);

    assert!(app.navigate_next(0));
    assert!(app.is_transitioning(100));
    app.replace_registry(SectionRegistry::home(), 100);
    assert!(!app.is_transitioning(100));

    let outcome = app.handle_event(InputEvent::Key(Key::ArrowRight), 200);
    assert_eq!(outcome.intent, Some(NavIntent::Next));
    assert_eq!(app.navigation().current_id(), "acerca");
    assert_eq!(app.surface().offsets.last(), Some(&(-200, true)));
}

#[test]
fn unknown_project_route_redirects_home() {
    let mut app = site(MockInput::new(), 1280);

    assert_eq!(app.open_route("/project/missing", 0), RouteOutcome::Redirected);
    assert_eq!(app.page(), Page::Home);
    assert_eq!(app.navigation().registry().kind(), RegistryKind::Home);

    assert_eq!(app.open_route("/project", 0), RouteOutcome::Redirected);
    assert_eq!(app.open_route("/somewhere/else", 0), RouteOutcome::Redirected);
    assert_eq!(app.page(), Page::Home);
}

#[test]
fn project_route_uses_case_study_sections() {
    let mut app = site(MockInput::new(), 1280);

    assert_eq!(
        app.open_route("/project/atlas#proceso", 0),
        RouteOutcome::Project { id: "atlas" }
    );
    assert_eq!(app.page(), Page::Project { id: "atlas" });
    assert_eq!(app.navigation().current_id(), "proceso");
    assert_eq!(app.surface().offsets.last(), Some(&(-100, false)));
    assert!(!app.is_transitioning(0));

    let _ = app.open_route("/project/atlas#bogus", 10);
    assert_eq!(app.navigation().current_id(), "resumen");

    assert_eq!(app.open_route("/home#contacto", 20), RouteOutcome::Home);
    assert_eq!(app.navigation().current_index(), 3);
}

#[test]
fn digit_shortcuts_only_apply_on_home() {
    let mut app = site(MockInput::new(), 1280);

    let _ = app.handle_event(InputEvent::Key(Key::Digit(4)), 0);
    assert_eq!(app.navigation().current_id(), "contacto");

    let _ = app.open_route("/project/ledger", 5_000);
    let outcome = app.handle_event(InputEvent::Key(Key::Digit(2)), 5_000);
    assert_eq!(outcome, GestureOutcome::IGNORED);
    assert_eq!(app.navigation().current_id(), "resumen");
}

#[test]
fn project_traversal_wraps_and_resets_sections() {
    let mut app = site(MockInput::new(), 1280);
    assert_eq!(app.next_project(0), None);

    let _ = app.open_route("/project/pulse", 0);
    assert!(app.navigate_next(0));
    assert_eq!(app.navigation().current_id(), "proceso");

    assert_eq!(app.next_project(100), Some("ledger"));
    assert_eq!(app.page(), Page::Project { id: "ledger" });
    assert_eq!(app.navigation().current_id(), "resumen");
    assert!(!app.is_transitioning(100));

    assert_eq!(app.previous_project(200), Some("pulse"));
    assert_eq!(app.previous_project(300), Some("atlas"));
}

#[test]
fn resize_across_breakpoint_switches_layout_mode() {
    let mut app = site(MockInput::new(), 1280);
    let mut responsive = app.subscribe_responsive();
    let _ = app.responsive_changed(&mut responsive);

    assert!(app.navigate_to_section("contacto", 0));

    let _ = app.handle_event(InputEvent::Resize { width_px: 600 }, 100);
    let _ = app.handle_event(InputEvent::Resize { width_px: 700 }, 150);
    let _ = app.tick(200);
    assert!(app.responsive().is_wide_layout);
    assert!(app.responsive_changed(&mut responsive).is_none());

    let _ = app.tick(400);
    assert_eq!(app.responsive().width_px, 700);
    assert!(!app.responsive().is_wide_layout);
    assert_eq!(
        app.responsive_changed(&mut responsive).map(|state| state.width_px),
        Some(700)
    );
    assert_eq!(
        app.surface().modes,
        [ScrollStrategy::HorizontalPaged, ScrollStrategy::VerticalNative]
    );

    let _ = app.handle_event(InputEvent::Resize { width_px: 1200 }, 500);
    let _ = app.tick(750);
    assert_eq!(app.surface().modes.last(), Some(&ScrollStrategy::HorizontalPaged));
    assert_eq!(app.surface().offsets.last(), Some(&(-300, false)));
    assert_eq!(app.navigation().current_id(), "contacto");
}

#[test]
fn narrow_layout_ignores_wheel_and_spies_on_scroll() {
    let mut app = site(MockInput::new(), 600);

    assert_eq!(app.handle_event(WHEEL_FORWARD, 0), GestureOutcome::IGNORED);

    let outcome = app.handle_event(InputEvent::Scroll { scroll_y: 1_020 }, 0);
    assert_eq!(outcome.intent, Some(NavIntent::Highlight("acerca")));
    assert!(!outcome.prevent_default);
    assert_eq!(app.navigation().current_id(), "acerca");
    assert!(app.surface().scrolled.is_empty());

    let _ = app.handle_event(InputEvent::Scroll { scroll_y: 1_600 }, 50);
    assert_eq!(app.navigation().current_id(), "acerca");

    let _ = app.tick(100);
    assert_eq!(app.navigation().current_id(), "contacto");
    assert!(app.surface().scrolled.is_empty());
}

#[test]
fn narrow_nav_link_scrolls_below_header() {
    let mut app = site(MockInput::new(), 600);

    assert!(app.navigate_to_section("contacto", 0));
    assert!(!app.navigate_to_section("contacto", 10));
    assert_eq!(
        app.surface().scrolled,
        [("contacto", 80, true), ("contacto", 80, true)]
    );
    assert!(app.surface().offsets.is_empty());
}

#[test]
fn navigation_subscribers_see_each_change() {
    let mut app = site(MockInput::new(), 1280);
    let mut sidebar = app.subscribe_navigation();

    assert_eq!(
        app.navigation_changed(&mut sidebar).map(|nav| nav.current_index()),
        Some(0)
    );
    assert!(app.navigation_changed(&mut sidebar).is_none());

    assert!(app.navigate_next(0));
    assert_eq!(
        app.navigation_changed(&mut sidebar).map(|nav| nav.current_id()),
        Some("casos")
    );
}

#[test]
fn home_view_highlights_current_section() {
    let mut app = site(MockInput::new(), 1280);
    assert!(app.navigate_to_section("acerca", 0));

    let mut seen = false;
    app.with_view(400, |view| {
        seen = true;
        assert!(matches!(view.page, PageView::Home));
        assert_eq!(view.active_link, "acerca");
        assert_eq!(view.progress_label, "3/5");
        assert_eq!(view.sections.len(), 5);
        assert_eq!(view.sections.iter().filter(|link| link.active).count(), 1);
        assert!(view.arrows.visible);
        assert!(view.arrows.prev_enabled);
        assert!(view.arrows.next_enabled);

        let frame = view.transition.unwrap();
        assert_eq!(frame.progress_pct, 50);
        assert_eq!(frame.offset_vw(), -100);
    });
    assert!(seen);

    app.with_view(900, |view| assert!(view.transition.is_none()));
}

#[test]
fn project_view_marks_cases_link_and_neighbours() {
    let mut app = site(MockInput::new(), 1280);
    let _ = app.open_route("/project/ledger#resultados", 0);

    let mut seen = false;
    app.with_view(0, |view| {
        seen = true;
        assert_eq!(view.active_link, "casos");
        assert_eq!(view.progress_label, "4/4");
        assert!(!view.arrows.next_enabled);
        match view.page {
            PageView::Project {
                project,
                previous,
                next,
            } => {
                assert_eq!(project.id, "ledger");
                assert_eq!(previous.map(|p| p.id), Some("pulse"));
                assert_eq!(next.map(|p| p.id), Some("atlas"));
            }
            PageView::Home => panic!("expected project page"),
        }
    });
    assert!(seen);
}

#[test]
fn narrow_view_hides_arrows() {
    let app = site(MockInput::new(), 700);

    app.with_view(0, |view| {
        assert!(!view.arrows.visible);
        assert_eq!(view.strategy, ScrollStrategy::VerticalNative);
    });
}
