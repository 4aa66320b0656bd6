use std::{fs, path::Path};

use anyhow::{Context, Result};
use folio_core::input::{InputEvent, Key};
use serde::Deserialize;

/// Recorded browsing session replayed against the site core.
#[derive(Debug, Deserialize)]
pub(super) struct Script {
    #[serde(default)]
    pub width_px: Option<u32>,
    #[serde(default)]
    pub route: Option<String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Step {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub(super) enum Action {
    Wheel {
        #[serde(default)]
        delta_x: i32,
        #[serde(default)]
        delta_y: i32,
    },
    Key {
        key: String,
    },
    Swipe {
        from: (i32, i32),
        to: (i32, i32),
    },
    Scroll {
        scroll_y: i32,
    },
    Resize {
        width_px: u32,
    },
    TransitionEnd,
    Link {
        section: String,
    },
    NextArrow,
    PreviousArrow,
    Route {
        url: String,
    },
    NextProject,
    PreviousProject,
}

/// What the driver does with one step.
pub(super) enum Dispatch {
    /// Raw events for the input provider, in order.
    Events(Vec<InputEvent>),
    /// A call on the app itself.
    Direct(Action),
}

impl Action {
    pub(super) fn dispatch(self) -> Dispatch {
        match self {
            Self::Wheel { delta_x, delta_y } => {
                Dispatch::Events(vec![InputEvent::Wheel { delta_x, delta_y }])
            }
            Self::Key { key } => Dispatch::Events(vec![InputEvent::Key(Key::from_dom_key(&key))]),
            Self::Swipe { from, to } => Dispatch::Events(vec![
                InputEvent::TouchStart {
                    x: from.0,
                    y: from.1,
                },
                InputEvent::TouchEnd { x: to.0, y: to.1 },
            ]),
            Self::Scroll { scroll_y } => Dispatch::Events(vec![InputEvent::Scroll { scroll_y }]),
            Self::Resize { width_px } => Dispatch::Events(vec![InputEvent::Resize { width_px }]),
            Self::TransitionEnd => Dispatch::Events(vec![InputEvent::TransitionEnd]),
            direct => Dispatch::Direct(direct),
        }
    }
}

impl Script {
    pub(super) fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("failed to parse script {}", path.display()))
    }

    pub(super) fn parse(raw: &str) -> Result<Self> {
        let mut script: Self = serde_json::from_str(raw)?;
        script.steps.sort_by_key(|step| step.at_ms);
        Ok(script)
    }

    /// Built-in tour used when no script file is given.
    pub(super) fn demo() -> Self {
        let step = |at_ms, action| Step { at_ms, action };
        Self {
            width_px: None,
            route: None,
            steps: vec![
                step(100, Action::Wheel {
                    delta_x: 0,
                    delta_y: 120,
                }),
                step(110, Action::Wheel {
                    delta_x: 0,
                    delta_y: 140,
                }),
                step(1_000, Action::Key {
                    key: "ArrowRight".into(),
                }),
                step(1_200, Action::Link {
                    section: "contacto".into(),
                }),
                step(2_200, Action::Swipe {
                    from: (600, 400),
                    to: (420, 410),
                }),
                step(3_200, Action::Route {
                    url: "/project/proyecto-2#proceso".into(),
                }),
                step(3_300, Action::NextProject),
                step(4_200, Action::Resize { width_px: 720 }),
                step(4_600, Action::Scroll { scroll_y: 1_300 }),
                step(5_200, Action::Route {
                    url: "/project/desconocido".into(),
                }),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_sorted_and_tagged_by_action() {
        let script = Script::parse(
            r#"{
                "width_px": 1280,
                "steps": [
                    { "at_ms": 900, "action": "key", "key": "End" },
                    { "at_ms": 100, "action": "wheel", "delta_y": 120 },
                    { "at_ms": 500, "action": "next_arrow" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(script.width_px, Some(1280));
        let times: Vec<u64> = script.steps.iter().map(|step| step.at_ms).collect();
        assert_eq!(times, [100, 500, 900]);
        assert!(matches!(
            script.steps[0].action,
            Action::Wheel {
                delta_x: 0,
                delta_y: 120
            }
        ));
        assert!(matches!(script.steps[1].action, Action::NextArrow));
    }

    #[test]
    fn swipe_expands_to_touch_pair() {
        let Dispatch::Events(events) = Action::Swipe {
            from: (10, 0),
            to: (200, 5),
        }
        .dispatch() else {
            panic!("swipe should produce events");
        };
        assert_eq!(
            events,
            [
                InputEvent::TouchStart { x: 10, y: 0 },
                InputEvent::TouchEnd { x: 200, y: 5 },
            ]
        );
    }
}
