//! Scenario files: a pager configuration plus a script of host events.
use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use swipe_pager::{
    ContentLoadingPolicy, DragSample, GestureEvent, ItemAlignment, ItemSizing, MoveDirection,
    Orientation, PagerArgs, PaginationSensitivity, PositionAlignment, SwipeDirection,
    SwipeInteractionArea,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub items: usize,
    pub viewport: Vec2,
    #[serde(default)]
    pub settings: Settings,
    pub steps: Vec<Step>,
}

/// Pager settings. Anything left out keeps the library default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_direction: Option<SwipeDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_to_left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_sizing: Option<ItemSizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_alignment: Option<ItemAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<PositionAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_insets: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_loading_policy: Option<ContentLoadingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_pages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_repeat_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_dragging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_forward_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_interaction_area: Option<SwipeInteractionArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delays_touches: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ratio: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<PaginationSensitivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_pagination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity_decrement: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_3d: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_offset: Option<f32>,
}

impl Settings {
    /// Applies every present setting through the validating setters.
    pub fn apply(&self, mut args: PagerArgs) -> PagerArgs {
        if let Some(page) = self.initial_page {
            args = args.initial_page(page);
        }
        if let Some(orientation) = self.orientation {
            args = args.orientation(orientation);
        }
        if let Some(direction) = self.swipe_direction {
            args = args.swipe_direction(direction);
        }
        if let Some(right_to_left) = self.right_to_left {
            args = args.right_to_left(right_to_left);
        }
        if let Some(spacing) = self.item_spacing {
            args = args.item_spacing(spacing);
        }
        if let Some(insets) = self.side_insets {
            args = args.side_insets(insets);
        }
        if let Some(sizing) = self.item_sizing {
            args = match sizing {
                ItemSizing::Preferred(size) => args.preferred_item_size(size),
                sizing => args.item_sizing(sizing),
            };
        }
        if let Some(alignment) = self.item_alignment {
            args = args.item_alignment(alignment);
        }
        if let Some(alignment) = self.alignment {
            args = args.alignment(alignment);
        }
        if let Some(policy) = self.content_loading_policy {
            args = args.content_loading_policy(policy);
        }
        if let Some(loop_pages) = self.loop_pages {
            args = args.loop_pages(loop_pages);
        }
        if let Some(repeat) = self.loop_repeat_count {
            args = args.loop_repeat_count(repeat);
        }
        if let Some(allows) = self.allows_dragging {
            args = args.allows_dragging(allows);
        }
        if let Some(forward_only) = self.drag_forward_only {
            args = args.drag_forward_only(forward_only);
        }
        if let Some(bounces) = self.bounces {
            args = args.bounces(bounces);
        }
        if let Some(area) = self.swipe_interaction_area {
            args = args.swipe_interaction_area(area);
        }
        if let Some(delays) = self.delays_touches {
            args = args.delays_touches(delays);
        }
        if let Some(ratio) = self.page_ratio {
            args = args.page_ratio(ratio);
        }
        if let Some(sensitivity) = self.sensitivity {
            args = args.sensitivity(sensitivity);
        }
        if let Some(multiple) = self.multiple_pagination {
            args = args.multiple_pagination(multiple);
        }
        if let Some(scale) = self.interactive_scale {
            args = args.interactive_scale(scale);
        }
        if let Some(decrement) = self.opacity_decrement {
            args = args.opacity_decrement(decrement);
        }
        if let Some(rotation) = self.rotation_3d {
            args = args.rotation_3d(rotation);
        }
        if let Some(offset) = self.page_offset {
            args = args.page_offset(offset);
        }
        args
    }
}

/// One scripted host event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    /// Pointer down at `(x, y)`, `t_ms` milliseconds into the scenario.
    Press { x: f32, y: f32, t_ms: u64 },
    /// Pointer moved.
    Move { x: f32, y: f32, t_ms: u64 },
    /// Pointer lifted.
    Release,
    /// Gesture taken away by the platform.
    Cancel,
    /// Hosting surface went inactive.
    Deactivate,
    /// The host finished animating the last transition.
    Settle,
    Next,
    Previous,
    MoveTo { page: usize },
    Command { direction: MoveDirection },
    Resize { width: f32, height: f32 },
    SetItems { count: usize },
    /// Print the current frame.
    Frame,
}

impl Step {
    /// Gesture event this step stands for, if any.
    pub fn gesture_event(&self) -> Option<GestureEvent> {
        let sample =
            |x: f32, y: f32, t_ms: u64| DragSample::new(Vec2::new(x, y), Duration::from_millis(t_ms));
        match *self {
            Step::Press { x, y, t_ms } => Some(GestureEvent::Began(sample(x, y, t_ms))),
            Step::Move { x, y, t_ms } => Some(GestureEvent::Changed(sample(x, y, t_ms))),
            Step::Release => Some(GestureEvent::Ended),
            Step::Cancel => Some(GestureEvent::Cancelled),
            _ => None,
        }
    }

    /// Short label used in reports.
    pub fn label(&self) -> String {
        match self {
            Step::Press { x, y, t_ms } => format!("press ({x}, {y}) @{t_ms}ms"),
            Step::Move { x, y, t_ms } => format!("move ({x}, {y}) @{t_ms}ms"),
            Step::Release => "release".to_string(),
            Step::Cancel => "cancel".to_string(),
            Step::Deactivate => "deactivate".to_string(),
            Step::Settle => "settle".to_string(),
            Step::Next => "next".to_string(),
            Step::Previous => "previous".to_string(),
            Step::MoveTo { page } => format!("move to {page}"),
            Step::Command { direction } => format!("command {direction:?}"),
            Step::Resize { width, height } => format!("resize {width}x{height}"),
            Step::SetItems { count } => format!("set items {count}"),
            Step::Frame => "frame".to_string(),
        }
    }
}

impl Scenario {
    /// Reads and checks a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))?;
        scenario.check()?;
        Ok(scenario)
    }

    fn check(&self) -> Result<()> {
        ensure!(
            self.viewport.is_finite() && self.viewport.cmpge(Vec2::ZERO).all(),
            "Scenario '{}' has an invalid viewport {:?}",
            self.name,
            self.viewport
        );
        let mut last_t_ms = 0;
        for (index, step) in self.steps.iter().enumerate() {
            if let Step::Press { t_ms, .. } | Step::Move { t_ms, .. } = step {
                if *t_ms < last_t_ms {
                    tracing::warn!(
                        "Step {index} of '{}' goes back in time ({t_ms}ms < {last_t_ms}ms)",
                        self.name
                    );
                }
                last_t_ms = (*t_ms).max(last_t_ms);
            }
        }
        Ok(())
    }

    /// A small scenario showing a committed swipe.
    pub fn sample() -> Self {
        Self {
            name: "swipe to the next page".to_string(),
            items: 10,
            viewport: Vec2::new(320.0, 480.0),
            settings: Settings {
                initial_page: Some(3),
                interactive_scale: Some(0.8),
                delays_touches: Some(false),
                ..Settings::default()
            },
            steps: vec![
                Step::Frame,
                Step::Press {
                    x: 260.0,
                    y: 240.0,
                    t_ms: 0,
                },
                Step::Move {
                    x: 200.0,
                    y: 242.0,
                    t_ms: 200,
                },
                Step::Move {
                    x: 90.0,
                    y: 245.0,
                    t_ms: 400,
                },
                Step::Frame,
                Step::Release,
                Step::Settle,
                Step::Frame,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_round_trips_through_json() {
        let json = serde_json::to_string(&Scenario::sample()).unwrap();
        let parsed: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.steps.len(), Scenario::sample().steps.len());
        assert_eq!(parsed.settings.initial_page, Some(3));
    }

    #[test]
    fn test_settings_apply_through_setters() {
        let settings = Settings {
            interactive_scale: Some(3.0),
            multiple_pagination: Some(true),
            ..Settings::default()
        };
        let args = settings.apply(PagerArgs::default());
        assert_eq!(args.interactive_scale, 1.0);
        assert_eq!(args.content_loading_policy, ContentLoadingPolicy::Eager);
    }

    #[test]
    fn test_bundled_scenarios_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../scenarios");
        for name in ["basic.json", "loop.json"] {
            let scenario = Scenario::load(&dir.join(name)).unwrap();
            assert!(!scenario.steps.is_empty());
        }
    }

    #[test]
    fn test_unknown_setting_is_rejected() {
        let json = r#"{"name":"x","items":1,"viewport":[1.0,1.0],"settings":{"bogus":1},"steps":[]}"#;
        assert!(serde_json::from_str::<Scenario>(json).is_err());
    }

    #[test]
    fn test_steps_parse_with_action_tag() {
        let step: Step = serde_json::from_str(r#"{"action":"move_to","page":4}"#).unwrap();
        assert!(matches!(step, Step::MoveTo { page: 4 }));
        let step: Step =
            serde_json::from_str(r#"{"action":"press","x":1.0,"y":2.0,"t_ms":5}"#).unwrap();
        assert!(step.gesture_event().is_some());
    }
}
