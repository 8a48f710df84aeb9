//! Replays a [`Scenario`] against a live [`Pager`].
use std::{mem, sync::Arc};

use parking_lot::Mutex;
use serde::Serialize;
use swipe_pager::{
    PageCommit, PageTransition, PageTransitionError, Pager, PagerArgs, PagerFrame,
};
use tracing::{debug, info};

use crate::scenario::{Scenario, Step};

/// A callback the pager fired, in firing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    DraggingBegan,
    DraggingChanged {
        progress: f32,
    },
    DraggingEnded,
    PageWillChange {
        page: usize,
    },
    PageWillTransition {
        result: Result<PageTransition, PageTransitionError>,
    },
    PageChanged {
        page: usize,
    },
}

/// Collects notifications from every pager callback.
#[derive(Clone, Default)]
pub struct Recorder {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl Recorder {
    fn sink(&self) -> impl Fn(Notification) + Send + Sync + 'static {
        let notifications = self.notifications.clone();
        move |notification| notifications.lock().push(notification)
    }

    /// Wires every callback of `args` into this recorder.
    pub fn attach(&self, args: PagerArgs) -> PagerArgs {
        let began = self.sink();
        let changed = self.sink();
        let ended = self.sink();
        let will_change = self.sink();
        let will_transition = self.sink();
        let page_changed = self.sink();
        args.on_dragging_began(move || began(Notification::DraggingBegan))
            .on_dragging_changed(move |progress| {
                changed(Notification::DraggingChanged { progress })
            })
            .on_dragging_ended(move || ended(Notification::DraggingEnded))
            .on_page_will_change(move |page| will_change(Notification::PageWillChange { page }))
            .on_page_will_transition(move |result| {
                will_transition(Notification::PageWillTransition { result })
            })
            .on_page_changed(move |page| page_changed(Notification::PageChanged { page }))
    }

    /// Takes everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        mem::take(&mut *self.notifications.lock())
    }
}

/// What happened while applying one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<PageCommit>,
    pub notifications: Vec<Notification>,
    pub page: usize,
    pub current_page: usize,
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<PagerFrame>,
}

/// A scenario's pager plus the recorder listening to it.
pub struct Replay {
    pager: Pager,
    recorder: Recorder,
}

impl Replay {
    pub fn new(scenario: &Scenario) -> Self {
        let recorder = Recorder::default();
        let args = recorder.attach(scenario.settings.apply(PagerArgs::default()));
        let mut pager = Pager::new(args, scenario.items);
        pager.set_viewport(scenario.viewport);
        Self { pager, recorder }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Applies one step and reports its effects.
    pub fn apply(&mut self, step: &Step) -> StepReport {
        let mut accepted = None;
        let mut commit = None;
        let mut frame = None;

        if let Some(event) = step.gesture_event() {
            commit = self.pager.handle_event(event);
        } else {
            match *step {
                Step::Deactivate => commit = self.pager.deactivate(),
                Step::Settle => {
                    accepted = Some(self.pager.complete_transition().is_some());
                }
                Step::Next => accepted = Some(self.pager.next()),
                Step::Previous => accepted = Some(self.pager.previous()),
                Step::MoveTo { page } => accepted = Some(self.pager.move_to(page)),
                Step::Command { direction } => {
                    accepted = Some(self.pager.move_command(direction));
                }
                Step::Resize { width, height } => {
                    self.pager.set_viewport(glam::Vec2::new(width, height));
                }
                Step::SetItems { count } => self.pager.set_item_count(count),
                Step::Frame => frame = Some(self.pager.layout()),
                Step::Press { .. } | Step::Move { .. } | Step::Release | Step::Cancel => {}
            }
        }

        let report = StepReport {
            step: step.label(),
            accepted,
            commit,
            notifications: self.recorder.drain(),
            page: self.pager.page(),
            current_page: self.pager.current_page(),
            phase: format!("{:?}", self.pager.phase()),
            frame,
        };
        debug!(
            "{} -> page {} ({} notifications)",
            report.step,
            report.page,
            report.notifications.len()
        );
        report
    }
}

/// Replays every step of `scenario`.
pub fn run(scenario: &Scenario) -> Vec<StepReport> {
    info!(
        "Replaying '{}' ({} items, {} steps)",
        scenario.name,
        scenario.items,
        scenario.steps.len()
    );
    let mut replay = Replay::new(scenario);
    scenario.steps.iter().map(|step| replay.apply(step)).collect()
}
