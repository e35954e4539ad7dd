//! Intersection-driven effects: reveal-on-scroll and count-up statistics

use std::collections::BTreeSet;

use tracing::debug;

use crate::app::events::TimerEvent;
use crate::config::{CounterSpec, Timings};
use crate::domain::easing::counter_value;
use crate::runtime::{Scheduler, TimerId};
use crate::ui::View;
use crate::ui::elements::{CLASS_ANIMATED, CLASS_REVEALED};

/// Elements that animate in the first time they scroll into view
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    targets: BTreeSet<String>,
    revealed: BTreeSet<String>,
    threshold: f64,
}

impl ScrollReveal {
    pub fn new(targets: &[String], timings: &Timings) -> Self {
        Self {
            targets: targets.iter().cloned().collect(),
            revealed: BTreeSet::new(),
            threshold: timings.reveal_threshold,
        }
    }

    pub fn observes(&self, target: &str) -> bool {
        self.targets.contains(target)
    }

    pub fn is_revealed(&self, target: &str) -> bool {
        self.revealed.contains(target)
    }

    /// Reveals `target` once its visible ratio reaches the threshold
    pub fn intersected(&mut self, view: &mut dyn View, target: &str, ratio: f64) {
        if !self.observes(target) || ratio < self.threshold || ratio <= 0.0 {
            return;
        }
        if self.revealed.insert(target.to_string()) {
            view.set_class(target, CLASS_REVEALED, true);
            debug!(target, "element revealed");
        }
    }
}

#[derive(Debug, Clone)]
struct Counter {
    spec: CounterSpec,
    started_at: Option<u64>,
    finished: bool,
}

/// Statistics that count up from zero once half visible
#[derive(Debug, Clone)]
pub struct Counters {
    counters: Vec<Counter>,
    threshold: f64,
    duration_ms: u64,
    frame_ms: u64,
    frame_timer: Option<TimerId>,
}

impl Counters {
    pub fn new(specs: &[CounterSpec], timings: &Timings) -> Self {
        Self {
            counters: specs
                .iter()
                .cloned()
                .map(|spec| Counter {
                    spec,
                    started_at: None,
                    finished: false,
                })
                .collect(),
            threshold: timings.counter_threshold,
            duration_ms: timings.counter_duration_ms,
            frame_ms: timings.counter_frame_ms,
            frame_timer: None,
        }
    }

    pub fn observes(&self, target: &str) -> bool {
        self.counters.iter().any(|c| c.spec.id == target)
    }

    pub fn is_running(&self) -> bool {
        self.counters
            .iter()
            .any(|c| c.started_at.is_some() && !c.finished)
    }

    /// Starts the count-up the first time `target` is sufficiently visible
    pub fn intersected(
        &mut self,
        view: &mut dyn View,
        scheduler: &mut Scheduler<TimerEvent>,
        target: &str,
        ratio: f64,
    ) {
        if ratio < self.threshold || ratio <= 0.0 {
            return;
        }
        let now = scheduler.now_ms();
        let Some(counter) = self
            .counters
            .iter_mut()
            .find(|c| c.spec.id == target && c.started_at.is_none())
        else {
            return;
        };

        counter.started_at = Some(now);
        view.set_class(target, CLASS_ANIMATED, true);
        view.set_text(target, "0");
        debug!(target, goal = counter.spec.target, "counter started");

        if self.frame_timer.is_none() {
            let timer = scheduler.schedule_interval(self.frame_ms, TimerEvent::CounterFrame);
            self.frame_timer = Some(timer);
        }
    }

    /// Renders one frame for every running counter
    pub fn frame(&mut self, view: &mut dyn View, scheduler: &mut Scheduler<TimerEvent>) {
        let now = scheduler.now_ms();
        for counter in self.counters.iter_mut().filter(|c| !c.finished) {
            let Some(started_at) = counter.started_at else {
                continue;
            };
            let elapsed = now.saturating_sub(started_at);
            let value = counter_value(counter.spec.target, elapsed, self.duration_ms);
            view.set_text(&counter.spec.id, &value.to_string());
            if elapsed >= self.duration_ms {
                counter.finished = true;
            }
        }

        if !self.is_running() {
            if let Some(timer) = self.frame_timer.take() {
                scheduler.cancel(timer);
            }
        }
    }
}
