use std::collections::HashMap;
use std::time::{Duration, Instant};

use pagedom::{query_all_in, Document, Easing, LayoutResult, Selector, Tween};

use crate::config::EnhanceConfig;

/// Animated numeric counters inside the stats section.
///
/// The section arms once, the first time it scrolls into view; each marked
/// child then counts 0 → its target over the configured duration. Counters
/// whose target attribute does not parse are skipped.
#[derive(Debug)]
pub struct Counters {
    counter_attr: String,
    target_attr: String,
    duration: Duration,
    section_id: Option<String>,
    started: bool,
    active: HashMap<String, CounterRun>,
}

#[derive(Debug)]
struct CounterRun {
    tween: Tween,
    target: i64,
}

impl Counters {
    pub fn bind(doc: &Document, config: &EnhanceConfig) -> Self {
        let marker = Selector::Attr {
            tag: None,
            attr: config.markers.stats_attr.clone(),
            value: None,
        };
        let section_id = doc.query(&marker).map(|el| el.id.clone());
        if section_id.is_none() {
            log::debug!("no stats section; counters disabled");
        }

        Self {
            counter_attr: config.markers.counter_attr.clone(),
            target_attr: config.markers.counter_target_attr.clone(),
            duration: Duration::from_millis(config.timing.counter_ms),
            section_id,
            started: false,
            active: HashMap::new(),
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Arm the counters when the stats section first enters the viewport.
    pub fn check(&mut self, doc: &mut Document, layout: &LayoutResult, now: Instant) {
        if self.started {
            return;
        }
        let Some(section_id) = self.section_id.clone() else {
            return;
        };
        let on_screen = layout
            .get(&section_id)
            .is_some_and(|rect| rect.intersects(&doc.visible_rect()));
        if !on_screen {
            return;
        }
        self.started = true;

        let marker = Selector::Attr {
            tag: None,
            attr: self.counter_attr.clone(),
            value: None,
        };
        let Some(section) = doc.find(&section_id) else {
            return;
        };
        let mut runs = Vec::new();
        for el in query_all_in(section, &marker) {
            let raw = el.get_attr(&self.target_attr).unwrap_or("");
            match raw.trim().parse::<i64>() {
                Ok(target) => runs.push((el.id.clone(), target)),
                Err(_) => {
                    log::debug!("counter '{}' has non-numeric target '{raw}'; skipping", el.id);
                }
            }
        }

        for (id, target) in runs {
            if let Some(el) = doc.find_mut(&id) {
                el.set_text("0");
            }
            self.active.insert(
                id,
                CounterRun {
                    tween: Tween::new(0.0, target as f32, now, self.duration, Easing::EaseOut),
                    target,
                },
            );
        }
    }

    /// Advance running counters; finished ones land exactly on target.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        let mut done = Vec::new();
        for (id, run) in &self.active {
            if run.tween.is_finished(now) {
                if let Some(el) = doc.find_mut(id) {
                    el.set_text(run.target.to_string());
                }
                done.push(id.clone());
            } else if let Some(el) = doc.find_mut(id) {
                el.set_text((run.tween.value_at(now).floor() as i64).to_string());
            }
        }
        for id in done {
            self.active.remove(&id);
        }
    }
}
