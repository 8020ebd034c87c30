use std::collections::HashMap;
use std::time::{Duration, Instant};

use pagedom::{Document, Easing, LayoutResult, Selector, Tween};

use crate::config::EnhanceConfig;

/// Vertical offset reveal targets start from, in pixels.
const REVEAL_OFFSET: i16 = 30;

/// Scroll-triggered reveal: marked elements fade and slide in the first
/// time their rect intersects the visible viewport, then stop being
/// observed — reveal is one-shot.
#[derive(Debug)]
pub struct Reveal {
    visible_class: String,
    duration: Duration,
    /// IDs still waiting to enter the viewport.
    watching: Vec<String>,
    /// In-flight fades, opacity 0 → 1.
    active: HashMap<String, Tween>,
}

impl Reveal {
    /// Snapshot the marked elements and hide them in place.
    pub fn observe(doc: &mut Document, config: &EnhanceConfig) -> Self {
        let marker = Selector::Attr {
            tag: None,
            attr: config.markers.reveal_attr.clone(),
            value: None,
        };
        let watching: Vec<String> =
            doc.query_all(&marker).iter().map(|el| el.id.clone()).collect();

        for id in &watching {
            if let Some(el) = doc.find_mut(id) {
                el.style.opacity = Some(0.0);
                el.style.translate_y = Some(REVEAL_OFFSET);
            }
        }

        log::debug!("observing {} reveal targets", watching.len());
        Self {
            visible_class: config.classes.visible.clone(),
            duration: Duration::from_millis(config.timing.reveal_ms),
            watching,
            active: HashMap::new(),
        }
    }

    pub fn pending(&self) -> usize {
        self.watching.len()
    }

    /// Begin fading any watched element that now intersects the viewport.
    pub fn check(&mut self, doc: &mut Document, layout: &LayoutResult, now: Instant) {
        let visible = doc.visible_rect();
        let mut entered = Vec::new();
        self.watching.retain(|id| {
            let on_screen = layout.get(id).is_some_and(|rect| rect.intersects(&visible));
            if on_screen {
                entered.push(id.clone());
            }
            !on_screen
        });

        for id in entered {
            if let Some(el) = doc.find_mut(&id) {
                el.add_class(self.visible_class.as_str());
            }
            self.active.insert(
                id,
                Tween::new(0.0, 1.0, now, self.duration, Easing::EaseOut),
            );
        }
    }

    /// Advance in-flight fades and finalize the finished ones.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        let mut done = Vec::new();
        for (id, tween) in &self.active {
            let progress = tween.progress(now);
            if let Some(el) = doc.find_mut(id) {
                el.style.opacity = Some(tween.value_at(now));
                el.style.translate_y = Some(pagedom::transition::lerp_i16(REVEAL_OFFSET, 0, progress));
            }
            if tween.is_finished(now) {
                done.push(id.clone());
            }
        }
        for id in done {
            if let Some(el) = doc.find_mut(&id) {
                el.style.opacity = Some(1.0);
                el.style.translate_y = Some(0);
            }
            self.active.remove(&id);
        }
    }
}
