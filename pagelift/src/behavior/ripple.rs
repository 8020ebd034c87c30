use std::time::{Duration, Instant};

use pagedom::transition::lerp_color;
use pagedom::{hit_test_matching, Color, Document, Element, LayoutResult, Scheduler, Style};

use crate::config::EnhanceConfig;

/// Blend factor toward white applied to a hovered element's background.
const HOVER_LIFT: f32 = 0.15;

/// Click ripples and hover highlighting for interactive-marked elements.
#[derive(Debug)]
pub struct Ripple {
    interactive_class: String,
    ripple_class: String,
    hover_class: String,
    lifetime: Duration,
    /// Pending ripple removals, payload = ripple element ID.
    timers: Scheduler<String>,
    hovered: Option<HoverEntry>,
}

#[derive(Debug)]
struct HoverEntry {
    id: String,
    /// Background to restore when the pointer leaves.
    prev_background: Option<Color>,
}

impl Ripple {
    pub fn new(config: &EnhanceConfig) -> Self {
        Self {
            interactive_class: config.markers.interactive_class.clone(),
            ripple_class: config.classes.ripple.clone(),
            hover_class: config.classes.hover.clone(),
            lifetime: Duration::from_millis(config.timing.ripple_ms),
            timers: Scheduler::new(),
            hovered: None,
        }
    }

    /// Spawn a ripple inside the interactive element under the click,
    /// positioned at the click point, and schedule its removal.
    pub fn on_click(
        &mut self,
        doc: &mut Document,
        layout: &LayoutResult,
        x: u16,
        y: u16,
        now: Instant,
    ) {
        let target = hit_test_matching(layout, &doc.body, x, y, &|el| {
            el.has_class(&self.interactive_class)
        });
        let Some(target_id) = target else {
            return;
        };
        let Some(rect) = layout.get(&target_id) else {
            return;
        };

        let ripple = Element::span("")
            .class(self.ripple_class.as_str())
            .style(
                Style::new()
                    .left((x - rect.x) as i16)
                    .top((y - rect.y) as i16),
            );
        let ripple_id = ripple.id.clone();

        if let Some(el) = doc.find_mut(&target_id) {
            el.push_child(ripple);
            self.timers.schedule(now + self.lifetime, ripple_id);
        }
    }

    /// Move hover highlighting to the interactive element under the pointer:
    /// the hover class plus a background lifted toward white.
    pub fn on_pointer_move(&mut self, doc: &mut Document, layout: &LayoutResult, x: u16, y: u16) {
        let target = hit_test_matching(layout, &doc.body, x, y, &|el| {
            el.has_class(&self.interactive_class)
        });

        if target.as_deref() == self.hovered.as_ref().map(|h| h.id.as_str()) {
            return;
        }

        if let Some(old) = self.hovered.take() {
            if let Some(el) = doc.find_mut(&old.id) {
                el.remove_class(&self.hover_class);
                el.style.background = old.prev_background;
            }
        }
        if let Some(new_id) = target {
            if let Some(el) = doc.find_mut(&new_id) {
                el.add_class(self.hover_class.as_str());
                let prev_background = el.style.background.clone();
                let base = prev_background
                    .clone()
                    .unwrap_or_else(|| Color::rgb(52, 152, 219));
                el.style.background =
                    Some(lerp_color(&base, &Color::rgb(255, 255, 255), HOVER_LIFT));
                self.hovered = Some(HoverEntry {
                    id: new_id,
                    prev_background,
                });
            }
        }
    }

    /// Remove expired ripples.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        for ripple_id in self.timers.poll(now) {
            doc.remove(&ripple_id);
        }
    }
}
