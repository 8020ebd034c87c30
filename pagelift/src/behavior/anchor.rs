use std::time::{Duration, Instant};

use pagedom::{content_height, Document, Easing, LayoutResult, Tween};

use crate::config::EnhanceConfig;

/// Smooth anchor scrolling: a click on an element whose anchor attribute
/// holds `#target` glides the page scroll offset to the target's top edge.
#[derive(Debug)]
pub struct SmoothScroll {
    anchor_attr: String,
    duration: Duration,
    active: Option<Tween>,
}

impl SmoothScroll {
    pub fn new(config: &EnhanceConfig) -> Self {
        Self {
            anchor_attr: config.markers.anchor_attr.clone(),
            duration: Duration::from_millis(config.timing.scroll_ms),
            active: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Start a glide if the clicked element references an in-page anchor.
    /// Returns true if an animation started.
    pub fn on_click(
        &mut self,
        doc: &Document,
        layout: &LayoutResult,
        clicked_id: &str,
        now: Instant,
    ) -> bool {
        let Some(href) = doc.find(clicked_id).and_then(|el| el.get_attr(&self.anchor_attr))
        else {
            return false;
        };
        let Some(dest_id) = href.strip_prefix('#') else {
            return false;
        };
        let Some(rect) = layout.get(dest_id) else {
            log::debug!("anchor '#{dest_id}' has no layout; ignoring");
            return false;
        };

        let max_scroll = content_height(layout).saturating_sub(doc.viewport.height);
        let dest_y = rect.y.min(max_scroll);

        self.active = Some(Tween::new(
            doc.scroll_y as f32,
            dest_y as f32,
            now,
            self.duration,
            Easing::EaseInOut,
        ));
        true
    }

    /// Advance the glide, writing the interpolated offset into the document.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        let Some(tween) = self.active else {
            return;
        };
        doc.set_scroll(tween.value_at(now).round() as u16);
        if tween.is_finished(now) {
            self.active = None;
        }
    }
}
