//! Entry point wiring the behaviors and the validator over one document.

use std::time::Instant;

use pagedom::{content_height, hit_test_matching, Document, Event, LayoutResult, Rect};

use crate::behavior::{ensure_styles, Counters, KeyNav, Reveal, Ripple, SmoothScroll};
use crate::config::EnhanceConfig;
use crate::validator::FormValidator;

/// Installs and drives every page enhancement.
///
/// The host owns the document, its layout, and the clock; the enhancer is
/// handed all three on every call, so there is no ambient state anywhere.
#[derive(Debug)]
pub struct Enhancer {
    config: EnhanceConfig,
    validator: FormValidator,
    scroll: SmoothScroll,
    reveal: Reveal,
    counters: Counters,
    ripple: Ripple,
    keynav: KeyNav,
}

impl Enhancer {
    /// Inject styles, bind the validator, and snapshot the marked elements.
    pub fn install(doc: &mut Document, config: EnhanceConfig) -> Self {
        ensure_styles(doc, &config);
        let validator = FormValidator::bind(doc, &config);
        let reveal = Reveal::observe(doc, &config);
        let counters = Counters::bind(doc, &config);
        let scroll = SmoothScroll::new(&config);
        let ripple = Ripple::new(&config);
        let keynav = KeyNav::new(&config);

        log::info!("page enhancements installed");

        Self {
            config,
            validator,
            scroll,
            reveal,
            counters,
            ripple,
            keynav,
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn keynav(&self) -> &KeyNav {
        &self.keynav
    }

    /// Route one host-dispatched event. Events are handled strictly in the
    /// order the host delivers them.
    pub fn handle_event(
        &mut self,
        doc: &mut Document,
        layout: &LayoutResult,
        event: &Event,
        now: Instant,
    ) {
        match event {
            Event::Click { x, y, .. } => {
                self.keynav.on_pointer(doc);
                self.ripple.on_click(doc, layout, *x, *y, now);

                let anchor_attr = self.config.markers.anchor_attr.clone();
                let link = hit_test_matching(layout, &doc.body, *x, *y, &|el| {
                    el.get_attr(&anchor_attr)
                        .is_some_and(|href| href.starts_with('#'))
                });
                if let Some(link_id) = link {
                    self.scroll.on_click(doc, layout, &link_id, now);
                }
            }

            Event::PointerMove { x, y } => {
                self.keynav.on_pointer(doc);
                self.ripple.on_pointer_move(doc, layout, *x, *y);
            }

            Event::Input { target, value } => {
                if let Some(el) = doc.find_mut(target) {
                    el.set_value(value.as_str());
                }
                self.validator.handle_input(doc, target);
            }

            Event::Blur { target } => {
                self.validator.handle_blur(doc, target);
            }

            // Focus styling is the stylesheet's job
            Event::Focus { .. } => {}

            Event::Submit { target } => {
                if self.validator.form_id() == Some(target.as_str()) {
                    self.validator.handle_submit(doc, now);
                }
            }

            Event::Key { key, modifiers, .. } => {
                for emitted in self.keynav.on_key(doc, *key, *modifiers) {
                    if let Event::Blur { target } = &emitted {
                        self.validator.handle_blur(doc, target);
                    }
                }
            }

            Event::Scroll { delta_y } => {
                let max_scroll = content_height(layout).saturating_sub(doc.viewport.height);
                let next = (doc.scroll_y as i32 + *delta_y as i32).clamp(0, max_scroll as i32);
                doc.set_scroll(next as u16);
                self.reveal.check(doc, layout, now);
                self.counters.check(doc, layout, now);
            }

            Event::Resize { width, height } => {
                doc.viewport = Rect::from_size(*width, *height);
            }
        }
    }

    /// Advance every time-driven behavior to `now`.
    pub fn tick(&mut self, doc: &mut Document, layout: &LayoutResult, now: Instant) {
        self.scroll.tick(doc, now);
        self.reveal.check(doc, layout, now);
        self.reveal.tick(doc, now);
        self.counters.check(doc, layout, now);
        self.counters.tick(doc, now);
        self.ripple.tick(doc, now);
        self.validator.tick(doc, now);
    }
}
