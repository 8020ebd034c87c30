//! The form validator: field descriptors, rule evaluation, error marking,
//! and the submission success sequence.

mod rules;

pub use rules::Rule;

use std::time::{Duration, Instant};

use pagedom::{
    find_parent_mut, query_in, Content, Document, Element, Scheduler, Selector, TaskHandle,
};

use crate::config::EnhanceConfig;

/// Static configuration binding a form field to its validation rules and
/// shared error message.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub selector: Selector,
    pub rules: Vec<Rule>,
    pub message: String,
}

/// Per-field validation state, tracked explicitly rather than derived from
/// the live tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Clean,
    Error,
}

#[derive(Debug)]
struct FieldEntry {
    descriptor: FieldDescriptor,
    state: FieldState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitPhase {
    ResetAndFade,
    RemoveBanner,
}

#[derive(Debug)]
struct PendingSequence {
    banner_id: String,
    reset: TaskHandle,
    remove: TaskHandle,
}

/// Validates one form's fields and gates submission on all of them.
///
/// Bound to a single form for its whole life. When no form matches the
/// lookup chain the instance is inert: every operation no-ops.
#[derive(Debug)]
pub struct FormValidator {
    form_id: Option<String>,
    fields: Vec<FieldEntry>,
    timers: Scheduler<SubmitPhase>,
    pending: Option<PendingSequence>,
    error_class: String,
    error_message_class: String,
    banner_class: String,
    success_message: String,
    banner_hold: Duration,
    banner_fade: Duration,
}

impl FormValidator {
    /// Locate the form via the configured lookup chain and bind the field
    /// descriptors in declaration order.
    pub fn bind(doc: &Document, config: &EnhanceConfig) -> Self {
        let form_id = config.form.lookup.iter().find_map(|expr| {
            let selector = match Selector::parse(expr) {
                Ok(s) => s,
                Err(e) => {
                    log::debug!("skipping form lookup '{expr}': {e}");
                    return None;
                }
            };
            doc.query(&selector).map(|el| el.id.clone())
        });

        if form_id.is_none() {
            log::debug!("no form matched the lookup chain; validator is inert");
        }

        let fields = config
            .form
            .fields
            .iter()
            .filter_map(|fc| match Selector::parse(&fc.selector) {
                Ok(selector) => Some(FieldEntry {
                    descriptor: FieldDescriptor {
                        name: fc.name.clone(),
                        selector,
                        rules: fc.rules.iter().map(|s| Rule::parse(s)).collect(),
                        message: fc.message.clone(),
                    },
                    state: FieldState::Clean,
                }),
                Err(e) => {
                    log::debug!("skipping field '{}': {e}", fc.name);
                    None
                }
            })
            .collect();

        Self {
            form_id,
            fields,
            timers: Scheduler::new(),
            pending: None,
            error_class: config.classes.error.clone(),
            error_message_class: config.classes.error_message.clone(),
            banner_class: config.classes.success_banner.clone(),
            success_message: config.form.success_message.clone(),
            banner_hold: Duration::from_millis(config.timing.banner_hold_ms),
            banner_fade: Duration::from_millis(config.timing.banner_fade_ms),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.form_id.is_none()
    }

    pub fn form_id(&self) -> Option<&str> {
        self.form_id.as_deref()
    }

    pub fn field_state(&self, name: &str) -> Option<FieldState> {
        self.fields
            .iter()
            .find(|f| f.descriptor.name == name)
            .map(|f| f.state)
    }

    pub fn has_pending_sequence(&self) -> bool {
        self.pending.is_some()
    }

    /// ID of the currently displayed success banner, if any.
    pub fn current_banner(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.banner_id.as_str())
    }

    /// Validate the field backing the given element.
    ///
    /// Elements no descriptor governs are valid by definition and are left
    /// untouched. Rules run in declared order; the first failure marks the
    /// field and stops. A full pass clears any existing marker.
    pub fn validate_field(&mut self, doc: &mut Document, element_id: &str) -> bool {
        let Some(index) = self.index_for_element(doc, element_id) else {
            return true;
        };
        self.validate_index(doc, index, element_id)
    }

    /// Blur re-checks the field.
    pub fn handle_blur(&mut self, doc: &mut Document, element_id: &str) -> bool {
        self.validate_field(doc, element_id)
    }

    /// Input clears the error without re-validating. The field may still be
    /// invalid; the next blur or submit re-checks it.
    pub fn handle_input(&mut self, doc: &mut Document, element_id: &str) {
        if let Some(index) = self.index_for_element(doc, element_id) {
            self.clear_error(doc, index, element_id);
        }
    }

    /// Validate every field in declaration order (all of them, even after a
    /// failure) and, when the whole form passes, run the success sequence.
    /// Returns overall validity.
    pub fn handle_submit(&mut self, doc: &mut Document, now: Instant) -> bool {
        let Some(form_id) = self.form_id.clone() else {
            return false;
        };

        let mut all_valid = true;
        for index in 0..self.fields.len() {
            let Some(element_id) = self.resolve_index(doc, index) else {
                continue;
            };
            let valid = self.validate_index(doc, index, &element_id);
            all_valid = all_valid && valid;
        }

        if all_valid {
            self.start_success_sequence(doc, &form_id, now);
        }
        all_valid
    }

    /// Drive the pending success sequence.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        for phase in self.timers.poll(now) {
            match phase {
                SubmitPhase::ResetAndFade => {
                    if let Some(form_id) = self.form_id.clone() {
                        if let Some(form) = doc.find_mut(&form_id) {
                            reset_fields(form);
                        }
                    }
                    if let Some(pending) = &self.pending {
                        if let Some(banner) = doc.find_mut(&pending.banner_id) {
                            banner.style.opacity = Some(0.0);
                        }
                    }
                }
                SubmitPhase::RemoveBanner => {
                    if let Some(pending) = self.pending.take() {
                        doc.remove(&pending.banner_id);
                    }
                }
            }
        }
    }

    fn validate_index(&mut self, doc: &mut Document, index: usize, element_id: &str) -> bool {
        let value = doc
            .find(element_id)
            .map(|el| el.value_text().to_string())
            .unwrap_or_default();

        // all() stops at the first failing rule
        let passes = self.fields[index]
            .descriptor
            .rules
            .iter()
            .all(|rule| rule.check(&value));

        if passes {
            self.clear_error(doc, index, element_id);
        } else {
            self.mark_error(doc, index, element_id);
        }
        passes
    }

    /// Add the error class and ensure exactly one message node sits in the
    /// field's container. Repeated marks reuse the existing node.
    fn mark_error(&mut self, doc: &mut Document, index: usize, element_id: &str) {
        self.fields[index].state = FieldState::Error;
        let message = self.fields[index].descriptor.message.clone();

        if let Some(el) = doc.find_mut(element_id) {
            el.add_class(self.error_class.as_str());
        }

        let Some(parent) = find_parent_mut(&mut doc.body, element_id) else {
            return;
        };
        let existing = parent
            .content
            .children()
            .iter()
            .position(|c| c.has_class(&self.error_message_class));
        match existing {
            Some(pos) => {
                if let Content::Children(children) = &mut parent.content {
                    children[pos].set_text(message);
                }
            }
            None => {
                parent.push_child(
                    Element::span(message).class(self.error_message_class.as_str()),
                );
            }
        }
    }

    /// Remove the error class and the message node. Safe to repeat.
    fn clear_error(&mut self, doc: &mut Document, index: usize, element_id: &str) {
        self.fields[index].state = FieldState::Clean;

        if let Some(el) = doc.find_mut(element_id) {
            el.remove_class(&self.error_class);
        }

        let Some(parent) = find_parent_mut(&mut doc.body, element_id) else {
            return;
        };
        if let Content::Children(children) = &mut parent.content {
            children.retain(|c| !c.has_class(&self.error_message_class));
        }
    }

    /// Insert the banner and schedule the reset/remove pair. A sequence
    /// already in flight is cancelled and its banner dropped first, so at
    /// most one banner ever exists.
    fn start_success_sequence(&mut self, doc: &mut Document, form_id: &str, now: Instant) {
        self.cancel_pending(doc);

        let banner = Element::div()
            .class(self.banner_class.as_str())
            .text(self.success_message.as_str());
        let banner_id = banner.id.clone();
        doc.insert_first_child(form_id, banner);

        let reset = self.timers.schedule(now + self.banner_hold, SubmitPhase::ResetAndFade);
        let remove = self.timers.schedule(
            now + self.banner_hold + self.banner_fade,
            SubmitPhase::RemoveBanner,
        );
        self.pending = Some(PendingSequence {
            banner_id,
            reset,
            remove,
        });
    }

    fn cancel_pending(&mut self, doc: &mut Document) {
        if let Some(pending) = self.pending.take() {
            self.timers.cancel(pending.reset);
            self.timers.cancel(pending.remove);
            doc.remove(&pending.banner_id);
        }
    }

    /// Live element currently governed by the descriptor at `index`,
    /// resolved within the bound form.
    fn resolve_index(&self, doc: &Document, index: usize) -> Option<String> {
        let form = doc.find(self.form_id.as_deref()?)?;
        let el = query_in(form, &self.fields[index].descriptor.selector)?;
        Some(el.id.clone())
    }

    fn index_for_element(&self, doc: &Document, element_id: &str) -> Option<usize> {
        (0..self.fields.len())
            .find(|&i| self.resolve_index(doc, i).as_deref() == Some(element_id))
    }
}

/// Reset every input-like descendant to its empty state.
fn reset_fields(element: &mut Element) {
    if element.value.is_some() {
        element.value = Some(String::new());
    }
    if let Content::Children(children) = &mut element.content {
        for child in children {
            reset_fields(child);
        }
    }
}
