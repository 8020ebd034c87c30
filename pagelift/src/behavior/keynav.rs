use pagedom::{Document, Event, FocusState, Key, Modifiers};

use crate::config::EnhanceConfig;

/// Keyboard-navigation affordance: Tab enters keyboard mode (body gains the
/// keyboard-nav class, focus cycles through focusable elements), any pointer
/// activity leaves it.
#[derive(Debug)]
pub struct KeyNav {
    nav_class: String,
    focus: FocusState,
    keyboard_mode: bool,
}

impl KeyNav {
    pub fn new(config: &EnhanceConfig) -> Self {
        Self {
            nav_class: config.classes.keyboard_nav.clone(),
            focus: FocusState::new(),
            keyboard_mode: false,
        }
    }

    pub fn keyboard_mode(&self) -> bool {
        self.keyboard_mode
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Handle a key press. Returns the Focus/Blur events a focus change
    /// produces, in blur-then-focus order, for the caller to route.
    pub fn on_key(&mut self, doc: &mut Document, key: Key, modifiers: Modifiers) -> Vec<Event> {
        if key != Key::Tab {
            return Vec::new();
        }

        if !self.keyboard_mode {
            self.keyboard_mode = true;
            doc.body.add_class(self.nav_class.as_str());
        }

        let previous = self.focus.focused().map(str::to_string);
        let next = if modifiers.shift {
            self.focus.focus_prev(&doc.body)
        } else {
            self.focus.focus_next(&doc.body)
        };

        let mut events = Vec::new();
        if let Some(next) = next {
            if let Some(previous) = previous {
                events.push(Event::Blur { target: previous });
            }
            events.push(Event::Focus { target: next });
        }
        events
    }

    /// Pointer activity leaves keyboard mode.
    pub fn on_pointer(&mut self, doc: &mut Document) {
        if self.keyboard_mode {
            self.keyboard_mode = false;
            doc.body.remove_class(&self.nav_class);
        }
    }
}
