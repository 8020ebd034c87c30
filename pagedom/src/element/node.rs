use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::style::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the page tree.
///
/// Fields are public; builder methods exist for tree construction, and the
/// class/attribute helpers keep mutation idempotent.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Page markup
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,

    /// Live value for input-like elements. `None` for anything that does
    /// not accept input.
    pub value: Option<String>,

    // Content
    pub content: Content,

    // Visual
    pub style: Style,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            value: None,
            content: Content::None,
            style: Style::default(),
            focusable: false,
            clickable: false,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("span"),
            tag: "span".to_string(),
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    /// Create an input element of the given type (`text`, `email`, `tel`, …).
    pub fn input(input_type: impl Into<String>) -> Self {
        let mut el = Self {
            id: generate_id("input"),
            tag: "input".to_string(),
            value: Some(String::new()),
            focusable: true,
            ..Default::default()
        };
        el.attrs.insert("type".to_string(), input_type.into());
        el
    }

    pub fn textarea() -> Self {
        Self {
            id: generate_id("textarea"),
            tag: "textarea".to_string(),
            value: Some(String::new()),
            focusable: true,
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            tag: "button".to_string(),
            content: Content::Text(label.into()),
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Visual

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Children

    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    // Class helpers (idempotent)

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // Attribute helpers

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    // Value helpers

    /// The live input value, empty string for elements without one.
    pub fn value_text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    // Content helpers

    /// Text content of this node, empty string if none.
    pub fn text_content(&self) -> &str {
        self.content.as_text().unwrap_or("")
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            // Existing text survives as a leading text node
            Content::Text(text) => {
                let text_node = Element::span(std::mem::take(text));
                self.content = Content::Children(vec![text_node, child]);
            }
        }
    }

    pub fn insert_child_front(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.insert(0, child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                let text_node = Element::span(std::mem::take(text));
                self.content = Content::Children(vec![child, text_node]);
            }
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }
}
