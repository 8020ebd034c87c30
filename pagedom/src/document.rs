use crate::element::{find_element, find_element_mut, remove_element, Content, Element};
use crate::layout::Rect;
use crate::selector::Selector;

/// A style block injected into the document head, keyed by marker ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub id: String,
    pub css: String,
}

/// The page: a body tree plus head stylesheets and view state.
///
/// Everything the enhancement engine touches flows through this type, so
/// tests can stand up a fake page and drive it deterministically.
#[derive(Debug, Clone)]
pub struct Document {
    pub head: Vec<StyleSheet>,
    pub body: Element,
    /// Window size; `x`/`y` are always zero.
    pub viewport: Rect,
    /// Vertical page scroll offset (downward positive).
    pub scroll_y: u16,
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self {
            head: Vec::new(),
            body,
            viewport: Rect::from_size(1280, 720),
            scroll_y: 0,
        }
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    /// The part of the page currently on screen, in page coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0, self.scroll_y, self.viewport.width, self.viewport.height)
    }

    pub fn set_scroll(&mut self, y: u16) {
        self.scroll_y = y;
    }

    // Element access

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    /// First element matching the selector, in document order.
    pub fn query(&self, selector: &Selector) -> Option<&Element> {
        query_element(&self.body, selector)
    }

    pub fn query_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        let id = self.query(selector)?.id.clone();
        self.find_mut(&id)
    }

    /// All elements matching the selector, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_matches(&self.body, selector, &mut out);
        out
    }

    /// Insert an element as the first child of the given parent.
    /// Returns false (and drops the element) if the parent is missing.
    pub fn insert_first_child(&mut self, parent_id: &str, element: Element) -> bool {
        match self.find_mut(parent_id) {
            Some(parent) => {
                parent.insert_child_front(element);
                true
            }
            None => false,
        }
    }

    /// Remove the element with the given ID, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        remove_element(&mut self.body, id)
    }

    // Head stylesheets

    pub fn has_stylesheet(&self, id: &str) -> bool {
        self.head.iter().any(|s| s.id == id)
    }

    /// Add a stylesheet unless one with the same marker ID already exists.
    /// Returns true if the sheet was inserted.
    pub fn ensure_stylesheet(&mut self, id: impl Into<String>, css: impl Into<String>) -> bool {
        let id = id.into();
        if self.has_stylesheet(&id) {
            return false;
        }
        self.head.push(StyleSheet {
            id,
            css: css.into(),
        });
        true
    }
}

/// First match for a selector within a subtree, in document order.
pub fn query_in<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    query_element(root, selector)
}

/// All matches for a selector within a subtree, in document order.
pub fn query_all_in<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_matches(root, selector, &mut out);
    out
}

fn query_element<'a>(element: &'a Element, selector: &Selector) -> Option<&'a Element> {
    if selector.matches(element) {
        return Some(element);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if let Some(found) = query_element(child, selector) {
                return Some(found);
            }
        }
    }

    None
}

fn collect_matches<'a>(element: &'a Element, selector: &Selector, out: &mut Vec<&'a Element>) {
    if selector.matches(element) {
        out.push(element);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_matches(child, selector, out);
        }
    }
}
