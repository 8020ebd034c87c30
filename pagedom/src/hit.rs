use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest element at the given coordinates, clickable or not.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_matching(layout, root, x, y, &|_| true)
}

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test_clickable(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_matching(layout, root, x, y, &|el| el.clickable)
}

/// Find the deepest element at the given coordinates satisfying a predicate.
pub fn hit_test_matching(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    predicate: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_matching(layout, child, x, y, predicate) {
                return Some(id);
            }
        }
    }

    if predicate(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
