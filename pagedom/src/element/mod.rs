mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the parent of the element with the given ID, mutably.
/// Returns None for the root or an unknown ID.
pub fn find_parent_mut<'a>(root: &'a mut Element, child_id: &str) -> Option<&'a mut Element> {
    let is_direct_parent = root
        .content
        .children()
        .iter()
        .any(|c| c.id == child_id);
    if is_direct_parent {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_parent_mut(child, child_id) {
                return Some(found);
            }
        }
    }

    None
}

/// Remove the element with the given ID from the tree, returning it.
/// The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    if let Content::Children(children) = &mut root.content {
        if let Some(pos) = children.iter().position(|c| c.id == id) {
            return Some(children.remove(pos));
        }
        for child in children {
            if let Some(removed) = remove_element(child, id) {
                return Some(removed);
            }
        }
    }

    None
}
