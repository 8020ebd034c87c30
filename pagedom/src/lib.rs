pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod schedule;
pub mod selector;
pub mod style;
pub mod transition;

pub use document::{query_all_in, query_in, Document, StyleSheet};
pub use element::{find_element, find_element_mut, find_parent_mut, Content, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_clickable, hit_test_matching};
pub use layout::{content_height, LayoutResult, Rect};
pub use schedule::{Scheduler, TaskHandle};
pub use selector::{Selector, SelectorError};
pub use style::{Color, Style};
pub use transition::{Easing, Tween};
