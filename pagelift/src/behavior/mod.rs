pub mod anchor;
pub mod counter;
pub mod keynav;
pub mod reveal;
pub mod ripple;
pub mod styles;

pub use anchor::SmoothScroll;
pub use counter::Counters;
pub use keynav::KeyNav;
pub use reveal::Reveal;
pub use ripple::Ripple;
pub use styles::ensure_styles;
