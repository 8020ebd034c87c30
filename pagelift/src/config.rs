//! Named configuration for the page markers, class names, and timings the
//! enhancement behaviors act on. Defaults carry the page contract; hosts may
//! override any group with a JSON blob.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid enhancement config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhanceConfig {
    pub form: FormConfig,
    pub markers: MarkerConfig,
    pub classes: ClassConfig,
    pub timing: TimingConfig,
    /// Marker ID of the injected stylesheet.
    pub stylesheet_id: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            markers: MarkerConfig::default(),
            classes: ClassConfig::default(),
            timing: TimingConfig::default(),
            stylesheet_id: "page-enhance-styles".to_string(),
        }
    }
}

impl EnhanceConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Form lookup, field descriptors, and the submission banner text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Lookup expressions tried in order; the first match wins.
    pub lookup: Vec<String>,
    pub fields: Vec<FieldConfig>,
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            lookup: vec![
                "form[name=\"contact\"]".to_string(),
                ".contact-form".to_string(),
                "form".to_string(),
            ],
            fields: vec![
                FieldConfig {
                    name: "name".to_string(),
                    selector: "input[name=\"name\"]".to_string(),
                    rules: vec!["required".to_string(), "minLength:2".to_string()],
                    message: "Please enter your name (at least 2 characters)".to_string(),
                },
                FieldConfig {
                    name: "email".to_string(),
                    selector: "input[type=\"email\"]".to_string(),
                    rules: vec!["required".to_string(), "email".to_string()],
                    message: "Please enter a valid email address".to_string(),
                },
                FieldConfig {
                    name: "phone".to_string(),
                    selector: "input[type=\"tel\"]".to_string(),
                    rules: vec!["phone".to_string()],
                    message: "Please enter a valid phone number".to_string(),
                },
                FieldConfig {
                    name: "message".to_string(),
                    selector: "textarea[name=\"message\"]".to_string(),
                    rules: vec!["required".to_string(), "minLength:10".to_string()],
                    message: "Please enter a message (at least 10 characters)".to_string(),
                },
            ],
            success_message: "Thank you! Your message has been sent.".to_string(),
        }
    }
}

/// One field: lookup selector, ordered rule specifiers, shared message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,
    pub selector: String,
    pub rules: Vec<String>,
    pub message: String,
}

/// Attribute and class markers the page uses to opt elements in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    /// Attribute flagging an element for scroll reveal.
    pub reveal_attr: String,
    /// Attribute flagging the stats section.
    pub stats_attr: String,
    /// Attribute flagging a counter inside the stats section.
    pub counter_attr: String,
    /// Attribute on a counter carrying its numeric end value.
    pub counter_target_attr: String,
    /// Class marking ripple/hover targets.
    pub interactive_class: String,
    /// Attribute carrying `#id` anchor references.
    pub anchor_attr: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            reveal_attr: "data-animate".to_string(),
            stats_attr: "data-stats".to_string(),
            counter_attr: "data-counter".to_string(),
            counter_target_attr: "data-target".to_string(),
            interactive_class: "btn".to_string(),
            anchor_attr: "href".to_string(),
        }
    }
}

/// Class names the behaviors toggle on live elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassConfig {
    pub error: String,
    pub error_message: String,
    pub success_banner: String,
    pub visible: String,
    pub keyboard_nav: String,
    pub hover: String,
    pub ripple: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            error: "error".to_string(),
            error_message: "error-message".to_string(),
            success_banner: "success-message".to_string(),
            visible: "visible".to_string(),
            keyboard_nav: "keyboard-nav".to_string(),
            hover: "hover".to_string(),
            ripple: "ripple".to_string(),
        }
    }
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// How long the success banner stays before the form resets.
    pub banner_hold_ms: u64,
    /// Fade-out span between the reset and the banner's removal.
    pub banner_fade_ms: u64,
    pub ripple_ms: u64,
    pub counter_ms: u64,
    pub reveal_ms: u64,
    pub scroll_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            banner_hold_ms: 2000,
            banner_fade_ms: 300,
            ripple_ms: 600,
            counter_ms: 2000,
            reveal_ms: 600,
            scroll_ms: 500,
        }
    }
}
