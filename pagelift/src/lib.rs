pub mod behavior;
pub mod config;
pub mod enhance;
pub mod validator;

pub use config::{ConfigError, EnhanceConfig};
pub use enhance::Enhancer;
pub use validator::{FieldDescriptor, FieldState, FormValidator, Rule};
