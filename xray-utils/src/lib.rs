mod document;
mod endpoint;
mod error;
mod loader;
mod prompt;
mod vless;

pub use document::Node;
pub use endpoint::*;
pub use error::*;
pub use loader::*;
pub use prompt::*;
pub use vless::*;

/// Placeholder Xray clients accept for an unset link parameter.
pub const NONE: &str = "none";
