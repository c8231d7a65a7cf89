//! Domain models with validation at construction
//!
//! Admin input is validated before it reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod slug;
pub mod fields;
pub mod post;
pub mod category;

pub use validation::{Validate, ValidationError};
pub use slug::validate_slug;
pub use post::{NewPost, Post, PostPatch, DEFAULT_AUTHOR, DEFAULT_CARD_COLOR};
pub use category::Category;
