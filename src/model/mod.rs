//! Document model types for structured CV content.
//!
//! This module defines the representation that bridges the Markdown
//! dialect and the renderers: a contact block followed by ordered
//! sections of ordered items. The model is a plain value type -- every
//! operation in the crate consumes it by reference and produces a
//! fresh copy, so holders never share mutable state.

mod contact;
mod document;
mod item;
mod legacy;
mod section;

pub use contact::{ContactInfo, ContactLink};
pub use document::{CvDocument, Properties, PropertyValue};
pub use item::CvItem;
pub use section::CvSection;

pub(crate) use legacy::normalize_legacy;
