//! Declarative field-to-editor mapping engine
//!
//! An [`Editable`] entity declares its fields and an ordered descriptor list;
//! [`form::render`] turns that into one HTML fragment and
//! [`submission::decode`] maps a submitted form back onto the entity.

pub mod error;
pub mod field;
pub mod form;
pub mod input;
pub mod submission;

pub use error::EditorError;
pub use field::{attrs, Attrs, Editable, Field, FieldKind, FieldSpec, FieldValue, Generator, View};
pub use form::{compose, render, ComposedView, EditorChrome};
pub use submission::{decode, Commands, Decoded, Submission};
