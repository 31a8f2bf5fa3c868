//! Field specs, values and descriptors
//!
//! An editable entity declares two things: a static table of [`FieldSpec`]s
//! describing every field it owns (internal identifier, submit name, kind),
//! and an ordered list of [`Field`] descriptors describing the form layout.

use super::error::EditorError;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Value kind of an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single string value
    Text,
    /// Toggle whose presence in a submission means `true`
    Bool,
    /// Signed integer submitted as text
    Integer,
    /// Persisted list of flag strings
    Flags,
    /// Transient list of flag strings, decoded as a command and never stored
    Command,
}

/// Static description of one entity field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Internal identifier used by descriptors (e.g. `CacheMaxAge`)
    pub name: &'static str,
    /// Canonical external name used as the markup `name` attribute
    pub submit_name: &'static str,
    pub kind: FieldKind,
}

/// Current value of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    Flags(Vec<String>),
}

impl FieldValue {
    /// Value as rendered into a single-value input
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Bool(b) => Cow::Owned(b.to_string()),
            FieldValue::Integer(i) => Cow::Owned(i.to_string()),
            FieldValue::Flags(flags) => Cow::Owned(flags.join(",")),
        }
    }
}

/// Options mapping of a generator invocation (`label`, `type`, ...)
pub type Attrs = BTreeMap<String, String>;

/// Build an [`Attrs`] mapping from literal pairs
pub fn attrs<const N: usize>(pairs: [(&str, &str); N]) -> Attrs {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Generator bound to a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    Input,
    /// Checkbox toggles, one per `(flag value, display label)` in declared order
    Checkbox { options: Vec<(String, String)> },
}

/// What a descriptor renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Generate {
        generator: Generator,
        field: &'static str,
        attrs: Attrs,
    },
    /// Pre-rendered markup inserted verbatim
    Literal(Cow<'static, str>),
}

/// One entry of an entity's form layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub view: View,
    /// Read-only field: displayed, carried, but never taken from a submission
    pub locked: bool,
}

impl Field {
    pub fn input(field: &'static str, attrs: Attrs) -> Self {
        Self {
            view: View::Generate {
                generator: Generator::Input,
                field,
                attrs,
            },
            locked: false,
        }
    }

    pub fn checkbox(field: &'static str, attrs: Attrs, options: &[(&str, &str)]) -> Self {
        let options = options
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect();
        Self {
            view: View::Generate {
                generator: Generator::Checkbox { options },
                field,
                attrs,
            },
            locked: false,
        }
    }

    pub fn literal(markup: impl Into<Cow<'static, str>>) -> Self {
        Self {
            view: View::Literal(markup.into()),
            locked: false,
        }
    }

    /// Mark the descriptor read-only
    ///
    /// Only `Input` descriptors can be locked; composing a locked checkbox
    /// fails with [`EditorError::InvalidOption`].
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Field identifier for generator descriptors
    pub fn field_name(&self) -> Option<&'static str> {
        match &self.view {
            View::Generate { field, .. } => Some(*field),
            View::Literal(_) => None,
        }
    }
}

/// An entity that can be rendered into, and decoded from, an editor form
pub trait Editable {
    /// Every field the entity owns
    fn field_specs(&self) -> &'static [FieldSpec];

    /// Current value of a field, `None` for unknown identifiers
    fn value(&self, field: &str) -> Option<FieldValue>;

    /// Assign a decoded value
    fn set_value(&mut self, field: &str, value: FieldValue) -> Result<(), EditorError>;

    /// Ordered form layout
    fn editor_fields(&self) -> Vec<Field>;

    fn spec(&self, field: &str) -> Result<&'static FieldSpec, EditorError> {
        self.field_specs()
            .iter()
            .find(|spec| spec.name == field)
            .ok_or_else(|| EditorError::UnknownField(field.to_string()))
    }
}
