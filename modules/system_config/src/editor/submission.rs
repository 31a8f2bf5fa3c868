//! Submission decoding
//!
//! Maps submitted `(name, value)` pairs back onto a copy of the prior entity,
//! driven by the same descriptor list the composer renders from. Locked
//! descriptors are never read from the submission, so their prior value
//! survives whatever the client sends.

use super::error::EditorError;
use super::field::{Editable, Field, FieldKind, FieldValue, Generator, View};
use std::collections::HashSet;
use std::num::IntErrorKind;

/// Submitted form values in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pairs: Vec<(String, String)>,
}

impl Submission {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn first<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.values(name).next()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }
}

impl FromIterator<(String, String)> for Submission {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().collect())
    }
}

/// Command flags decoded from a submission, keyed by field identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commands {
    entries: Vec<(&'static str, Vec<String>)>,
}

impl Commands {
    pub fn flags(&self, field: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, flags)| flags.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, field: &str, flag: &str) -> bool {
        self.flags(field).iter().any(|f| f == flag)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, flags)| flags.is_empty())
    }
}

/// Result of decoding a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<E> {
    pub entity: E,
    pub commands: Commands,
}

/// Decode `submission` onto a copy of `prior`
pub fn decode<E>(prior: &E, submission: &Submission) -> Result<Decoded<E>, EditorError>
where
    E: Editable + Clone,
{
    let fields = prior.editor_fields();
    let mut entity = prior.clone();
    let mut commands = Commands::default();

    let locked: HashSet<&str> = fields
        .iter()
        .filter(|f| f.locked)
        .filter_map(Field::field_name)
        .collect();
    let mut seen: HashSet<&str> = HashSet::new();

    for field in &fields {
        let View::Generate {
            generator,
            field: name,
            ..
        } = &field.view
        else {
            continue;
        };
        if locked.contains(name) || !seen.insert(*name) {
            continue;
        }

        let spec = prior.spec(name)?;
        let submitted = submission.values(spec.submit_name);

        match spec.kind {
            FieldKind::Text => {
                if let Some(value) = submission.first(spec.submit_name) {
                    entity.set_value(name, FieldValue::Text(value.to_string()))?;
                }
            }
            FieldKind::Integer => {
                if let Some(raw) = submission.first(spec.submit_name) {
                    let parsed = parse_integer(name, raw)?;
                    entity.set_value(name, FieldValue::Integer(parsed))?;
                }
            }
            FieldKind::Bool => {
                let on = submitted
                    .into_iter()
                    .any(|v| matches!(v, "true" | "on" | "1"));
                entity.set_value(name, FieldValue::Bool(on))?;
            }
            FieldKind::Flags | FieldKind::Command => {
                let Generator::Checkbox { options } = generator else {
                    return Err(EditorError::UnsupportedKind {
                        generator: "input",
                        field: name.to_string(),
                        kind: spec.kind,
                    });
                };
                let flags = checked_options(options, submitted);
                if spec.kind == FieldKind::Command {
                    commands.entries.push((spec.name, flags));
                } else {
                    entity.set_value(name, FieldValue::Flags(flags))?;
                }
            }
        }
    }

    Ok(Decoded { entity, commands })
}

// Empty is 0; numbers beyond i64 saturate and are left to the entity to clamp
fn parse_integer(field: &str, raw: &str) -> Result<i64, EditorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(EditorError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    })
}

// Keeps only declared option values, in declared order
fn checked_options<'a>(
    options: &[(String, String)],
    submitted: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let submitted: Vec<&str> = submitted.collect();
    options
        .iter()
        .filter(|(flag, _)| submitted.contains(&flag.as_str()))
        .map(|(flag, _)| flag.clone())
        .collect()
}
