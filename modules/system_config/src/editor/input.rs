//! Input generators
//!
//! Each generator maps a field spec, its current value and an options
//! mapping to a markup fragment plus the submit name used by that fragment.

use super::error::EditorError;
use super::field::{Attrs, FieldKind, FieldSpec, FieldValue};

/// Output of one generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub submit_name: &'static str,
}

const INPUT_OPTIONS: &[&str] = &["label", "placeholder", "type", "disabled"];
const INPUT_TYPES: &[&str] = &["text", "hidden", "password", "email", "number"];
const CHECKBOX_OPTIONS: &[&str] = &["label"];

/// Render a labeled single-value input
///
/// Recognized options: `label`, `placeholder`, `type` (defaults to `text`)
/// and `disabled` (`"true"` or `"false"`). Hidden inputs carry no label.
pub fn input(spec: &FieldSpec, value: &FieldValue, attrs: &Attrs) -> Result<Rendered, EditorError> {
    check_options(spec, attrs, INPUT_OPTIONS)?;

    if matches!(spec.kind, FieldKind::Flags | FieldKind::Command) {
        return Err(EditorError::UnsupportedKind {
            generator: "input",
            field: spec.name.to_string(),
            kind: spec.kind,
        });
    }

    let input_type = attrs.get("type").map(String::as_str).unwrap_or("text");
    if !INPUT_TYPES.contains(&input_type) {
        return Err(invalid_option(
            spec,
            "type",
            format!("unsupported input type '{}'", input_type),
        ));
    }
    let disabled = flag_option(spec, attrs, "disabled")?;

    let name = spec.submit_name;
    let value = escape(&value.display());

    if input_type == "hidden" {
        return Ok(Rendered {
            html: format!(r#"<input type="hidden" name="{name}" value="{value}" />"#),
            submit_name: name,
        });
    }

    let mut html = String::from(r#"<div class="input-field col s12">"#);
    if let Some(label) = attrs.get("label") {
        html.push_str(&format!(
            r#"<label class="active" for="{name}">{}</label>"#,
            escape(label)
        ));
    }
    html.push_str(&format!(
        r#"<input id="{name}" type="{input_type}" name="{name}" value="{value}""#
    ));
    if let Some(placeholder) = attrs.get("placeholder") {
        html.push_str(&format!(r#" placeholder="{}""#, escape(placeholder)));
    }
    if disabled {
        html.push_str(" disabled");
    }
    html.push_str(" /></div>");

    Ok(Rendered {
        html,
        submit_name: name,
    })
}

/// Render one toggle per option
///
/// A `Bool` field takes exactly one option whose value is `true`. A `Flags`
/// field checks every option present in its value. A `Command` field always
/// renders unchecked.
pub fn checkbox(
    spec: &FieldSpec,
    value: &FieldValue,
    attrs: &Attrs,
    options: &[(String, String)],
) -> Result<Rendered, EditorError> {
    check_options(spec, attrs, CHECKBOX_OPTIONS)?;

    if options.is_empty() {
        return Err(invalid_option(
            spec,
            "options",
            "at least one option is required".to_string(),
        ));
    }

    let checked: Vec<bool> = match (spec.kind, value) {
        (FieldKind::Bool, FieldValue::Bool(on)) => {
            if options.len() != 1 || options[0].0 != "true" {
                return Err(invalid_option(
                    spec,
                    "options",
                    "a boolean toggle takes exactly one 'true' option".to_string(),
                ));
            }
            vec![*on]
        }
        (FieldKind::Flags, FieldValue::Flags(set)) => options
            .iter()
            .map(|(flag, _)| set.iter().any(|s| s == flag))
            .collect(),
        (FieldKind::Command, _) => vec![false; options.len()],
        (FieldKind::Text | FieldKind::Integer, _) => {
            return Err(EditorError::UnsupportedKind {
                generator: "checkbox",
                field: spec.name.to_string(),
                kind: spec.kind,
            })
        }
        (_, other) => {
            return Err(EditorError::InvalidValue {
                field: spec.name.to_string(),
                value: other.display().into_owned(),
            })
        }
    };

    let name = spec.submit_name;
    let mut html = String::from(r#"<div class="input-field col s12">"#);
    if let Some(label) = attrs.get("label") {
        html.push_str(&format!(r#"<label class="active">{}</label>"#, escape(label)));
    }
    html.push_str(r#"<div class="checkbox-list">"#);
    for (i, ((flag, text), on)) in options.iter().zip(checked).enumerate() {
        html.push_str(&format!(
            r#"<p><input type="checkbox" id="{name}-{i}" name="{name}" value="{}"{} /><label for="{name}-{i}">{}</label></p>"#,
            escape(flag),
            if on { " checked" } else { "" },
            escape(text),
        ));
    }
    html.push_str("</div></div>");

    Ok(Rendered {
        html,
        submit_name: name,
    })
}

fn check_options(spec: &FieldSpec, attrs: &Attrs, allowed: &[&str]) -> Result<(), EditorError> {
    match attrs.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(invalid_option(spec, key, "unrecognized option".to_string())),
        None => Ok(()),
    }
}

fn flag_option(spec: &FieldSpec, attrs: &Attrs, key: &str) -> Result<bool, EditorError> {
    match attrs.get(key).map(String::as_str) {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(invalid_option(
            spec,
            key,
            format!("expected 'true' or 'false', got '{}'", other),
        )),
    }
}

fn invalid_option(spec: &FieldSpec, key: &str, reason: String) -> EditorError {
    EditorError::InvalidOption {
        field: spec.name.to_string(),
        key: key.to_string(),
        reason,
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
