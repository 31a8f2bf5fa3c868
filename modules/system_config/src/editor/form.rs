//! View composer
//!
//! Walks an entity's field descriptors in declared order, invokes the bound
//! generator for each one and concatenates the fragments. A single failing
//! descriptor fails the whole render.

use super::error::EditorError;
use super::field::{Attrs, Editable, Field, Generator, View};
use super::input::{self, escape, Rendered};

/// Composed field markup and the submit names it contains, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedView {
    pub markup: String,
    pub submit_names: Vec<&'static str>,
}

/// Containing document chrome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorChrome {
    pub title: String,
    /// Submission target path
    pub action: String,
}

/// Compose every descriptor of `fields` against the entity's current values
pub fn compose(entity: &dyn Editable, fields: &[Field]) -> Result<ComposedView, EditorError> {
    let mut view = ComposedView {
        markup: String::new(),
        submit_names: Vec::new(),
    };

    for field in fields {
        match &field.view {
            View::Literal(markup) => view.markup.push_str(markup),
            View::Generate {
                generator,
                field: name,
                attrs,
            } => {
                if field.locked && *generator != Generator::Input {
                    return Err(EditorError::InvalidOption {
                        field: name.to_string(),
                        key: "locked".to_string(),
                        reason: "only input descriptors can be locked".to_string(),
                    });
                }
                if field.locked {
                    // Visible display copy, then the hidden carrier of the same value
                    let mut display = attrs.clone();
                    display.insert("disabled".to_string(), "true".to_string());
                    push(&mut view, generate(entity, generator, name, &display)?);

                    let mut carrier = Attrs::new();
                    carrier.insert("type".to_string(), "hidden".to_string());
                    push(&mut view, generate(entity, &Generator::Input, name, &carrier)?);
                } else {
                    push(&mut view, generate(entity, generator, name, attrs)?);
                }
            }
        }
    }

    Ok(view)
}

/// Compose the fields and wrap them in the editor document
pub fn render(
    entity: &dyn Editable,
    fields: &[Field],
    chrome: &EditorChrome,
) -> Result<String, EditorError> {
    let view = compose(entity, fields)?;

    let mut doc = String::with_capacity(view.markup.len() + 1024);
    doc.push_str(&format!(
        r#"<div class="card"><div class="card-content"><div class="card-title">{}</div></div><form action="{}" method="post">"#,
        escape(&chrome.title),
        escape(&chrome.action),
    ));
    doc.push_str(&view.markup);
    doc.push_str("</form></div>");
    doc.push_str(LAYOUT_SCRIPT);
    Ok(doc)
}

fn generate(
    entity: &dyn Editable,
    generator: &Generator,
    name: &str,
    attrs: &Attrs,
) -> Result<Rendered, EditorError> {
    let spec = entity.spec(name)?;
    let value = entity
        .value(name)
        .ok_or_else(|| EditorError::UnknownField(name.to_string()))?;

    match generator {
        Generator::Input => input::input(spec, &value, attrs),
        Generator::Checkbox { options } => input::checkbox(spec, &value, attrs, options),
    }
}

fn push(view: &mut ComposedView, rendered: Rendered) {
    view.markup.push_str(&rendered.html);
    view.submit_names.push(rendered.submit_name);
}

// Layout only: the enclosing admin page's default fields are hidden and its
// save button moved into the card header.
const LAYOUT_SCRIPT: &str = r#"<script>
$(function() {
    var fields = $('.default-fields');
    fields.css('position', 'relative');
    fields.find('input:not([type=submit])').remove();
    fields.find('label').remove();
    fields.find('button').css({ position: 'absolute', top: '-10px', right: '0px' });
    fields.find('td').css('float', 'right');

    var contentOnly = $('.content-only.__system');
    contentOnly.hide();
    contentOnly.find('input, textarea, select').attr('name', '');
});
</script>"#;
