//! Editor declaration for the site configuration record

use crate::contract::SiteConfig;
use crate::editor::{
    attrs, form, Attrs, Editable, EditorChrome, EditorError, Field, FieldKind, FieldSpec,
    FieldValue,
};

/// Command field carrying the one-shot cache purge request
pub const CACHE_INVALIDATE_FIELD: &str = "CacheInvalidate";
/// Flag value that requests a cache purge
pub const INVALIDATE_FLAG: &str = "invalidate";

const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec { name: "Name", submit_name: "name", kind: FieldKind::Text },
    FieldSpec { name: "Domain", submit_name: "domain", kind: FieldKind::Text },
    FieldSpec { name: "BindAddress", submit_name: "bind_addr", kind: FieldKind::Text },
    FieldSpec { name: "HTTPPort", submit_name: "http_port", kind: FieldKind::Text },
    FieldSpec { name: "HTTPSPort", submit_name: "https_port", kind: FieldKind::Text },
    FieldSpec { name: "AdminEmail", submit_name: "admin_email", kind: FieldKind::Text },
    FieldSpec { name: "ClientSecret", submit_name: "client_secret", kind: FieldKind::Text },
    FieldSpec { name: "Etag", submit_name: "etag", kind: FieldKind::Text },
    FieldSpec { name: "DisableCORS", submit_name: "cors_disabled", kind: FieldKind::Bool },
    FieldSpec { name: "DisableGZIP", submit_name: "gzip_disabled", kind: FieldKind::Bool },
    FieldSpec { name: "DisableHTTPCache", submit_name: "cache_disabled", kind: FieldKind::Bool },
    FieldSpec { name: "CacheMaxAge", submit_name: "cache_max_age", kind: FieldKind::Integer },
    FieldSpec { name: CACHE_INVALIDATE_FIELD, submit_name: "cache", kind: FieldKind::Command },
    FieldSpec { name: "BackupBasicAuthUser", submit_name: "backup_basic_auth_user", kind: FieldKind::Text },
    FieldSpec { name: "BackupBasicAuthPassword", submit_name: "backup_basic_auth_password", kind: FieldKind::Text },
];

const BACKUP_INFO: &str = r#"<p class="flow-text">Database backup credentials:</p><p>Add a user name and password to restrict HTTP downloads of your database backups.</p>"#;

impl Editable for SiteConfig {
    fn field_specs(&self) -> &'static [FieldSpec] {
        FIELD_SPECS
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        let text = |s: &String| Some(FieldValue::Text(s.clone()));
        match field {
            "Name" => text(&self.name),
            "Domain" => text(&self.domain),
            "BindAddress" => text(&self.bind_addr),
            "HTTPPort" => text(&self.http_port),
            "HTTPSPort" => text(&self.https_port),
            "AdminEmail" => text(&self.admin_email),
            "ClientSecret" => text(&self.client_secret),
            "Etag" => text(&self.etag),
            "DisableCORS" => Some(FieldValue::Bool(self.disable_cors)),
            "DisableGZIP" => Some(FieldValue::Bool(self.disable_gzip)),
            "DisableHTTPCache" => Some(FieldValue::Bool(self.disable_http_cache)),
            "CacheMaxAge" => Some(FieldValue::Integer(self.cache_max_age)),
            // Not state: every render starts unchecked
            CACHE_INVALIDATE_FIELD => Some(FieldValue::Flags(Vec::new())),
            "BackupBasicAuthUser" => text(&self.backup_basic_auth_user),
            "BackupBasicAuthPassword" => text(&self.backup_basic_auth_password),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: FieldValue) -> Result<(), EditorError> {
        let spec = self.spec(field)?;
        match (spec.name, value) {
            ("Name", FieldValue::Text(v)) => self.name = v,
            ("Domain", FieldValue::Text(v)) => self.domain = v,
            ("BindAddress", FieldValue::Text(v)) => self.bind_addr = v,
            ("HTTPPort", FieldValue::Text(v)) => self.http_port = v,
            ("HTTPSPort", FieldValue::Text(v)) => self.https_port = v,
            ("AdminEmail", FieldValue::Text(v)) => self.admin_email = v,
            ("ClientSecret", FieldValue::Text(v)) => self.client_secret = v,
            ("Etag", FieldValue::Text(v)) => self.etag = v,
            ("DisableCORS", FieldValue::Bool(v)) => self.disable_cors = v,
            ("DisableGZIP", FieldValue::Bool(v)) => self.disable_gzip = v,
            ("DisableHTTPCache", FieldValue::Bool(v)) => self.disable_http_cache = v,
            ("CacheMaxAge", FieldValue::Integer(v)) => {
                self.cache_max_age = SiteConfig::clamp_cache_max_age(v)
            }
            ("BackupBasicAuthUser", FieldValue::Text(v)) => self.backup_basic_auth_user = v,
            ("BackupBasicAuthPassword", FieldValue::Text(v)) => {
                self.backup_basic_auth_password = v
            }
            (name, other) => {
                return Err(EditorError::InvalidValue {
                    field: name.to_string(),
                    value: other.display().into_owned(),
                })
            }
        }
        Ok(())
    }

    fn editor_fields(&self) -> Vec<Field> {
        vec![
            Field::input(
                "Name",
                attrs([
                    ("label", "Site name (internal use only)"),
                    ("placeholder", "Set a name for this site (internal use only)"),
                ]),
            ),
            Field::input(
                "Domain",
                attrs([
                    ("label", "Domain name (required for SSL certificate support)"),
                    ("placeholder", "e.g. www.example.com or example.com"),
                ]),
            ),
            Field::input("BindAddress", attrs([("type", "hidden")])),
            Field::input("HTTPPort", attrs([("type", "hidden")])),
            Field::input("HTTPSPort", attrs([("type", "hidden")])),
            Field::input(
                "AdminEmail",
                attrs([("label", "Administrator email (notifications and internal messages)")]),
            ),
            Field::input(
                "ClientSecret",
                attrs([("label", "Client secret (used to validate requests, DO NOT SHARE)")]),
            )
            .locked(),
            Field::input("Etag", attrs([("label", "Etag header (used for static asset cache)")]))
                .locked(),
            Field::checkbox(
                "DisableCORS",
                label(format!(
                    "Disable CORS (so only {} can fetch your data)",
                    self.domain
                )),
                &[("true", "Disable CORS")],
            ),
            Field::checkbox(
                "DisableGZIP",
                attrs([("label", "Disable GZIP (will increase server speed, but also bandwidth)")]),
                &[("true", "Disable GZIP")],
            ),
            Field::checkbox(
                "DisableHTTPCache",
                attrs([("label", "Disable HTTP Cache (overrides 'Cache-Control' header)")]),
                &[("true", "Disable HTTP Cache")],
            ),
            Field::input(
                "CacheMaxAge",
                attrs([
                    ("label", "Max-Age value for HTTP caching (in seconds, 0 - 259200)"),
                    ("type", "text"),
                ]),
            ),
            Field::checkbox(
                CACHE_INVALIDATE_FIELD,
                attrs([("label", "Invalidate cache on save")]),
                &[(INVALIDATE_FLAG, "Invalidate Cache")],
            ),
            Field::literal(BACKUP_INFO),
            Field::input(
                "BackupBasicAuthUser",
                attrs([
                    ("label", "HTTP Basic Auth User"),
                    ("placeholder", "Enter a user name for Basic Auth access"),
                    ("type", "text"),
                ]),
            ),
            Field::input(
                "BackupBasicAuthPassword",
                attrs([
                    ("label", "HTTP Basic Auth Password"),
                    ("placeholder", "Enter a password for Basic Auth access"),
                    ("type", "password"),
                ]),
            ),
        ]
    }
}

fn label(text: String) -> Attrs {
    let mut a = Attrs::new();
    a.insert("label".to_string(), text);
    a
}

/// Render the complete editor document for `config`
pub fn render_editor(config: &SiteConfig, chrome: &EditorChrome) -> Result<String, EditorError> {
    form::render(config, &config.editor_fields(), chrome)
}

/// Submit names of the stored fields that differ between two records
pub fn changed_fields(prior: &SiteConfig, next: &SiteConfig) -> Vec<&'static str> {
    FIELD_SPECS
        .iter()
        .filter(|spec| spec.kind != FieldKind::Command)
        .filter(|spec| prior.value(spec.name) != next.value(spec.name))
        .map(|spec| spec.submit_name)
        .collect()
}
