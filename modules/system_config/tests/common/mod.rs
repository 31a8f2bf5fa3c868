//! Common test utilities: mock collaborators and a browser form simulator
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use system_config::domain::{CachePurger, ConfigEvent, ConfigRepository, EventPublisher, Service};
use system_config::{Config, SiteConfig};

// ===== Mock collaborators =====

#[derive(Clone, Default)]
pub struct MockConfigRepo {
    data: Arc<RwLock<Option<SiteConfig>>>,
    saves: Arc<AtomicUsize>,
}

impl MockConfigRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: SiteConfig) -> Self {
        let repo = Self::new();
        *repo.data.write() = Some(record);
        repo
    }

    pub fn stored(&self) -> Option<SiteConfig> {
        self.data.read().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigRepository for MockConfigRepo {
    async fn load(&self) -> anyhow::Result<Option<SiteConfig>> {
        Ok(self.data.read().clone())
    }

    async fn save(&self, config: &SiteConfig) -> anyhow::Result<SiteConfig> {
        // Yield so concurrent saves interleave if they are not serialized
        tokio::task::yield_now().await;
        *self.data.write() = Some(config.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(config.clone())
    }
}

#[derive(Clone, Default)]
pub struct CountingPurger {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl CountingPurger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::default(),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CachePurger for CountingPurger {
    async fn purge(&self) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("cache backend unreachable");
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<ConfigEvent>>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<ConfigEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: ConfigEvent) -> anyhow::Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

pub struct TestHarness {
    pub service: Arc<Service>,
    pub repo: MockConfigRepo,
    pub purger: CountingPurger,
    pub publisher: RecordingPublisher,
}

pub fn harness_with(repo: MockConfigRepo, purger: CountingPurger) -> TestHarness {
    let publisher = RecordingPublisher::default();
    let service = Arc::new(Service::new(
        Arc::new(repo.clone()),
        Arc::new(purger.clone()),
        Arc::new(publisher.clone()),
        Config::default(),
    ));
    TestHarness {
        service,
        repo,
        purger,
        publisher,
    }
}

pub async fn initialized_harness() -> TestHarness {
    let h = harness_with(MockConfigRepo::new(), CountingPurger::new());
    h.service.init().await.unwrap();
    h
}

// ===== Browser form simulator =====

/// One `<input>` element found in a rendered document
#[derive(Debug, Clone)]
pub struct InputElement {
    pub attrs: Vec<(String, Option<String>)>,
}

impl InputElement {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(name, _)| name == key)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has(&self, key: &str) -> bool {
        self.attrs.iter().any(|(name, _)| name == key)
    }
}

/// Every `<input>` element of `doc`, in document order
pub fn inputs(doc: &str) -> Vec<InputElement> {
    let mut found = Vec::new();
    let mut rest = doc;
    while let Some(start) = rest.find("<input ") {
        let tail = &rest[start..];
        let end = tail.find("/>").expect("unterminated input element");
        found.push(InputElement {
            attrs: parse_attrs(&tail["<input".len()..end]),
        });
        rest = &tail[end + 2..];
    }
    found
}

/// Pairs a browser would submit for `doc` left untouched
///
/// Disabled inputs submit nothing and unchecked checkboxes are omitted.
pub fn browser_submission(doc: &str) -> Vec<(String, String)> {
    inputs(doc)
        .into_iter()
        .filter(|input| !input.has("disabled"))
        .filter(|input| input.get("type") != Some("checkbox") || input.has("checked"))
        .filter_map(|input| {
            let name = input.get("name")?.to_string();
            Some((name, input.get("value").unwrap_or_default().to_string()))
        })
        .collect()
}

/// Replace every submitted value of `name`
pub fn set_value(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    pairs.retain(|(k, _)| k != name);
    pairs.push((name.to_string(), value.to_string()));
}

fn parse_attrs(tag: &str) -> Vec<(String, Option<String>)> {
    let mut attrs = Vec::new();
    let mut chars = tag.chars().peekable();
    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '=' {
                break;
            }
            name.push(c);
            chars.next();
        }
        if name.is_empty() {
            break;
        }
        if chars.peek() == Some(&'=') {
            chars.next();
            chars.next(); // opening quote
            let value: String = chars.by_ref().take_while(|&c| c != '"').collect();
            attrs.push((name, Some(unescape(&value))));
        } else {
            attrs.push((name, None));
        }
    }
    attrs
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
