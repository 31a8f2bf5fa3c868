//! Integration tests for the system config service

mod common;
use common::{browser_submission, harness_with, initialized_harness, set_value, CountingPurger, MockConfigRepo};

use std::sync::Arc;
use system_config::domain::ConfigEvent;
use system_config::editor::Submission;
use system_config::{ConfigError, SiteConfig, CACHE_MAX_AGE_LIMIT};

/// Pairs a browser would submit for the service's current editor
fn untouched_form(service: &system_config::domain::Service) -> Vec<(String, String)> {
    browser_submission(&service.render_editor().unwrap())
}

// ===== Initialization =====

#[tokio::test]
async fn test_init_creates_record_with_defaults() {
    let h = harness_with(MockConfigRepo::new(), CountingPurger::new());

    let config = h.service.init().await.unwrap();

    assert_eq!(config.bind_addr, "localhost");
    assert_eq!(config.http_port, "8080");
    assert_eq!(config.https_port, "443");
    assert_eq!(config.cache_max_age, CACHE_MAX_AGE_LIMIT);
    assert!(!config.client_secret.is_empty());
    assert!(!config.etag.is_empty());
    assert_eq!(h.repo.save_count(), 1);
    assert_eq!(h.repo.stored().as_ref(), Some(config.as_ref()));
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let h = harness_with(MockConfigRepo::new(), CountingPurger::new());

    let first = h.service.init().await.unwrap();
    let second = h.service.init().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(h.repo.save_count(), 1);
}

#[tokio::test]
async fn test_init_loads_existing_record() {
    let existing = SiteConfig {
        name: "Existing".to_string(),
        client_secret: "abc123".to_string(),
        etag: "etag-1".to_string(),
        ..Default::default()
    };
    let h = harness_with(MockConfigRepo::with_record(existing.clone()), CountingPurger::new());

    let config = h.service.init().await.unwrap();

    assert_eq!(config.as_ref(), &existing);
    assert_eq!(h.repo.save_count(), 0);
}

#[tokio::test]
async fn test_operations_before_init_fail() {
    let h = harness_with(MockConfigRepo::new(), CountingPurger::new());

    assert!(matches!(h.service.current(), Err(ConfigError::NotInitialized)));
    assert!(matches!(h.service.render_editor(), Err(ConfigError::NotInitialized)));
    let result = h.service.save_submission(Submission::default()).await;
    assert!(matches!(result, Err(ConfigError::NotInitialized)));
}

// ===== Saving =====

#[tokio::test]
async fn test_untouched_form_changes_nothing() {
    let h = initialized_harness().await;
    let before = h.service.current().unwrap();

    let outcome = h
        .service
        .save_submission(Submission::from_pairs(untouched_form(&h.service)))
        .await
        .unwrap();

    assert_eq!(&outcome.config, before.as_ref());
    assert!(outcome.changed_fields.is_empty());
    assert!(!outcome.cache_invalidated);
    assert_eq!(h.purger.calls(), 0);
}

#[tokio::test]
async fn test_save_updates_record_and_snapshot() {
    let h = initialized_harness().await;
    let mut pairs = untouched_form(&h.service);
    set_value(&mut pairs, "name", "Docs");
    set_value(&mut pairs, "domain", "  Example.COM ");
    set_value(&mut pairs, "admin_email", "ops@example.com");
    pairs.push(("cors_disabled".to_string(), "true".to_string()));

    let outcome = h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    assert_eq!(outcome.config.name, "Docs");
    assert_eq!(outcome.config.domain, "example.com");
    assert!(outcome.config.disable_cors);
    assert_eq!(
        outcome.changed_fields,
        vec!["name", "domain", "admin_email", "cors_disabled"]
    );
    assert_eq!(h.service.current().unwrap().as_ref(), &outcome.config);
    assert_eq!(h.repo.stored().as_ref(), Some(&outcome.config));

    let events = h.publisher.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ConfigEvent::ConfigSaved(e) => assert_eq!(e.changed_fields.len(), 4),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_locked_fields_survive_tampering() {
    let h = initialized_harness().await;
    let before = h.service.current().unwrap();
    let mut pairs = untouched_form(&h.service);
    set_value(&mut pairs, "client_secret", "hacked");
    set_value(&mut pairs, "etag", "forged");

    let outcome = h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    assert_eq!(outcome.config.client_secret, before.client_secret);
    assert_eq!(outcome.config.etag, before.etag);
}

#[tokio::test]
async fn test_locked_fields_survive_omission() {
    let h = initialized_harness().await;
    let before = h.service.current().unwrap();
    let mut pairs = untouched_form(&h.service);
    pairs.retain(|(name, _)| name != "client_secret" && name != "etag");

    let outcome = h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    assert_eq!(outcome.config.client_secret, before.client_secret);
    assert_eq!(outcome.config.etag, before.etag);
}

#[tokio::test]
async fn test_cache_max_age_is_clamped_on_save() {
    let h = initialized_harness().await;

    let cases = [
        ("999999", 259_200),
        ("-5", 0),
        ("3600", 3600),
        ("99999999999999999999", 259_200),
    ];
    for (submitted, stored) in cases {
        let mut pairs = untouched_form(&h.service);
        set_value(&mut pairs, "cache_max_age", submitted);

        let outcome = h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();
        assert_eq!(outcome.config.cache_max_age, stored, "submitted {}", submitted);
        assert_eq!(h.repo.stored().unwrap().cache_max_age, stored);
    }
}

// ===== Cache invalidation =====

#[tokio::test]
async fn test_invalidate_purges_exactly_once() {
    let h = initialized_harness().await;
    let before = h.service.current().unwrap();
    let mut pairs = untouched_form(&h.service);
    pairs.push(("cache".to_string(), "invalidate".to_string()));

    let outcome = h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    assert_eq!(h.purger.calls(), 1);
    assert!(outcome.cache_invalidated);
    assert_ne!(outcome.config.etag, before.etag);
    assert_eq!(outcome.changed_fields, vec!["etag"]);

    let events = h.publisher.events();
    assert_eq!(events.len(), 2);
    match &events[1] {
        ConfigEvent::CacheInvalidated(e) => assert_eq!(e.etag, outcome.config.etag),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_invalidate_is_not_sticky() {
    let h = initialized_harness().await;
    let mut pairs = untouched_form(&h.service);
    pairs.push(("cache".to_string(), "invalidate".to_string()));
    h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    // The re-rendered editor submits without the command
    let outcome = h
        .service
        .save_submission(Submission::from_pairs(untouched_form(&h.service)))
        .await
        .unwrap();

    assert!(!outcome.cache_invalidated);
    assert_eq!(h.purger.calls(), 1);
}

#[tokio::test]
async fn test_unknown_command_flag_does_not_purge() {
    let h = initialized_harness().await;
    let mut pairs = untouched_form(&h.service);
    pairs.push(("cache".to_string(), "everything".to_string()));

    let outcome = h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    assert!(!outcome.cache_invalidated);
    assert_eq!(h.purger.calls(), 0);
}

#[tokio::test]
async fn test_failed_purge_keeps_committed_save() {
    let h = harness_with(MockConfigRepo::new(), CountingPurger::failing());
    h.service.init().await.unwrap();
    let mut pairs = untouched_form(&h.service);
    set_value(&mut pairs, "name", "Still saved");
    pairs.push(("cache".to_string(), "invalidate".to_string()));

    let outcome = h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    assert_eq!(h.purger.calls(), 1);
    assert!(!outcome.cache_invalidated);
    assert_eq!(h.repo.stored().unwrap().name, "Still saved");
    assert!(h
        .publisher
        .events()
        .iter()
        .all(|e| matches!(e, ConfigEvent::ConfigSaved(_))));
}

// ===== Validation =====

#[tokio::test]
async fn test_invalid_submission_persists_nothing() {
    let h = initialized_harness().await;
    let before = h.service.current().unwrap();

    let cases = [
        ("domain", "https://example.com"),
        ("domain", "a.com,b.com"),
        ("http_port", "70000"),
        ("https_port", "https"),
        ("admin_email", "not-an-email"),
    ];
    for (field, value) in cases {
        let mut pairs = untouched_form(&h.service);
        set_value(&mut pairs, field, value);

        let result = h.service.save_submission(Submission::from_pairs(pairs)).await;
        assert!(
            matches!(result, Err(ConfigError::Validation { .. })),
            "{}={} should be rejected",
            field,
            value
        );
    }

    let mut pairs = untouched_form(&h.service);
    set_value(&mut pairs, "cache_max_age", "soon");
    let result = h.service.save_submission(Submission::from_pairs(pairs)).await;
    assert!(matches!(result, Err(ConfigError::Submission { .. })));

    assert_eq!(h.repo.save_count(), 1);
    assert_eq!(h.service.current().unwrap(), before);
    assert_eq!(h.purger.calls(), 0);
}

// ===== CORS =====

#[tokio::test]
async fn test_origin_policy_follows_record() {
    let h = initialized_harness().await;
    assert!(h.service.origin_allowed("https://anywhere.test").unwrap());

    let mut pairs = untouched_form(&h.service);
    set_value(&mut pairs, "domain", "example.com");
    pairs.push(("cors_disabled".to_string(), "true".to_string()));
    h.service.save_submission(Submission::from_pairs(pairs)).await.unwrap();

    assert!(h.service.origin_allowed("https://example.com").unwrap());
    assert!(!h.service.origin_allowed("https://evil.test").unwrap());
}

// ===== Concurrency =====

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_are_serialized() {
    let h = initialized_harness().await;
    let base = untouched_form(&h.service);

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = Arc::clone(&h.service);
        let mut pairs = base.clone();
        set_value(&mut pairs, "name", &format!("site-{}", i));
        handles.push(tokio::spawn(async move {
            service.save_submission(Submission::from_pairs(pairs)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // Last write wins, and the snapshot matches what was committed last
    assert_eq!(h.repo.save_count(), 17);
    let stored = h.repo.stored().unwrap();
    assert_eq!(h.service.current().unwrap().as_ref(), &stored);
    assert!(stored.name.starts_with("site-"));
}
