//! End-to-end tests over the registry → builder → engine pipeline.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::json;

use stamp_core::{
    CoreError, MockEngine, MockRender, RequestData, ResultFormat, TemplateRegistry,
};

fn write_template(root: &Path, name: &str, declaration: &serde_json::Value) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(stamp_templates::DECLARATION_FILE),
        declaration.to_string(),
    )
    .unwrap();
    dir
}

#[tokio::test]
async fn test_registry_build_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    write_template(
        temp.path(),
        "hug",
        &json!({
            "type": "GIF",
            "avatar": [{"type": "TO", "pos": [[0, 0, 96, 96]]}],
            "text": [{"text": "$txt1[from]", "pos": [100, 20]}]
        }),
    );

    let engine = MockEngine::new().add_response(MockRender::gif(b"animated".to_vec()));
    let registry = TemplateRegistry::new(Arc::new(engine.clone()));
    let report = registry.add_paths(temp.path()).unwrap();
    assert!(report.is_clean());
    assert_eq!(registry.len(), 1);

    let builder = registry.get_builder("hug").unwrap();
    let data = RequestData::new().with_to_avatar("https://example.com/a.png");
    let result = builder.build(&data).await.unwrap();

    assert_eq!(result.bytes, b"animated");
    assert_eq!(result.format, ResultFormat::Gif);

    // The engine saw the declaration verbatim, the template's asset
    // directory, and a payload with the placeholder sender text resolved.
    let calls = engine.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].schema["type"], "GIF");
    assert_eq!(calls[0].asset_root, temp.path().join("hug"));
    assert_eq!(
        calls[0].payload.avatars.to.as_deref(),
        Some("https://example.com/a.png")
    );
    assert_eq!(calls[0].payload.text.from, "from");
}

#[tokio::test]
async fn test_unknown_identifier_never_yields_a_builder() {
    let registry = TemplateRegistry::new(Arc::new(MockEngine::new()));
    let err = registry.get_builder("nonexistent").unwrap_err();
    assert!(matches!(err, CoreError::TemplateNotRegistered(_)));
}

#[tokio::test]
async fn test_concurrent_builds_are_independent() {
    let temp = tempfile::tempdir().unwrap();
    write_template(temp.path(), "lineup", &json!({"type": "IMG"}));

    let engine = MockEngine::new();
    let registry = TemplateRegistry::new(Arc::new(engine.clone()));
    registry.add_paths(temp.path()).unwrap();
    let builder = registry.get_builder("lineup").unwrap();

    let builds = (0..8).map(|i| {
        let builder = Arc::clone(&builder);
        async move {
            let data = RequestData::new()
                .with_random_avatar(format!("avatar-{i}-first"))
                .with_random_avatar(format!("avatar-{i}-second"));
            builder.build(&data).await
        }
    });

    let results = join_all(builds).await;
    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(engine.call_count(), 8);

    // Every in-flight build kept its own payload intact, order included.
    for call in engine.calls() {
        let random = &call.payload.avatars.random;
        assert_eq!(random.len(), 2);
        let prefix = random[0].strip_suffix("-first").unwrap();
        assert_eq!(random[1], format!("{prefix}-second"));
    }
}

#[tokio::test]
async fn test_concurrent_registration_and_lookup() {
    let temp = tempfile::tempdir().unwrap();
    let dir = write_template(temp.path(), "pat", &json!({"type": "IMG"}));

    let registry = Arc::new(TemplateRegistry::new(Arc::new(MockEngine::new())));

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        let dir = dir.clone();
        tasks.push(tokio::spawn(async move {
            registry.add_path("pat", &dir).map(|_| ())
        }));
    }
    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            // A lookup during registration sees the key either absent or
            // fully registered, nothing in between.
            match registry.get_builder("pat") {
                Ok(builder) => {
                    assert_eq!(builder.descriptor().id(), "pat");
                    Ok(())
                }
                Err(CoreError::TemplateNotRegistered(_)) => Ok(()),
                Err(other) => Err(other),
            }
        }));
    }

    for task in tasks {
        task.await.unwrap().unwrap();
    }
    assert!(registry.contains("pat"));
}

#[tokio::test]
async fn test_failed_build_leaves_registry_usable() {
    let temp = tempfile::tempdir().unwrap();
    write_template(temp.path(), "pat", &json!({"type": "IMG"}));

    let engine = MockEngine::new().add_response(MockRender::with_tag(Vec::new(), "bmp"));
    let registry = TemplateRegistry::new(Arc::new(engine));
    registry.add_paths(temp.path()).unwrap();

    let builder = registry.get_builder("pat").unwrap();
    let err = builder.build(&RequestData::new()).await.unwrap_err();
    assert!(matches!(err, CoreError::UnknownResultFormat(_)));

    // The failure was per-invocation; registry and builder state survive.
    assert!(registry.contains("pat"));
    assert!(registry.get_builder("pat").is_ok());
}
