use reelsmith_core::{ImageConfig, Provider};
use reelsmith_error::GenerationErrorKind;
use reelsmith_interface::ImageSynthesizer;
use reelsmith_models::HuggingFaceClient;
use reelsmith_storage::InMemoryCredentialStore;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn client(server: &MockServer, credentials: InMemoryCredentialStore) -> anyhow::Result<HuggingFaceClient> {
    let config = ImageConfig {
        base_url: server.uri(),
        probe_url: format!("{}/api/whoami-v2", server.uri()),
        models: vec!["org/model-a".to_string()],
    };
    Ok(HuggingFaceClient::new(&config, Arc::new(credentials), None)?)
}

fn with_key() -> InMemoryCredentialStore {
    InMemoryCredentialStore::new().with(Provider::ImageProvider, "hf_test")
}

#[tokio::test]
async fn test_synthesize_returns_raw_bytes() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/org/model-a"))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_json(json!({ "inputs": "A red barn in snow" })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_MAGIC, "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client(&server, with_key())?
        .synthesize_image("org/model-a", "A red barn in snow")
        .await?;
    assert_eq!(bytes, PNG_MAGIC);
    Ok(())
}

#[tokio::test]
async fn test_model_loading_is_upstream() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "error": "Model is currently loading" })),
        )
        .mount(&server)
        .await;

    let err = client(&server, with_key())?
        .synthesize_image("org/model-a", "anything")
        .await
        .unwrap_err();
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::UpstreamStatus { status: 503, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_json_success_body_is_upstream() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let err = client(&server, with_key())?
        .synthesize_image("org/model-a", "anything")
        .await
        .unwrap_err();
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::UpstreamResponse { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_probe_accepts_valid_key() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/whoami-v2"))
        .and(header("authorization", "Bearer hf_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "tester" })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, with_key())?.validate_credential().await?;
    Ok(())
}

#[tokio::test]
async fn test_probe_rejected_key() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/whoami-v2"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server, with_key())?
        .validate_credential()
        .await
        .unwrap_err();
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::CredentialInvalid { status: 401, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_probe_without_key() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, InMemoryCredentialStore::new())?
        .validate_credential()
        .await
        .unwrap_err();
    assert!(err.generation_kind().is_some_and(|k| k.is_credential_error()));
    Ok(())
}
