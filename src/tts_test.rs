//! Tests for the Cloud TTS client against a mocked API.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth::AuthProvider;
use crate::tts::{AudioEncoding, SsmlGender, TtsClient, VoiceSelection};

const TEST_TOKEN: &str = "test-token-12345";

fn mock_client(server: &MockServer) -> TtsClient {
    TtsClient::with_base_url(AuthProvider::fixed(TEST_TOKEN), server.uri())
}

#[tokio::test]
async fn synthesize_returns_decoded_audio() {
    let mock_server = MockServer::start().await;
    let audio = b"fake-mp3-bytes";

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audioContent": BASE64.encode(audio),
        })))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let result = client
        .synthesize("<speak>Hello</speak>", &VoiceSelection::default(), AudioEncoding::Mp3)
        .await;

    assert_eq!(result.unwrap(), audio.to_vec());
}

#[tokio::test]
async fn synthesize_sends_ssml_voice_and_encoding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .and(body_partial_json(serde_json::json!({
            "input": { "ssml": "<speak>A &amp; B</speak>" },
            "voice": {
                "languageCode": "es-US",
                "name": "es-US-Standard-C",
                "ssmlGender": "FEMALE",
            },
            "audioConfig": { "audioEncoding": "OGG_OPUS" },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audioContent": BASE64.encode(b"ok"),
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let voice = VoiceSelection {
        language_code: "es-US".to_string(),
        name: Some("es-US-Standard-C".to_string()),
        ssml_gender: SsmlGender::Female,
    };

    let client = mock_client(&mock_server);
    let result = client
        .synthesize("<speak>A &amp; B</speak>", &voice, AudioEncoding::OggOpus)
        .await;

    assert!(result.is_ok(), "Synthesis should succeed: {:?}", result.err());
}

#[tokio::test]
async fn service_rejection_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let err = client
        .synthesize("<speak>Hi</speak>", &VoiceSelection::default(), AudioEncoding::Mp3)
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("429"), "Should contain status: {msg}");
    assert!(msg.contains("text:synthesize"), "Should contain endpoint: {msg}");
    assert!(msg.contains("quota exceeded"), "Should contain service diagnostic: {msg}");
}

#[tokio::test]
async fn empty_audio_content_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audioContent": "",
        })))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let err = client
        .synthesize("<speak>Hi</speak>", &VoiceSelection::default(), AudioEncoding::Mp3)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No audio content"), "Got: {err}");
}

#[tokio::test]
async fn invalid_base64_payload_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audioContent": "not base64 !!!",
        })))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let err = client
        .synthesize("<speak>Hi</speak>", &VoiceSelection::default(), AudioEncoding::Mp3)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("base64"), "Got: {err}");
}

#[tokio::test]
async fn malformed_response_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let err = client
        .synthesize("<speak>Hi</speak>", &VoiceSelection::default(), AudioEncoding::Mp3)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("parse"), "Got: {err}");
}
