//! Google Cloud Text-to-Speech client.
//!
//! A narrowly-scoped handle over the `texttospeech.googleapis.com` REST API:
//! the driver constructs one [`TtsClient`], hands it an SSML document plus
//! voice and encoding choices, and gets back the raw audio bytes to persist.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::auth::AuthProvider;
use crate::error::{Error, Result};

/// Default language code, matching the service default voice family.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";

const TTS_BASE_URL: &str = "https://texttospeech.googleapis.com";

/// Voice selection parameters for a synthesis request.
#[derive(Debug, Clone)]
pub struct VoiceSelection {
    /// BCP-47 language code (e.g., "en-US", "es-ES")
    pub language_code: String,
    /// Explicit voice name (e.g., "es-US-Standard-C"); the service picks a
    /// voice for the language and gender when unset
    pub name: Option<String>,
    /// Preferred voice gender
    pub ssml_gender: SsmlGender,
}

impl Default for VoiceSelection {
    fn default() -> Self {
        Self {
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            name: None,
            ssml_gender: SsmlGender::Male,
        }
    }
}

/// Voice gender, as named by the SSML voice model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum SsmlGender {
    #[serde(rename = "MALE")]
    Male,
    #[serde(rename = "FEMALE")]
    Female,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

/// Audio encoding of the synthesized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum AudioEncoding {
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "OGG_OPUS")]
    OggOpus,
}

impl AudioEncoding {
    /// Conventional file extension for this encoding.
    pub fn extension(self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "mp3",
            AudioEncoding::Linear16 => "wav",
            AudioEncoding::OggOpus => "ogg",
        }
    }
}

/// Cloud TTS client.
pub struct TtsClient {
    http: reqwest::Client,
    auth: AuthProvider,
    /// Base URL for the TTS API (overridable for testing)
    base_url: String,
}

impl TtsClient {
    /// Create a client using Application Default Credentials.
    ///
    /// # Errors
    /// Returns an error if credential discovery fails.
    pub async fn new() -> Result<Self> {
        let auth = AuthProvider::new().await?;
        Ok(Self::with_auth(auth))
    }

    /// Create a client with a provided auth provider.
    pub fn with_auth(auth: AuthProvider) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            base_url: TTS_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL (for testing).
    #[cfg(test)]
    pub fn with_base_url(auth: AuthProvider, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            base_url,
        }
    }

    fn synthesize_endpoint(&self) -> String {
        format!("{}/v1/text:synthesize", self.base_url)
    }

    /// Synthesize speech from an SSML document.
    ///
    /// # Returns
    /// The raw audio bytes in the requested encoding, ready to be written
    /// to a file verbatim.
    ///
    /// # Errors
    /// Returns [`Error::Api`] if the request fails, the service rejects the
    /// document, or the response payload cannot be decoded.
    #[instrument(level = "info", name = "synthesize_speech", skip(self, ssml))]
    pub async fn synthesize(
        &self,
        ssml: &str,
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<Vec<u8>> {
        let request = SynthesizeRequest {
            input: SynthesisInput { ssml },
            voice: VoiceParams {
                language_code: &voice.language_code,
                name: voice.name.as_deref(),
                ssml_gender: voice.ssml_gender,
            },
            audio_config: AudioConfig {
                audio_encoding: encoding,
            },
        };

        let token = self.auth.token().await?;
        let endpoint = self.synthesize_endpoint();
        debug!(endpoint = %endpoint, language = %voice.language_code, "Calling Cloud TTS API");

        let response = self
            .http
            .post(&endpoint)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::api(&endpoint, 0, format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(&endpoint, status.as_u16(), body));
        }

        let api_response: SynthesizeResponse = response.json().await.map_err(|e| {
            Error::api(
                &endpoint,
                status.as_u16(),
                format!("Failed to parse response: {e}"),
            )
        })?;

        if api_response.audio_content.is_empty() {
            return Err(Error::api(
                &endpoint,
                status.as_u16(),
                "No audio content returned from API",
            ));
        }

        let audio = BASE64.decode(api_response.audio_content.as_bytes()).map_err(|e| {
            Error::api(
                &endpoint,
                status.as_u16(),
                format!("Audio content is not valid base64: {e}"),
            )
        })?;

        info!(bytes = audio.len(), "Received audio from Cloud TTS API");
        Ok(audio)
    }
}

/// Write an audio payload to `path`, creating parent directories as needed.
///
/// An existing file at `path` is overwritten.
///
/// # Errors
/// Returns [`Error::Io`] if the directory or file cannot be written.
pub async fn write_audio(path: &Path, audio: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, audio).await?;

    info!(path = %path.display(), "Audio content written to file");
    Ok(())
}

// =============================================================================
// API Request/Response Types
// =============================================================================

/// Cloud TTS synthesis request body.
#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceParams<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

/// SSML input to be synthesized.
#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    ssml: &'a str,
}

/// Wire form of the voice selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceParams<'a> {
    language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    ssml_gender: SsmlGender,
}

/// Wire form of the audio configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: AudioEncoding,
}

/// Cloud TTS synthesis response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    /// Base64-encoded audio content
    audio_content: String,
}
