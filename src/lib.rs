//! ssml-tts
//!
//! Plaintext-to-SSML encoding and speech synthesis using the Google Cloud
//! Text-to-Speech API. The [`ssml`] module is a pure text transformation;
//! [`tts`] talks to the service and persists the returned audio.

pub mod auth;
pub mod error;
pub mod ssml;
pub mod trace;
pub mod tts;

#[cfg(test)]
mod tts_test;

pub use auth::AuthProvider;
pub use error::{AuthError, Error, Result};
pub use tts::{AudioEncoding, SsmlGender, TtsClient, VoiceSelection};
