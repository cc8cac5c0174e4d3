//! ssml-tts command-line driver.
//!
//! Reads plaintext (or hand-authored SSML), encodes it as an SSML document,
//! sends it to Google Cloud Text-to-Speech, and writes the returned audio
//! to a local file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use ssml_tts::ssml;
use ssml_tts::trace::init_tracing;
use ssml_tts::tts::{self, AudioEncoding, SsmlGender, TtsClient, VoiceSelection};

#[derive(Parser, Debug)]
#[command(name = "ssml-tts")]
#[command(about = "Convert plaintext to SSML and synthesize speech with Google Cloud Text-to-Speech")]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
struct Args {
    /// Read the text to speak from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Text to speak, given inline
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Treat the input as hand-authored SSML and send it verbatim
    #[arg(long)]
    ssml: bool,

    /// Output audio file; defaults to speech.<ext> for the chosen encoding
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// BCP-47 language code for voice selection
    #[arg(long, env = "TTS_LANGUAGE_CODE", default_value = tts::DEFAULT_LANGUAGE_CODE)]
    language_code: String,

    /// Explicit voice name (e.g. "es-US-Standard-C"); the service picks one if unset
    #[arg(long, env = "TTS_VOICE")]
    voice: Option<String>,

    /// Preferred voice gender when no voice name is given
    #[arg(long, value_enum, default_value_t = SsmlGender::Male)]
    gender: SsmlGender,

    /// Audio encoding of the output file
    #[arg(long, value_enum, default_value_t = AudioEncoding::Mp3)]
    encoding: AudioEncoding,

    /// Pause inserted after each line break, in seconds
    #[arg(long, value_name = "SECS", default_value_t = ssml::DEFAULT_PAUSE_SECS)]
    pause_secs: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let raw = match (&args.input, &args.text) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, Some(text)) => text.clone(),
        (None, None) => unreachable!("clap requires one of --input/--text"),
    };

    let document = if args.ssml {
        raw
    } else {
        ssml::encode_with_pause(&raw, args.pause_secs)
    };

    let voice = VoiceSelection {
        language_code: args.language_code,
        name: args.voice,
        ssml_gender: args.gender,
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("speech.{}", args.encoding.extension())));

    let client = TtsClient::new().await?;
    let audio = client.synthesize(&document, &voice, args.encoding).await?;
    tts::write_audio(&output, &audio).await?;

    Ok(())
}
