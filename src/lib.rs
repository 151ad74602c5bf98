//! Typed Rust client for the Apipedia messaging gateway.
//!
//! One credential pair reaches WhatsApp, Telegram, SMS and an AI chat
//! endpoint. The crate is split into a domain layer of strong types, a
//! transport layer for wire-format details, and a small client layer
//! orchestrating requests. Every successful call returns a [`ChainResult`]
//! that can be forwarded to another channel, so results chain across
//! channels:
//!
//! ```rust,no_run
//! use apipedia::{AiFormat, ApipediaClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), apipedia::ApipediaError> {
//!     let client = ApipediaClient::new(Credentials::new("appkey", "authkey")?);
//!     let quote = client
//!         .ai_chat("Generate a motivational quote", "agent-id", AiFormat::Text)
//!         .await?
//!         .to_whatsapp("628998937095", Some("Motivation via WhatsApp: "))
//!         .await?
//!         .to_telegram("368628054", Some("Motivation via Telegram: "))
//!         .await?
//!         .to_sms("628998937095", Some("Motivation via SMS: "))
//!         .await?;
//!     println!("{:?}", quote.result());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApipediaClient, ApipediaClientBuilder, ApipediaError, ChainResult, resolve_media,
};
pub use domain::{
    AgentId, AiFormat, AppKey, AuthKey, ButtonRows, Coordinates, Credentials, Hop, Media,
    MediaStream, MessageId, PipeList, Presence, RawResult, SmsRoute, TelegramButton,
    ValidationError, normalize_list,
};
