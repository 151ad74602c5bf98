use serde::Serialize;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Response format requested from the AI chat endpoint.
pub enum AiFormat {
    #[default]
    Text,
    Json,
}

impl AiFormat {
    pub const FIELD: &'static str = "format";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// WhatsApp presence states accepted by the presence endpoint.
pub enum Presence {
    Available,
    Unavailable,
    Composing,
    Recording,
    Paused,
}

impl Presence {
    pub const FIELD: &'static str = "presence";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Composing => "composing",
            Self::Recording => "recording",
            Self::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// SMS delivery route. Each route is a separate gateway endpoint.
pub enum SmsRoute {
    #[default]
    Regular,
    Vip,
    Otp,
    Vvip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One inline keyboard button.
///
/// Exactly one of `callback_data` / `url` is set by the constructors.
pub struct TelegramButton {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl TelegramButton {
    /// Button that posts `data` back to the bot when pressed.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: Some(data.into()),
            url: None,
        }
    }

    /// Button that opens `url`.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: None,
            url: Some(url.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Rows of inline keyboard buttons, sent JSON-encoded in the `buttons` field.
pub struct ButtonRows(Vec<Vec<TelegramButton>>);

impl ButtonRows {
    pub const FIELD: &'static str = "buttons";

    /// Invariant: at least one row, and no empty rows.
    pub fn new(rows: Vec<Vec<TelegramButton>>) -> Result<Self, ValidationError> {
        if rows.is_empty() || rows.iter().any(Vec::is_empty) {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(rows))
    }

    pub fn rows(&self) -> &[Vec<TelegramButton>] {
        &self.0
    }

    pub(crate) fn to_json(&self) -> Result<String, ValidationError> {
        serde_json::to_string(self).map_err(|err| ValidationError::Encoding {
            field: Self::FIELD,
            reason: err.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One step of a relay chain.
pub enum Hop {
    WhatsApp { to: String, prefix: Option<String> },
    Telegram { receiver: String, prefix: Option<String> },
    Sms { to: String, prefix: Option<String> },
}

impl Hop {
    pub fn whatsapp(to: impl Into<String>) -> Self {
        Self::WhatsApp {
            to: to.into(),
            prefix: None,
        }
    }

    pub fn telegram(receiver: impl Into<String>) -> Self {
        Self::Telegram {
            receiver: receiver.into(),
            prefix: None,
        }
    }

    pub fn sms(to: impl Into<String>) -> Self {
        Self::Sms {
            to: to.into(),
            prefix: None,
        }
    }

    /// Prepend `prefix` to the forwarded text for this hop.
    pub fn with_prefix(mut self, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match &mut self {
            Self::WhatsApp { prefix, .. }
            | Self::Telegram { prefix, .. }
            | Self::Sms { prefix, .. } => *prefix = value,
        }
        self
    }
}
