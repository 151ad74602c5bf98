use tracing::debug;

use super::ApipediaClient;
use super::error::ApipediaError;
use crate::domain::{Hop, MediaReference, RawResult, SmsRoute};
use crate::transport::{encode_send_sms, encode_telegram_message, encode_whatsapp_message};

#[derive(Debug, Clone)]
/// Snapshot of one successful gateway call.
///
/// A `ChainResult` never changes after it is created. Forwarding it with
/// [`to_whatsapp`](Self::to_whatsapp), [`to_telegram`](Self::to_telegram) or
/// [`to_sms`](Self::to_sms) sends [`text`](Self::text) (optionally prefixed) and
/// returns a new snapshot for the new call, so every link of a chain stays
/// available to the caller.
///
/// ```rust,no_run
/// use apipedia::{AiFormat, ApipediaClient, Credentials};
///
/// # async fn run() -> Result<(), apipedia::ApipediaError> {
/// let client = ApipediaClient::new(Credentials::new("appkey", "authkey")?);
/// let answer = client.ai_chat("Tell me a joke", "agent-id", AiFormat::Text).await?;
/// let on_whatsapp = answer.to_whatsapp("628998937095", Some("Joke: ")).await?;
/// let on_telegram = on_whatsapp.to_telegram("368628054", Some("Same joke: ")).await?;
/// println!("{:?}", on_telegram.result());
/// # Ok(())
/// # }
/// ```
pub struct ChainResult {
    client: ApipediaClient,
    raw: RawResult,
    text: String,
}

impl ChainResult {
    pub(crate) fn new(client: ApipediaClient, raw: RawResult, text: String) -> Self {
        Self { client, raw, text }
    }

    /// The payload returned by the gateway for this call.
    pub fn result(&self) -> &RawResult {
        &self.raw
    }

    /// Consume the link and take its payload.
    pub fn into_result(self) -> RawResult {
        self.raw
    }

    /// The text a forward sends: the AI reply, the message that was sent, or the
    /// compact JSON of a structured payload.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Send `prefix + text` to a WhatsApp number.
    pub async fn to_whatsapp(
        &self,
        to: &str,
        prefix: Option<&str>,
    ) -> Result<ChainResult, ApipediaError> {
        let message = self.compose(prefix);
        let request = encode_whatsapp_message(
            self.client.credentials(),
            to,
            &message,
            MediaReference::None,
        );
        self.forward_with(request.into()).await
    }

    /// Send `prefix + text` to a Telegram chat.
    pub async fn to_telegram(
        &self,
        receiver: &str,
        prefix: Option<&str>,
    ) -> Result<ChainResult, ApipediaError> {
        let body = self.compose(prefix);
        let request = encode_telegram_message(self.client.credentials(), receiver, &body);
        self.forward_with(request.into()).await
    }

    /// Send `prefix + text` as a regular-route SMS.
    pub async fn to_sms(&self, to: &str, prefix: Option<&str>) -> Result<ChainResult, ApipediaError> {
        let msg = self.compose(prefix);
        let request = encode_send_sms(self.client.credentials(), SmsRoute::Regular, to, &msg);
        self.forward_with(request.into()).await
    }

    /// Forward along `hops` in order and return every new link.
    ///
    /// Stops at the first failing hop; later hops are not sent.
    pub async fn relay(
        &self,
        hops: impl IntoIterator<Item = Hop>,
    ) -> Result<Vec<ChainResult>, ApipediaError> {
        let mut links: Vec<ChainResult> = Vec::new();
        for hop in hops {
            let next = links.last().unwrap_or(self).forward(&hop).await?;
            links.push(next);
        }
        Ok(links)
    }

    async fn forward(&self, hop: &Hop) -> Result<ChainResult, ApipediaError> {
        match hop {
            Hop::WhatsApp { to, prefix } => self.to_whatsapp(to, prefix.as_deref()).await,
            Hop::Telegram { receiver, prefix } => {
                self.to_telegram(receiver, prefix.as_deref()).await
            }
            Hop::Sms { to, prefix } => self.to_sms(to, prefix.as_deref()).await,
        }
    }

    // The new link carries the same text so prefixes do not pile up along a chain.
    async fn forward_with(
        &self,
        request: crate::transport::Request,
    ) -> Result<ChainResult, ApipediaError> {
        debug!(path = request.path(), "forwarding chain result");
        let raw = self.client.dispatch(request).await?;
        Ok(ChainResult::new(self.client.clone(), raw, self.text.clone()))
    }

    fn compose(&self, prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => format!("{prefix}{}", self.text),
            None => self.text.clone(),
        }
    }
}
