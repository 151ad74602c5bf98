//! Client layer: resolves arguments, dispatches requests and wraps results.

mod chain;
mod error;
mod http;
mod media;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

pub use chain::ChainResult;
pub use error::ApipediaError;
pub use media::resolve_media;

use error::TransportFailure;
use http::{HttpResponse, HttpTransport, ReqwestTransport};

use crate::domain::{
    AgentId, AiFormat, ButtonRows, Coordinates, Credentials, Media, MessageId, PipeList,
    Presence, RawResult, SmsRoute,
};
use crate::transport::{
    Request, StatusQuery, decode_raw, decode_reply_text, encode_ai_chat, encode_bulk_v1,
    encode_bulk_v2, encode_profile, encode_send_sms, encode_status_query,
    encode_telegram_buttons, encode_telegram_document, encode_telegram_image,
    encode_telegram_location, encode_telegram_message, encode_update_presence,
    encode_whatsapp_message, render_text,
};

const DEFAULT_BASE_URL: &str = "https://waconsole.apipedia.id/";

#[derive(Debug, Clone)]
/// Builder for [`ApipediaClient`].
///
/// Use this when you need to point at another gateway host, or set a timeout or
/// user-agent.
pub struct ApipediaClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApipediaClientBuilder {
    /// Create a builder with the default gateway host and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway host. Endpoint paths are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`ApipediaClient`].
    pub fn build(self) -> Result<ApipediaClient, ApipediaError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ApipediaError::from(TransportFailure::Setup(Box::new(err))))?;

        Ok(ApipediaClient {
            credentials: self.credentials,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Apipedia client.
///
/// Every method attaches the bound credentials, sends one request and returns a
/// [`ChainResult`] that can be forwarded to another channel. The client is cheap
/// to clone and safe to share between tasks.
///
/// ```rust,no_run
/// use apipedia::{ApipediaClient, Credentials};
///
/// # async fn run() -> Result<(), apipedia::ApipediaError> {
/// let client = ApipediaClient::new(Credentials::new("appkey", "authkey")?);
/// client.whatsapp("628998937095", "Hello World!").await?;
/// client
///     .bulk_v1(["628998937095", "6281615677582"], "Same text for everyone")
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ApipediaClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ApipediaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApipediaClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApipediaClient {
    /// Create a client for the default gateway host.
    ///
    /// For more customization, use [`ApipediaClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> ApipediaClientBuilder {
        ApipediaClientBuilder::new(credentials)
    }

    /// Credentials sent with every request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Gateway base URL, always ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a WhatsApp text message.
    pub async fn whatsapp(&self, to: &str, message: &str) -> Result<ChainResult, ApipediaError> {
        self.send_whatsapp(to, message, None).await
    }

    /// Send a WhatsApp message with media attached.
    ///
    /// `media` may be a URL, a local path or an open stream; see [`resolve_media`].
    /// A missing local file fails with [`ApipediaError::FileNotFound`] before
    /// anything is sent.
    pub async fn whatsapp_with_media(
        &self,
        to: &str,
        message: &str,
        media: impl Into<Media>,
    ) -> Result<ChainResult, ApipediaError> {
        self.send_whatsapp(to, message, Some(media.into())).await
    }

    async fn send_whatsapp(
        &self,
        to: &str,
        message: &str,
        media: Option<Media>,
    ) -> Result<ChainResult, ApipediaError> {
        let media = resolve_media(media).await?;
        let request = encode_whatsapp_message(&self.credentials, to, message, media);
        self.send_text(request.into(), message.to_owned()).await
    }

    /// Broadcast one message to many WhatsApp numbers.
    ///
    /// `to` accepts a sequence or a `|`-delimited string.
    pub async fn bulk_v1(
        &self,
        to: impl Into<PipeList>,
        message: &str,
    ) -> Result<ChainResult, ApipediaError> {
        let request = encode_bulk_v1(&self.credentials, &to.into(), message);
        self.send_text(request.into(), message.to_owned()).await
    }

    /// Send a distinct message to each WhatsApp number, matched by position.
    ///
    /// Errors:
    /// - Returns [`ApipediaError::Validation`] when the lists have different lengths.
    pub async fn bulk_v2(
        &self,
        to: impl Into<PipeList>,
        messages: impl Into<PipeList>,
    ) -> Result<ChainResult, ApipediaError> {
        let messages = messages.into();
        let request = encode_bulk_v2(&self.credentials, &to.into(), &messages)?;
        self.send_text(request.into(), messages.into_string()).await
    }

    /// Send a Telegram text message.
    pub async fn telegram_send_message(
        &self,
        receiver: &str,
        text: &str,
    ) -> Result<ChainResult, ApipediaError> {
        let request = encode_telegram_message(&self.credentials, receiver, text);
        self.send_text(request.into(), text.to_owned()).await
    }

    /// Send a Telegram image from a URL, local path or stream.
    pub async fn telegram_send_image(
        &self,
        receiver: &str,
        image: impl Into<Media>,
        caption: Option<&str>,
    ) -> Result<ChainResult, ApipediaError> {
        let image = resolve_media(Some(image.into())).await?;
        let request = encode_telegram_image(&self.credentials, receiver, image, caption)?;
        self.send_raw(request.into()).await
    }

    /// Send a Telegram location pin.
    pub async fn telegram_send_location(
        &self,
        receiver: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<ChainResult, ApipediaError> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        let request = encode_telegram_location(&self.credentials, receiver, coordinates);
        self.send_raw(request.into()).await
    }

    /// Send a Telegram message with an inline keyboard.
    pub async fn telegram_send_buttons(
        &self,
        receiver: &str,
        body: &str,
        buttons: &ButtonRows,
    ) -> Result<ChainResult, ApipediaError> {
        let request = encode_telegram_buttons(&self.credentials, receiver, body, buttons)?;
        self.send_raw(request.into()).await
    }

    /// Send a Telegram document from a URL, local path or stream.
    pub async fn telegram_send_document(
        &self,
        receiver: &str,
        document: impl Into<Media>,
        caption: Option<&str>,
        filename: Option<&str>,
    ) -> Result<ChainResult, ApipediaError> {
        let document = resolve_media(Some(document.into())).await?;
        let request =
            encode_telegram_document(&self.credentials, receiver, document, caption, filename)?;
        self.send_raw(request.into()).await
    }

    /// Send an SMS through the regular route.
    pub async fn sms(&self, to: &str, message: &str) -> Result<ChainResult, ApipediaError> {
        self.sms_via(SmsRoute::Regular, to, message).await
    }

    /// Send an SMS through a specific route.
    pub async fn sms_via(
        &self,
        route: SmsRoute,
        to: &str,
        message: &str,
    ) -> Result<ChainResult, ApipediaError> {
        let request = encode_send_sms(&self.credentials, route, to, message);
        self.send_text(request.into(), message.to_owned()).await
    }

    /// Ask an AI agent. The result's [`text`](ChainResult::text) is the reply,
    /// ready to be forwarded.
    pub async fn ai_chat(
        &self,
        prompt: &str,
        agent_id: &str,
        format: AiFormat,
    ) -> Result<ChainResult, ApipediaError> {
        let agent_id = AgentId::new(agent_id)?;
        let request = encode_ai_chat(&self.credentials, prompt, &agent_id, format);
        let raw = self.dispatch(request.into()).await?;
        let text = decode_reply_text(&raw);
        Ok(ChainResult::new(self.clone(), raw, text))
    }

    /// Every recorded status of a sent message.
    pub async fn message_status_all(&self, message_id: &str) -> Result<ChainResult, ApipediaError> {
        self.status_query(StatusQuery::All, message_id).await
    }

    /// The most recent status of a sent message.
    pub async fn last_status(&self, message_id: &str) -> Result<ChainResult, ApipediaError> {
        self.status_query(StatusQuery::Last, message_id).await
    }

    /// The most recent delivery/read receipt of a sent message.
    pub async fn last_receipt_status(
        &self,
        message_id: &str,
    ) -> Result<ChainResult, ApipediaError> {
        self.status_query(StatusQuery::LastReceipt, message_id)
            .await
    }

    async fn status_query(
        &self,
        query: StatusQuery,
        message_id: &str,
    ) -> Result<ChainResult, ApipediaError> {
        let message_id = MessageId::new(message_id)?;
        let request = encode_status_query(&self.credentials, query, &message_id);
        self.send_raw(request.into()).await
    }

    /// Account profile of the connected device.
    pub async fn profile(&self) -> Result<ChainResult, ApipediaError> {
        self.send_raw(encode_profile(&self.credentials).into())
            .await
    }

    /// Show a presence state (typing, recording, ...) to `receiver` for `duration_secs`.
    pub async fn update_presence(
        &self,
        receiver: &str,
        presence: Presence,
        duration_secs: u32,
    ) -> Result<ChainResult, ApipediaError> {
        let request =
            encode_update_presence(&self.credentials, receiver, presence, duration_secs);
        self.send_raw(request.into()).await
    }

    async fn send_text(&self, request: Request, text: String) -> Result<ChainResult, ApipediaError> {
        let raw = self.dispatch(request).await?;
        Ok(ChainResult::new(self.clone(), raw, text))
    }

    async fn send_raw(&self, request: Request) -> Result<ChainResult, ApipediaError> {
        let raw = self.dispatch(request).await?;
        let text = render_text(&raw);
        Ok(ChainResult::new(self.clone(), raw, text))
    }

    pub(crate) async fn dispatch(&self, request: Request) -> Result<RawResult, ApipediaError> {
        let path = request.path();
        let url = self.endpoint(path)?;
        debug!(path, content_type = request.content_type(), "sending gateway request");

        let outcome = match request {
            Request::Json(json) => self.http.post_json(url.as_str(), &json.body).await,
            Request::Multipart(multipart) => {
                self.http
                    .post_multipart(url.as_str(), multipart.fields)
                    .await
            }
        };

        settle(outcome).inspect_err(|err| warn!(path, error = %err, "gateway request failed"))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApipediaError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path.trim_start_matches('/')))
            .map_err(|err| ApipediaError::request(format!("invalid endpoint URL: {err}")))
    }
}

fn settle(outcome: Result<HttpResponse, TransportFailure>) -> Result<RawResult, ApipediaError> {
    let response = outcome?;
    if !response.is_success() {
        return Err(TransportFailure::Response {
            status: response.status,
            body: response.body,
        }
        .into());
    }
    debug!(status = response.status, "gateway request succeeded");
    Ok(decode_raw(&response.body))
}

fn normalize_base_url(value: &str) -> Result<String, ApipediaError> {
    let mut url = Url::parse(value.trim())
        .map_err(|err| ApipediaError::request(format!("invalid base URL {value:?}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApipediaError::request(format!(
            "invalid base URL {value:?}: unsupported scheme {}",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.into())
}
