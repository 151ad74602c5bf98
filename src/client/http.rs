use std::future::Future;
use std::pin::Pin;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio_util::io::ReaderStream;

use super::error::TransportFailure;
use crate::transport::FormValue;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl HttpResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// The two POST shapes the gateway understands.
pub(crate) trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;

    fn post_multipart<'a>(
        &'a self,
        url: &'a str,
        fields: Vec<(String, FormValue)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl ReqwestTransport {
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<HttpResponse, TransportFailure> {
        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move { self.send(self.client.post(url).json(body)).await })
    }

    fn post_multipart<'a>(
        &'a self,
        url: &'a str,
        fields: Vec<(String, FormValue)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let form = into_form(fields);
            self.send(self.client.post(url).multipart(form)).await
        })
    }
}

fn classify(err: reqwest::Error) -> TransportFailure {
    if err.is_builder() {
        TransportFailure::Setup(Box::new(err))
    } else {
        TransportFailure::NoResponse(Box::new(err))
    }
}

fn into_form(fields: Vec<(String, FormValue)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| match value {
            FormValue::Text(text) => form.text(name, text),
            FormValue::File(stream) => {
                let (reader, file_name) = stream.into_parts();
                let body = reqwest::Body::wrap_stream(ReaderStream::new(reader));
                let part = Part::stream(body).file_name(file_name.unwrap_or_else(|| name.clone()));
                form.part(name, part)
            }
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::ApipediaError;
    use crate::domain::MediaStream;

    fn transport() -> ReqwestTransport {
        ReqwestTransport {
            client: reqwest::Client::new(),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let transport = transport();

        let failure = transport
            .post_json("http://127.0.0.1:1/api/profile", &json!({}))
            .await
            .unwrap_err();
        let err = ApipediaError::from(failure);
        assert!(matches!(err, ApipediaError::Network(_)));
        assert_eq!(
            err.to_string(),
            "Network Error: No response received from API"
        );

        let fields = vec![("to".to_owned(), FormValue::Text("628998937095".to_owned()))];
        let failure = transport
            .post_multipart("http://127.0.0.1:1/api/create-message", fields)
            .await
            .unwrap_err();
        assert!(matches!(
            ApipediaError::from(failure),
            ApipediaError::Network(_)
        ));
    }

    #[tokio::test]
    async fn unbuildable_request_is_request_error() {
        let failure = transport()
            .post_json("not a url", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(failure, TransportFailure::Setup(_)));
        assert!(matches!(
            ApipediaError::from(failure),
            ApipediaError::Request { .. }
        ));
    }

    #[tokio::test]
    async fn multipart_keeps_field_names_and_file_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/create-message"))
            .and(header_regex("content-type", "multipart/form-data"))
            .and(body_string_contains("name=\"to\""))
            .and(body_string_contains("628998937095"))
            .and(body_string_contains("name=\"media\"; filename=\"photo.jpg\""))
            .and(body_string_contains("image-bytes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let fields = vec![
            ("to".to_owned(), FormValue::Text("628998937095".to_owned())),
            (
                "media".to_owned(),
                FormValue::File(MediaStream::new(&b"image-bytes"[..]).with_file_name("photo.jpg")),
            ),
        ];
        let response = transport()
            .post_multipart(&format!("{}/api/create-message", server.uri()), fields)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn unnamed_stream_falls_back_to_field_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("name=\"document\"; filename=\"document\""))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let fields = vec![(
            "document".to_owned(),
            FormValue::File(MediaStream::new(&b"%PDF"[..])),
        )];
        let response = transport()
            .post_multipart(&server.uri(), fields)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn error_status_is_returned_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"message":"Unauthorized"}"#),
            )
            .mount(&server)
            .await;

        let response = transport()
            .post_json(&server.uri(), &json!({"appkey": "a"}))
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert!(!response.is_success());
        assert_eq!(response.body, r#"{"message":"Unauthorized"}"#);
    }
}
