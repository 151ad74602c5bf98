use serde_json::{Map, Value};

use crate::domain::{AppKey, AuthKey, Credentials, MediaReference, MediaStream};

/// One multipart field value.
#[derive(Debug)]
pub enum FormValue {
    Text(String),
    File(MediaStream),
}

/// A JSON POST ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    pub path: &'static str,
    pub body: Value,
}

/// A multipart POST ready for the transport.
#[derive(Debug)]
pub struct MultipartRequest {
    pub path: &'static str,
    pub fields: Vec<(String, FormValue)>,
}

#[derive(Debug)]
pub enum Request {
    Json(JsonRequest),
    Multipart(MultipartRequest),
}

impl Request {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Json(json) => json.path,
            Self::Multipart(multipart) => multipart.path,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Multipart(_) => "multipart/form-data",
        }
    }
}

impl From<JsonRequest> for Request {
    fn from(value: JsonRequest) -> Self {
        Self::Json(value)
    }
}

impl From<MultipartRequest> for Request {
    fn from(value: MultipartRequest) -> Self {
        Self::Multipart(value)
    }
}

/// Start a multipart field list with `appkey` and `authkey`.
pub fn credential_fields(credentials: &Credentials) -> Vec<(String, FormValue)> {
    vec![
        text(AppKey::FIELD, credentials.appkey().as_str()),
        text(AuthKey::FIELD, credentials.authkey().as_str()),
    ]
}

/// Start a JSON object with `appkey` and `authkey`.
pub fn credential_object(credentials: &Credentials) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(
        AppKey::FIELD.to_owned(),
        Value::String(credentials.appkey().as_str().to_owned()),
    );
    body.insert(
        AuthKey::FIELD.to_owned(),
        Value::String(credentials.authkey().as_str().to_owned()),
    );
    body
}

pub fn text(name: &str, value: impl Into<String>) -> (String, FormValue) {
    (name.to_owned(), FormValue::Text(value.into()))
}

/// Attach resolved media under `name`; URLs go as text, streams as file parts.
pub fn push_media(fields: &mut Vec<(String, FormValue)>, name: &str, media: MediaReference) {
    match media {
        MediaReference::None => {}
        MediaReference::RemoteUrl(url) => fields.push(text(name, url)),
        MediaReference::Stream(stream) => fields.push((name.to_owned(), FormValue::File(stream))),
    }
}

pub fn push_optional(fields: &mut Vec<(String, FormValue)>, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|it| !it.is_empty()) {
        fields.push(text(name, value));
    }
}

#[cfg(test)]
pub(crate) fn text_field<'a>(fields: &'a [(String, FormValue)], name: &str) -> Option<&'a str> {
    fields.iter().find_map(|(key, value)| match value {
        FormValue::Text(text) if key == name => Some(text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_fields_come_first() {
        let credentials = Credentials::new("app", "auth").unwrap();
        let fields = credential_fields(&credentials);
        let names = fields.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["appkey", "authkey"]);
        assert_eq!(text_field(&fields, "appkey"), Some("app"));
        assert_eq!(text_field(&fields, "authkey"), Some("auth"));
    }

    #[test]
    fn push_media_skips_absent_media_and_sends_urls_as_text() {
        let mut fields = Vec::new();
        push_media(&mut fields, "media", MediaReference::None);
        assert!(fields.is_empty());

        push_media(
            &mut fields,
            "media",
            MediaReference::RemoteUrl("https://example.com/a.pdf".to_owned()),
        );
        assert_eq!(text_field(&fields, "media"), Some("https://example.com/a.pdf"));
    }

    #[test]
    fn push_optional_ignores_empty_values() {
        let mut fields = Vec::new();
        push_optional(&mut fields, "caption", Some(""));
        push_optional(&mut fields, "caption", None);
        assert!(fields.is_empty());
        push_optional(&mut fields, "caption", Some("hi"));
        assert_eq!(text_field(&fields, "caption"), Some("hi"));
    }

    #[test]
    fn content_type_follows_encoding() {
        let json = Request::from(JsonRequest {
            path: "/api/profile",
            body: Value::Null,
        });
        assert_eq!(json.content_type(), "application/json");
        assert_eq!(json.path(), "/api/profile");

        let multipart = Request::from(MultipartRequest {
            path: "/api/create-message",
            fields: Vec::new(),
        });
        assert_eq!(multipart.content_type(), "multipart/form-data");
    }
}
