use serde_json::Value;

use super::request::{
    JsonRequest, MultipartRequest, credential_fields, credential_object, push_media, text,
};
use crate::domain::{Credentials, MediaReference, PipeList, ValidationError};

pub const CREATE_MESSAGE_PATH: &str = "/api/create-message";
pub const BULK_V1_PATH: &str = "/api/bulk-messagev1";
pub const BULK_V2_PATH: &str = "/api/bulk-messagev2";

const TO_FIELD: &str = "to";
const MESSAGE_FIELD: &str = "message";
const MEDIA_FIELD: &str = "media";

pub fn encode_send_message(
    credentials: &Credentials,
    to: &str,
    message: &str,
    media: MediaReference,
) -> MultipartRequest {
    let mut fields = credential_fields(credentials);
    fields.push(text(TO_FIELD, to));
    fields.push(text(MESSAGE_FIELD, message));
    push_media(&mut fields, MEDIA_FIELD, media);

    MultipartRequest {
        path: CREATE_MESSAGE_PATH,
        fields,
    }
}

/// Same message to every recipient.
pub fn encode_bulk_v1(credentials: &Credentials, to: &PipeList, message: &str) -> JsonRequest {
    JsonRequest {
        path: BULK_V1_PATH,
        body: bulk_body(credentials, to.as_str(), message),
    }
}

/// One message per recipient, matched by position.
///
/// Rejects lists whose entry counts differ rather than sending misaligned data.
pub fn encode_bulk_v2(
    credentials: &Credentials,
    to: &PipeList,
    messages: &PipeList,
) -> Result<JsonRequest, ValidationError> {
    if to.len() != messages.len() {
        return Err(ValidationError::CountMismatch {
            recipients: to.len(),
            messages: messages.len(),
        });
    }

    Ok(JsonRequest {
        path: BULK_V2_PATH,
        body: bulk_body(credentials, to.as_str(), messages.as_str()),
    })
}

fn bulk_body(credentials: &Credentials, to: &str, message: &str) -> Value {
    let mut body = credential_object(credentials);
    body.insert(TO_FIELD.to_owned(), Value::String(to.to_owned()));
    body.insert(MESSAGE_FIELD.to_owned(), Value::String(message.to_owned()));
    Value::Object(body)
}
