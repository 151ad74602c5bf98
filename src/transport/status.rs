use serde_json::Value;

use super::request::{JsonRequest, credential_object};
use crate::domain::{Credentials, MessageId};

pub const STATUS_ALL_PATH: &str = "/api/messages/status/all";
pub const LAST_STATUS_PATH: &str = "/api/messages/status/last";
pub const LAST_RECEIPT_STATUS_PATH: &str = "/api/messages/status/last/receipt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusQuery {
    All,
    Last,
    LastReceipt,
}

impl StatusQuery {
    fn path(self) -> &'static str {
        match self {
            Self::All => STATUS_ALL_PATH,
            Self::Last => LAST_STATUS_PATH,
            Self::LastReceipt => LAST_RECEIPT_STATUS_PATH,
        }
    }
}

pub fn encode_status_query(
    credentials: &Credentials,
    query: StatusQuery,
    message_id: &MessageId,
) -> JsonRequest {
    let mut body = credential_object(credentials);
    body.insert(
        MessageId::FIELD.to_owned(),
        Value::String(message_id.as_str().to_owned()),
    );

    JsonRequest {
        path: query.path(),
        body: Value::Object(body),
    }
}
