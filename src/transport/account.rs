use serde_json::Value;

use super::request::{JsonRequest, credential_object};
use crate::domain::{Credentials, Presence};

pub const PROFILE_PATH: &str = "/api/profile";
pub const PRESENCE_PATH: &str = "/api/presence";

const RECEIVER_FIELD: &str = "receiver";
const DURATION_FIELD: &str = "duration";

pub fn encode_profile(credentials: &Credentials) -> JsonRequest {
    JsonRequest {
        path: PROFILE_PATH,
        body: Value::Object(credential_object(credentials)),
    }
}

/// `duration` is in seconds.
pub fn encode_update_presence(
    credentials: &Credentials,
    receiver: &str,
    presence: Presence,
    duration: u32,
) -> JsonRequest {
    let mut body = credential_object(credentials);
    body.insert(
        RECEIVER_FIELD.to_owned(),
        Value::String(receiver.to_owned()),
    );
    body.insert(
        Presence::FIELD.to_owned(),
        Value::String(presence.as_str().to_owned()),
    );
    body.insert(DURATION_FIELD.to_owned(), Value::from(duration));

    JsonRequest {
        path: PRESENCE_PATH,
        body: Value::Object(body),
    }
}
