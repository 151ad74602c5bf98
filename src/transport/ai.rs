use serde_json::Value;

use super::request::{JsonRequest, credential_object};
use crate::domain::{AgentId, AiFormat, Credentials};

pub const AI_CHAT_PATH: &str = "/api/ai/chat";

const MESSAGE_FIELD: &str = "message";

pub fn encode_ai_chat(
    credentials: &Credentials,
    prompt: &str,
    agent_id: &AgentId,
    format: AiFormat,
) -> JsonRequest {
    let mut body = credential_object(credentials);
    body.insert(
        AgentId::FIELD.to_owned(),
        Value::String(agent_id.as_str().to_owned()),
    );
    body.insert(MESSAGE_FIELD.to_owned(), Value::String(prompt.to_owned()));
    body.insert(
        AiFormat::FIELD.to_owned(),
        Value::String(format.as_str().to_owned()),
    );

    JsonRequest {
        path: AI_CHAT_PATH,
        body: Value::Object(body),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ai_chat_body() {
        let credentials = Credentials::new("app", "auth").unwrap();
        let agent = AgentId::new("b33a2b7b-fd21-41af-92ee-268bcbccce49").unwrap();
        let request = encode_ai_chat(&credentials, "Hello", &agent, AiFormat::Json);

        assert_eq!(request.path, "/api/ai/chat");
        assert_eq!(
            request.body,
            json!({
                "appkey": "app",
                "authkey": "auth",
                "agent_id": "b33a2b7b-fd21-41af-92ee-268bcbccce49",
                "message": "Hello",
                "format": "json"
            })
        );
    }
}
