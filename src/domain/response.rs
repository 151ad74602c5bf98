/// Success payload returned by the gateway, kept as arbitrary JSON.
pub type RawResult = serde_json::Value;
