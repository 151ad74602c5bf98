//! Transport layer: endpoint paths and wire encodings (JSON bodies and multipart fields).

mod account;
mod ai;
mod request;
mod response;
mod sms;
mod status;
mod telegram;
mod whatsapp;

pub use account::{encode_profile, encode_update_presence};
pub use ai::encode_ai_chat;
pub use request::{FormValue, Request};
pub use response::{decode_api_message, decode_raw, decode_reply_text, render_text};
pub use sms::encode_send_sms;
pub use status::{StatusQuery, encode_status_query};
pub use telegram::{
    encode_send_buttons as encode_telegram_buttons,
    encode_send_document as encode_telegram_document,
    encode_send_image as encode_telegram_image,
    encode_send_location as encode_telegram_location,
    encode_send_message as encode_telegram_message,
};
pub use whatsapp::{
    encode_bulk_v1, encode_bulk_v2, encode_send_message as encode_whatsapp_message,
};
