use super::request::{MultipartRequest, credential_fields, text};
use crate::domain::{Credentials, SmsRoute};

pub const SEND_REGULAR_PATH: &str = "/api/sms/send-regular";
pub const SEND_VIP_PATH: &str = "/api/sms/send-vip";
pub const SEND_OTP_PATH: &str = "/api/sms/send-otp";
pub const SEND_VVIP_PATH: &str = "/api/sms/send-vvip";

const TO_FIELD: &str = "to";
const MSG_FIELD: &str = "msg";

fn route_path(route: SmsRoute) -> &'static str {
    match route {
        SmsRoute::Regular => SEND_REGULAR_PATH,
        SmsRoute::Vip => SEND_VIP_PATH,
        SmsRoute::Otp => SEND_OTP_PATH,
        SmsRoute::Vvip => SEND_VVIP_PATH,
    }
}

pub fn encode_send_sms(
    credentials: &Credentials,
    route: SmsRoute,
    to: &str,
    msg: &str,
) -> MultipartRequest {
    let mut fields = credential_fields(credentials);
    fields.push(text(TO_FIELD, to));
    fields.push(text(MSG_FIELD, msg));

    MultipartRequest {
        path: route_path(route),
        fields,
    }
}
