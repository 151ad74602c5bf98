use super::request::{
    MultipartRequest, credential_fields, push_media, push_optional, text,
};
use crate::domain::{ButtonRows, Coordinates, Credentials, MediaReference, ValidationError};

pub const SEND_MESSAGE_PATH: &str = "/api/telegram/send_message";
pub const SEND_IMAGE_PATH: &str = "/api/telegram/send_image";
pub const SEND_LOCATION_PATH: &str = "/api/telegram/send_location";
pub const SEND_BUTTONS_PATH: &str = "/api/telegram/send_buttons";
pub const SEND_DOCUMENT_PATH: &str = "/api/telegram/send_document";

const RECEIVER_FIELD: &str = "receiver";
const BODY_FIELD: &str = "body";
const IMAGE_FIELD: &str = "image";
const DOCUMENT_FIELD: &str = "document";
const CAPTION_FIELD: &str = "caption";
const FILENAME_FIELD: &str = "filename";

pub fn encode_send_message(
    credentials: &Credentials,
    receiver: &str,
    body: &str,
) -> MultipartRequest {
    let mut fields = credential_fields(credentials);
    fields.push(text(RECEIVER_FIELD, receiver));
    fields.push(text(BODY_FIELD, body));

    MultipartRequest {
        path: SEND_MESSAGE_PATH,
        fields,
    }
}

pub fn encode_send_image(
    credentials: &Credentials,
    receiver: &str,
    image: MediaReference,
    caption: Option<&str>,
) -> Result<MultipartRequest, ValidationError> {
    if image.is_none() {
        return Err(ValidationError::Empty { field: IMAGE_FIELD });
    }

    let mut fields = credential_fields(credentials);
    fields.push(text(RECEIVER_FIELD, receiver));
    push_media(&mut fields, IMAGE_FIELD, image);
    push_optional(&mut fields, CAPTION_FIELD, caption);

    Ok(MultipartRequest {
        path: SEND_IMAGE_PATH,
        fields,
    })
}

pub fn encode_send_location(
    credentials: &Credentials,
    receiver: &str,
    coordinates: Coordinates,
) -> MultipartRequest {
    let mut fields = credential_fields(credentials);
    fields.push(text(RECEIVER_FIELD, receiver));
    fields.push(text(
        Coordinates::LATITUDE_FIELD,
        coordinates.latitude().to_string(),
    ));
    fields.push(text(
        Coordinates::LONGITUDE_FIELD,
        coordinates.longitude().to_string(),
    ));

    MultipartRequest {
        path: SEND_LOCATION_PATH,
        fields,
    }
}

pub fn encode_send_buttons(
    credentials: &Credentials,
    receiver: &str,
    body: &str,
    buttons: &ButtonRows,
) -> Result<MultipartRequest, ValidationError> {
    let mut fields = credential_fields(credentials);
    fields.push(text(RECEIVER_FIELD, receiver));
    fields.push(text(BODY_FIELD, body));
    fields.push(text(ButtonRows::FIELD, buttons.to_json()?));

    Ok(MultipartRequest {
        path: SEND_BUTTONS_PATH,
        fields,
    })
}

pub fn encode_send_document(
    credentials: &Credentials,
    receiver: &str,
    document: MediaReference,
    caption: Option<&str>,
    filename: Option<&str>,
) -> Result<MultipartRequest, ValidationError> {
    if document.is_none() {
        return Err(ValidationError::Empty {
            field: DOCUMENT_FIELD,
        });
    }

    let mut fields = credential_fields(credentials);
    fields.push(text(RECEIVER_FIELD, receiver));
    push_media(&mut fields, DOCUMENT_FIELD, document);
    push_optional(&mut fields, CAPTION_FIELD, caption);
    push_optional(&mut fields, FILENAME_FIELD, filename);

    Ok(MultipartRequest {
        path: SEND_DOCUMENT_PATH,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TelegramButton;
    use crate::transport::request::text_field;

    fn credentials() -> Credentials {
        Credentials::new("app", "auth").unwrap()
    }

    #[test]
    fn send_message_fields() {
        let request = encode_send_message(&credentials(), "368628054", "Hello from Telegram Bot!");
        assert_eq!(request.path, "/api/telegram/send_message");
        assert_eq!(text_field(&request.fields, "receiver"), Some("368628054"));
        assert_eq!(
            text_field(&request.fields, "body"),
            Some("Hello from Telegram Bot!")
        );
        assert_eq!(text_field(&request.fields, "appkey"), Some("app"));
    }

    #[test]
    fn send_image_requires_media_and_keeps_caption() {
        let err = encode_send_image(&credentials(), "1", MediaReference::None, None).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "image" });

        let request = encode_send_image(
            &credentials(),
            "1",
            MediaReference::RemoteUrl("https://example.com/photo.jpg".to_owned()),
            Some("Photo caption"),
        )
        .unwrap();
        assert_eq!(request.path, "/api/telegram/send_image");
        assert_eq!(
            text_field(&request.fields, "image"),
            Some("https://example.com/photo.jpg")
        );
        assert_eq!(text_field(&request.fields, "caption"), Some("Photo caption"));
    }

    #[test]
    fn send_location_formats_coordinates() {
        let coordinates = Coordinates::new(-6.2088, 106.8456).unwrap();
        let request = encode_send_location(&credentials(), "1", coordinates);
        assert_eq!(request.path, "/api/telegram/send_location");
        assert_eq!(text_field(&request.fields, "latitude"), Some("-6.2088"));
        assert_eq!(text_field(&request.fields, "longitude"), Some("106.8456"));
    }

    #[test]
    fn send_buttons_serializes_rows_as_json() {
        let buttons = ButtonRows::new(vec![
            vec![
                TelegramButton::callback("Option 1", "option_1"),
                TelegramButton::callback("Option 2", "option_2"),
            ],
            vec![TelegramButton::link("Visit Website", "https://example.com")],
        ])
        .unwrap();

        let request =
            encode_send_buttons(&credentials(), "1", "Choose an option:", &buttons).unwrap();
        assert_eq!(request.path, "/api/telegram/send_buttons");
        assert_eq!(
            text_field(&request.fields, "buttons"),
            Some(
                r#"[[{"text":"Option 1","callback_data":"option_1"},{"text":"Option 2","callback_data":"option_2"}],[{"text":"Visit Website","url":"https://example.com"}]]"#
            )
        );
    }

    #[test]
    fn send_document_includes_optional_fields() {
        let request = encode_send_document(
            &credentials(),
            "1",
            MediaReference::RemoteUrl("https://temp.apipedia.id/example/sample-1.pdf".to_owned()),
            Some("Document caption"),
            Some("document.pdf"),
        )
        .unwrap();
        assert_eq!(request.path, "/api/telegram/send_document");
        assert_eq!(text_field(&request.fields, "caption"), Some("Document caption"));
        assert_eq!(text_field(&request.fields, "filename"), Some("document.pdf"));

        let request = encode_send_document(
            &credentials(),
            "1",
            MediaReference::RemoteUrl("https://example.com/a.pdf".to_owned()),
            None,
            None,
        )
        .unwrap();
        assert!(text_field(&request.fields, "caption").is_none());
        assert!(text_field(&request.fields, "filename").is_none());
    }
}
