use apipedia::{ButtonRows, TelegramButton};

mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = common::client_from_env()?;
    let receiver = common::required_env("TEST_TELEGRAM_RECEIVER")?;

    let text = client
        .telegram_send_message(&receiver, "Hello from Telegram Bot!")
        .await?;
    println!("text: {:?}", text.result());

    let image = client
        .telegram_send_image(&receiver, "https://example.com/photo.jpg", Some("Photo caption"))
        .await?;
    println!("image: {:?}", image.result());

    let location = client
        .telegram_send_location(&receiver, -6.2088, 106.8456)
        .await?;
    println!("location: {:?}", location.result());

    let buttons = ButtonRows::new(vec![
        vec![
            TelegramButton::callback("Option 1", "option_1"),
            TelegramButton::callback("Option 2", "option_2"),
        ],
        vec![TelegramButton::link("Visit Website", "https://example.com")],
    ])?;
    let menu = client
        .telegram_send_buttons(&receiver, "Choose an option:", &buttons)
        .await?;
    println!("buttons: {:?}", menu.result());

    let document = client
        .telegram_send_document(
            &receiver,
            "https://temp.apipedia.id/example/sample-1.pdf",
            Some("Document caption"),
            Some("sample.pdf"),
        )
        .await?;
    println!("document: {:?}", document.result());

    Ok(())
}
