use apipedia::{AiFormat, Hop};

mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = common::client_from_env()?;
    let agent_id = common::required_env("AI_AGENT_ID")?;
    let number = common::required_env("TEST_WHATSAPP_NUMBER")?;
    let receiver = common::required_env("TEST_TELEGRAM_RECEIVER")?;

    let summary = client
        .ai_chat("Create a brief summary", &agent_id, AiFormat::Text)
        .await?
        .to_whatsapp(&number, Some("WhatsApp: "))
        .await?
        .to_telegram(&receiver, Some("Telegram: "))
        .await?;
    println!("summary: {}", summary.text());

    let report = client
        .ai_chat("Create a brief weather report", &agent_id, AiFormat::Text)
        .await?;
    let links = report
        .relay([
            Hop::whatsapp(&number).with_prefix("Weather WhatsApp: "),
            Hop::telegram(&receiver).with_prefix("Weather Telegram: "),
            Hop::sms(&number).with_prefix("Weather SMS: "),
        ])
        .await?;
    for link in &links {
        println!("hop: {:?}", link.result());
    }

    Ok(())
}
