use apipedia::Presence;

mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = common::client_from_env()?;
    let message_id = common::required_env("APIPEDIA_MESSAGE_ID")?;

    let all = client.message_status_all(&message_id).await?;
    println!("all statuses: {:?}", all.result());

    let last = client.last_status(&message_id).await?;
    println!("last status: {:?}", last.result());

    let receipt = client.last_receipt_status(&message_id).await?;
    println!("last receipt: {:?}", receipt.result());

    let profile = client.profile().await?;
    println!("profile: {:?}", profile.result());

    if let Ok(number) = std::env::var("TEST_WHATSAPP_NUMBER") {
        let typing = client
            .update_presence(&number, Presence::Composing, 5)
            .await?;
        typing.to_whatsapp(&number, Some("Typing status: ")).await?;
    }

    Ok(())
}
