mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = common::client_from_env()?;
    let number = common::required_env("TEST_WHATSAPP_NUMBER")?;
    let message = std::env::var("APIPEDIA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the apipedia demo.".to_owned());

    let response = client.whatsapp(&number, &message).await?;
    println!("text: {:?}", response.result());

    if let Ok(media) = std::env::var("APIPEDIA_MEDIA") {
        let response = client
            .whatsapp_with_media(&number, "Media from the apipedia demo.", media)
            .await?;
        println!("media: {:?}", response.result());
    }

    Ok(())
}
