mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = common::client_from_env()?;
    let numbers = common::required_env("APIPEDIA_BULK_NUMBERS")?;

    let response = client
        .bulk_v1(numbers.as_str(), "Same message for every number")
        .await?;
    println!("bulk v1: {:?}", response.result());

    let count = apipedia::PipeList::from(numbers.as_str()).len();
    let messages = (1..=count)
        .map(|idx| format!("Message number {idx}"))
        .collect::<Vec<_>>();
    let response = client.bulk_v2(numbers.as_str(), messages).await?;
    println!("bulk v2: {:?}", response.result());

    Ok(())
}
