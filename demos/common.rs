use std::io;

use apipedia::{ApipediaClient, Credentials};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

pub fn client_from_env() -> Result<ApipediaClient, Box<dyn std::error::Error>> {
    let credentials = Credentials::new(
        required_env("APIPEDIA_APP_KEY")?,
        required_env("APIPEDIA_AUTH_KEY")?,
    )?;
    Ok(ApipediaClient::new(credentials))
}
