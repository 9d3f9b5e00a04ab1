use std::io;

use smsmode::{
    ApiKey, Payload, Recipient, RecipientRoutable, SenderId, SmsmodeChannel, SmsmodeNotification,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct Phone(Recipient);

impl RecipientRoutable for Phone {
    fn route_for(&self, _channel: &str) -> Option<Recipient> {
        Some(self.0.clone())
    }
}

struct Text(String);

impl SmsmodeNotification<Phone> for Text {
    fn to_smsmode(&self, _notifiable: &Phone) -> Option<Payload> {
        Some(Payload::Text(self.0.clone()))
    }
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let api_key = required_env("SMSMODE_API_KEY")?;
    let sender = required_env("SMSMODE_SENDER")?;
    let phone = required_env("SMSMODE_PHONE")?;
    let message = std::env::var("SMSMODE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsmode demo.".to_owned());

    let mut builder = SmsmodeChannel::builder(ApiKey::new(api_key)?, SenderId::new(sender)?);
    if let Ok(endpoint) = std::env::var("SMSMODE_ENDPOINT") {
        builder = builder.endpoint(endpoint);
    }
    let channel = builder.build()?;

    let outcome = channel
        .send(&Phone(Recipient::new(phone)?), &Text(message))
        .await?;
    println!("outcome: {outcome:?}");

    Ok(())
}
