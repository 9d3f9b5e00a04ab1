use std::io;
use std::time::Duration;

use smsmode::{
    ApiKey, Payload, Recipient, RecipientRoutable, SenderId, SmsmodeChannel,
    SmsmodeMessage, SmsmodeNotification,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct Customer {
    phone: Recipient,
}

impl RecipientRoutable for Customer {
    fn route_for(&self, channel: &str) -> Option<Recipient> {
        (channel == smsmode::CHANNEL_NAME).then(|| self.phone.clone())
    }
}

struct Reminder {
    campaign_id: String,
}

impl SmsmodeNotification<Customer> for Reminder {
    fn to_smsmode(&self, _customer: &Customer) -> Option<Payload> {
        let tomorrow = chrono::Local::now() + chrono::Duration::days(1);
        Some(
            SmsmodeMessage::builder("Rappel : votre rendez-vous est demain à 10h.")
                .unicode()
                .stop(true)
                .reference("reminder-demo")
                .scheduled_at(tomorrow)
                .campaign_id(self.campaign_id.clone())
                .build()
                .into(),
        )
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
    let campaign_id = required_env("SMSMODE_CAMPAIGN_ID")?;

    let channel = SmsmodeChannel::builder(ApiKey::new(api_key)?, SenderId::new(sender)?)
        .timeout(Duration::from_secs(10))
        .user_agent("smsmode-demos/0.1")
        .build()?;

    let customer = Customer {
        phone: Recipient::phone(Some(smsmode::country::Id::FR), phone)?,
    };
    let outcome = channel.send(&customer, &Reminder { campaign_id }).await?;
    println!("outcome: {outcome:?}");

    Ok(())
}
