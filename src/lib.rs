//! Notification channel for the smsmode SMS HTTP API.
//!
//! The crate is split the usual way: a domain layer of message values and strong
//! types, a transport layer for the smsmode URL layout and JSON wire format, and a
//! small client layer that resolves a recipient and a message and issues one `POST`.
//!
//! ```rust,no_run
//! use smsmode::{
//!     ApiKey, Payload, Recipient, RecipientRoutable, SenderId, SmsmodeChannel, SmsmodeMessage,
//!     SmsmodeNotification,
//! };
//!
//! struct User {
//!     phone: String,
//! }
//!
//! impl RecipientRoutable for User {
//!     fn route_for(&self, channel: &str) -> Option<Recipient> {
//!         if channel != smsmode::CHANNEL_NAME {
//!             return None;
//!         }
//!         Recipient::new(self.phone.clone()).ok()
//!     }
//! }
//!
//! struct OrderShipped;
//!
//! impl SmsmodeNotification<User> for OrderShipped {
//!     fn to_smsmode(&self, _user: &User) -> Option<Payload> {
//!         Some(SmsmodeMessage::builder("Your order has shipped").stop(true).build().into())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsmode::SmsmodeError> {
//!     let channel = SmsmodeChannel::builder(ApiKey::new("...")?, SenderId::new("ACME")?).build()?;
//!     let user = User { phone: "+33612345678".to_owned() };
//!     let _outcome = channel.send(&user, &OrderShipped).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, CHANNEL_NAME, CHANNEL_TYPE_NAME, DEFAULT_ENDPOINT, HttpClient,
    HttpResponse, ReqwestClient, RequestOptions, SendOutcome, SmsmodeChannel,
    SmsmodeChannelBuilder, SmsmodeError,
};
pub use domain::{
    ApiKey, Encoding, Payload, Recipient, RecipientRoutable, SenderId, SmsmodeMessage,
    SmsmodeMessageBuilder, SmsmodeNotification, ValidationError,
};
pub use phonenumber::country;
pub use reqwest::Method;
