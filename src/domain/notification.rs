use crate::domain::message::SmsmodeMessage;
use crate::domain::value::Recipient;

/// Something that can receive notifications and knows its address per channel.
///
/// The channel asks with its short name first (`"smsmode"`) and then with its fully
/// qualified type name; returning `None` for both makes the send a no-op.
pub trait RecipientRoutable {
    /// Address for `channel`, or `None` when this notifiable cannot be reached on it.
    fn route_for(&self, channel: &str) -> Option<Recipient>;
}

impl<T: RecipientRoutable + ?Sized> RecipientRoutable for &T {
    fn route_for(&self, channel: &str) -> Option<Recipient> {
        (**self).route_for(channel)
    }
}

/// A notification that can render itself as an smsmode payload for a given notifiable.
///
/// Returning `None` makes the send a no-op.
pub trait SmsmodeNotification<N: ?Sized> {
    /// Render the payload sent to `notifiable`.
    fn to_smsmode(&self, notifiable: &N) -> Option<Payload>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a notification produces for the smsmode channel.
pub enum Payload {
    /// Plain body text; every other option keeps its default.
    Text(String),
    /// Fully configured message, sent as-is.
    Message(SmsmodeMessage),
}

impl Payload {
    /// Resolve to the message the channel sends.
    pub fn into_message(self) -> SmsmodeMessage {
        match self {
            Self::Text(text) => SmsmodeMessage::new(text),
            Self::Message(message) => message,
        }
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<SmsmodeMessage> for Payload {
    fn from(value: SmsmodeMessage) -> Self {
        Self::Message(value)
    }
}
