use std::fmt;

use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Character set used to encode the SMS body.
pub enum Encoding {
    /// GSM 03.38 7-bit alphabet (160 chars per segment).
    #[default]
    Gsm7,
    /// UCS-2, needed for characters outside the GSM alphabet (70 chars per segment).
    Unicode,
}

impl Encoding {
    /// Name used on the wire (`GSM7` / `UNICODE`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gsm7 => "GSM7",
            Self::Unicode => "UNICODE",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One SMS to send through smsmode.
///
/// Built once, sent once. Use [`SmsmodeMessage::new`] for a plain text message or
/// [`SmsmodeMessage::builder`] to set the optional fields. No value is validated here:
/// an empty body is accepted and sent as an empty string.
pub struct SmsmodeMessage {
    content: String,
    encoding: Encoding,
    stop: bool,
    sender: Option<String>,
    reference: Option<String>,
    callback_status_url: Option<String>,
    callback_inbound_url: Option<String>,
    scheduled_at: Option<DateTime<FixedOffset>>,
    channel_id: Option<String>,
    campaign_id: Option<String>,
}

impl SmsmodeMessage {
    /// Create a message with the given body and every option at its default.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Start building a message with the given body.
    pub fn builder(content: impl Into<String>) -> SmsmodeMessageBuilder {
        SmsmodeMessageBuilder::new(content)
    }

    /// Body text as provided (trimming happens when the payload is assembled).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Body encoding; [`Encoding::Gsm7`] unless [`SmsmodeMessageBuilder::unicode`] was called.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Whether smsmode appends the STOP opt-out mention.
    pub fn stop(&self) -> bool {
        self.stop
    }

    /// Sender override; `None` means the channel default sender is used.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Client-side correlation id (`refClient`).
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// URL notified on delivery status changes (`callbackUrlStatus`).
    pub fn callback_status_url(&self) -> Option<&str> {
        self.callback_status_url.as_deref()
    }

    /// URL notified on inbound replies (`callbackUrlMo`).
    pub fn callback_inbound_url(&self) -> Option<&str> {
        self.callback_inbound_url.as_deref()
    }

    /// Deferred send date (`sentDate`).
    pub fn scheduled_at(&self) -> Option<&DateTime<FixedOffset>> {
        self.scheduled_at.as_ref()
    }

    /// smsmode channel the message is sent through, if any.
    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    /// smsmode campaign the message belongs to, if any.
    pub fn campaign_id(&self) -> Option<&str> {
        self.campaign_id.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
/// Fluent builder for [`SmsmodeMessage`].
pub struct SmsmodeMessageBuilder {
    message: SmsmodeMessage,
}

impl SmsmodeMessageBuilder {
    /// Create a builder with the given body.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            message: SmsmodeMessage::new(content),
        }
    }

    /// Replace the body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.message.content = content.into();
        self
    }

    /// Encode the body as [`Encoding::Unicode`]. GSM7 is the default.
    pub fn unicode(mut self) -> Self {
        self.message.encoding = Encoding::Unicode;
        self
    }

    /// Ask smsmode to append the STOP opt-out mention.
    pub fn stop(mut self, stop: bool) -> Self {
        self.message.stop = stop;
        self
    }

    /// Override the channel default sender.
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.message.sender = Some(sender.into());
        self
    }

    /// Set the client-side correlation id, echoed back in status callbacks.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.message.reference = Some(reference.into());
        self
    }

    /// Set the URL smsmode calls on delivery status changes.
    pub fn callback_status_url(mut self, url: impl Into<String>) -> Self {
        self.message.callback_status_url = Some(url.into());
        self
    }

    /// Set the URL smsmode calls when the recipient replies.
    pub fn callback_inbound_url(mut self, url: impl Into<String>) -> Self {
        self.message.callback_inbound_url = Some(url.into());
        self
    }

    /// Defer the send. Accepts any `DateTime` convertible to a fixed offset
    /// (`DateTime<Utc>`, `DateTime<Local>`, `DateTime<FixedOffset>`).
    pub fn scheduled_at(mut self, at: impl Into<DateTime<FixedOffset>>) -> Self {
        self.message.scheduled_at = Some(at.into());
        self
    }

    /// Send through a specific smsmode channel.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.message.channel_id = Some(channel_id.into());
        self
    }

    /// Attach the message to a smsmode campaign.
    pub fn campaign_id(mut self, campaign_id: impl Into<String>) -> Self {
        self.message.campaign_id = Some(campaign_id.into());
        self
    }

    /// Finish the message.
    pub fn build(self) -> SmsmodeMessage {
        self.message
    }
}

impl From<SmsmodeMessageBuilder> for SmsmodeMessage {
    fn from(value: SmsmodeMessageBuilder) -> Self {
        value.build()
    }
}
