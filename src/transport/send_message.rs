use serde::Serialize;

use crate::domain::{Encoding, Recipient, SenderId, SmsmodeMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
enum TransportEncoding {
    Gsm7,
    Unicode,
}

impl From<Encoding> for TransportEncoding {
    fn from(value: Encoding) -> Self {
        match value {
            Encoding::Gsm7 => Self::Gsm7,
            Encoding::Unicode => Self::Unicode,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageJsonRequest<'a> {
    recipient: RecipientJson<'a>,
    body: BodyJson<'a>,
    from: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ref_client: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url_status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url_mo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sent_date: Option<String>,
}

#[derive(Debug, Serialize)]
struct RecipientJson<'a> {
    to: &'a str,
}

#[derive(Debug, Serialize)]
struct BodyJson<'a> {
    text: &'a str,
    encoding: TransportEncoding,
    stop: bool,
}

/// Resolve the `messages` URL for `message` under `endpoint`.
///
/// `endpoint` must not end with `/`.
pub fn messages_url(endpoint: &str, message: &SmsmodeMessage) -> String {
    let mut url = endpoint.to_owned();

    match (
        present(message.channel_id()),
        present(message.campaign_id()),
    ) {
        (Some(channel), Some(campaign)) => {
            url.push_str(&format!("/channels/{channel}/campaigns/{campaign}"));
        }
        (Some(channel), None) => url.push_str(&format!("/channels/{channel}")),
        (None, Some(campaign)) => url.push_str(&format!("/campaigns/{campaign}")),
        (None, None) => {}
    }

    url.push_str("/messages");
    url
}

/// Assemble the JSON body of `POST .../messages`.
///
/// Optional keys are omitted when unset or empty, never sent as `null`. A sender set on the
/// message, even an empty one, replaces `default_sender`.
pub fn encode_send_message_json(
    to: &Recipient,
    message: &SmsmodeMessage,
    default_sender: &SenderId,
) -> Result<serde_json::Value, serde_json::Error> {
    let request = SendMessageJsonRequest {
        recipient: RecipientJson { to: to.as_str() },
        body: BodyJson {
            text: message.content().trim(),
            encoding: message.encoding().into(),
            stop: message.stop(),
        },
        from: message.sender().unwrap_or(default_sender.as_str()),
        ref_client: present(message.reference()),
        callback_url_status: present(message.callback_status_url()),
        callback_url_mo: present(message.callback_inbound_url()),
        sent_date: message
            .scheduled_at()
            .map(|at| at.to_rfc3339_opts(chrono::SecondsFormat::Secs, false)),
    };

    serde_json::to_value(&request)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|it| !it.is_empty())
}
