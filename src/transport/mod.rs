//! Transport layer: smsmode URL layout and JSON wire format.

mod send_message;

pub use send_message::{encode_send_message_json, messages_url};
