//! Domain layer: message values, strong types with validation, notification traits (no I/O).

mod message;
mod notification;
mod validation;
mod value;

pub use message::{Encoding, SmsmodeMessage, SmsmodeMessageBuilder};
pub use notification::{Payload, RecipientRoutable, SmsmodeNotification};
pub use validation::ValidationError;
pub use value::{ApiKey, Recipient, SenderId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::HEADER
            })
        ));
    }

    #[test]
    fn recipient_rejects_empty() {
        assert!(matches!(
            Recipient::new(""),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        ));
    }

    #[test]
    fn raw_recipient_keeps_national_format() {
        let raw = Recipient::new("06 12 34 56 78").unwrap();
        let phone =
            Recipient::phone(Some(phonenumber::country::Id::FR), "06 12 34 56 78").unwrap();
        assert_eq!(raw.as_str(), "06 12 34 56 78");
        assert_eq!(phone.as_str(), "+33612345678");
    }

    #[test]
    fn unicode_is_the_only_encoding_override() {
        let gsm = SmsmodeMessage::builder("a").build();
        let unicode = SmsmodeMessage::builder("a").unicode().build();
        assert_eq!(gsm.encoding(), Encoding::Gsm7);
        assert_eq!(unicode.encoding(), Encoding::Unicode);
    }
}
