use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// smsmode API key, sent in the `X-Api-Key` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// HTTP header carrying the key.
    pub const HEADER: &'static str = "X-Api-Key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Default sender id (`from`) used when a message does not override it.
///
/// Invariant: non-empty after trimming. The value must be allowed on your smsmode account.
pub struct SenderId(String);

impl SenderId {
    /// JSON field name used by smsmode (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination address as sent to smsmode (`recipient.to`).
///
/// Invariant: non-empty, stored trimmed. [`Recipient::new`] keeps the address as given;
/// [`Recipient::phone`] normalizes a phone number to E.164 first.
pub struct Recipient(String);

impl Recipient {
    /// JSON field name used by smsmode (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse a phone number and keep its E.164 form (`+33612345678`).
    ///
    /// `default_region` applies to national numbers such as `06 12 34 56 78`; input with an
    /// explicit `+` prefix ignores it.
    pub fn phone(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, trimmed).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            }
        })?;
        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }

        Ok(Self(
            phonenumber::format(&parsed)
                .mode(phonenumber::Mode::E164)
                .to_string(),
        ))
    }

    /// Address as sent to smsmode.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let sender = SenderId::new(" 4444444444 ").unwrap();
        assert_eq!(sender.as_str(), "4444444444");
        assert!(matches!(
            SenderId::new(""),
            Err(ValidationError::Empty {
                field: SenderId::FIELD
            })
        ));

        let to = Recipient::new(" 5555555555 ").unwrap();
        assert_eq!(to.as_str(), "5555555555");
        assert!(Recipient::new("\t").is_err());
    }

    #[test]
    fn phone_recipients_are_normalized_to_e164() {
        let international = Recipient::phone(None, "+33 6 12 34 56 78").unwrap();
        assert_eq!(international.as_str(), "+33612345678");

        let national = Recipient::phone(Some(country::Id::FR), " 06 12 34 56 78 ").unwrap();
        assert_eq!(national, international);
    }

    #[test]
    fn phone_recipients_reject_garbage() {
        assert!(matches!(
            Recipient::phone(None, "   "),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        ));
        assert!(matches!(
            Recipient::phone(None, "not-a-number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            Recipient::phone(Some(country::Id::FR), "12"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }
}
