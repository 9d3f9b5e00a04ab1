use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidEndpoint { input: String },
    InvalidHeaderValue { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint URL: {input}"),
            Self::InvalidHeaderValue { field } => {
                write!(f, "{field} is not a valid HTTP header value")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
