use crate::id::InputId;
use policy::PolicyError;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// A programmatic value lies outside the configured bounds.
    OutOfRange {
        value: String,
        minimum: String,
        maximum: String,
    },
    /// A programmatic value is not a number at all.
    NotNumeric { value: String },
    UnsupportedHost {
        tag: String,
        input_type: Option<String>,
    },
    Policy(PolicyError),
    UnknownField(InputId),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::OutOfRange {
                value,
                minimum,
                maximum,
            } => write!(
                f,
                "value {value} is out of range: it must lie between {minimum} and {maximum}"
            ),
            SessionError::NotNumeric { value } => write!(f, "{value:?} is not a number"),
            SessionError::UnsupportedHost { tag, input_type } => match input_type {
                Some(ty) => write!(f, "cannot bind a numeric field to <{tag} type={ty:?}>"),
                None => write!(f, "cannot bind a numeric field to <{tag}>"),
            },
            SessionError::Policy(err) => write!(f, "invalid policy: {err}"),
            SessionError::UnknownField(id) => write!(f, "no field registered as {id}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Policy(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PolicyError> for SessionError {
    fn from(err: PolicyError) -> Self {
        SessionError::Policy(err)
    }
}
