//! The classified transport result envelope.
//!
//! Every outbound call made through the transport client resolves to exactly
//! one `ApiResult` variant. Network faults, unparseable bodies and
//! application-level failures all land in `Failure`; nothing escapes the
//! transport boundary as a panic or an unclassified error.
//!
//! The serialized form matches the envelope the rest of the product speaks:
//! `{ "success": true, "data": ..., "message"? }` or
//! `{ "success": false, "error": "..." }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome of one transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T> {
    /// The call succeeded; `data` is the decoded payload.
    Success {
        data: T,
        /// Optional human-readable message from the backend.
        message: Option<String>,
    },
    /// The call failed; `error` is a classified, displayable message.
    Failure { error: String },
}

impl<T> ApiResult<T> {
    /// A success result without a message.
    pub fn ok(data: T) -> Self {
        Self::Success {
            data,
            message: None,
        }
    }

    /// A success result with a backend message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: Some(message.into()),
        }
    }

    /// A failure result.
    pub fn fail(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// Whether this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Whether this is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The payload, if successful.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the result, returning the payload if successful.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// The error message, if failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Maps the payload of a success, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success { data, message } => ApiResult::Success {
                data: f(data),
                message,
            },
            Self::Failure { error } => ApiResult::Failure { error },
        }
    }
}

/// On-the-wire shape of the envelope. Kept private; `ApiResult` is the API.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let envelope = match self {
            Self::Success { data, message } => EnvelopeRef {
                success: true,
                data: Some(data),
                message: message.as_deref(),
                error: None,
            },
            Self::Failure { error } => EnvelopeRef {
                success: false,
                data: None,
                message: None,
                error: Some(error),
            },
        };
        envelope.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::<T>::deserialize(deserializer)?;
        if envelope.success {
            let data = envelope
                .data
                .ok_or_else(|| serde::de::Error::missing_field("data"))?;
            Ok(Self::Success {
                data,
                message: envelope.message,
            })
        } else {
            Ok(Self::Failure {
                error: envelope
                    .error
                    .or(envelope.message)
                    .unwrap_or_else(|| "request failed".to_string()),
            })
        }
    }
}
