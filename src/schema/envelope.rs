use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// The `status: "success"` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessStatus {
    #[serde(rename = "success")]
    Success,
}

/// The `status: "error"` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorStatus {
    #[serde(rename = "error")]
    Error,
}

/// `{ "status": "success", "data": T }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Success<T> {
    pub status: SuccessStatus,
    pub data: T,
}

/// `{ "status": "success" }` returned by acknowledgement-only operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledged {
    pub status: SuccessStatus,
}

/// A success envelope and the value a caller gets out of it.
pub trait SuccessSchema: DeserializeOwned {
    type Output;

    fn into_output(self) -> Self::Output;
}

impl<T: DeserializeOwned> SuccessSchema for Success<T> {
    type Output = T;

    fn into_output(self) -> T {
        self.data
    }
}

impl SuccessSchema for Acknowledged {
    type Output = ();

    fn into_output(self) {}
}

/// Error body returned with a non-2xx status.
///
/// The server sends one of two disjoint shapes; which one depends on where
/// the failure happened on its side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEnvelope {
    Structured {
        status: ErrorStatus,
        code: Number,
        message: String,
    },
    Unstructured {
        status: ErrorStatus,
        data: String,
    },
}

impl ErrorEnvelope {
    pub fn structured(code: impl Into<Number>, message: String) -> Self {
        ErrorEnvelope::Structured {
            status: ErrorStatus::Error,
            code: code.into(),
            message,
        }
    }

    pub fn unstructured(data: String) -> Self {
        ErrorEnvelope::Unstructured {
            status: ErrorStatus::Error,
            data,
        }
    }

    /// `"<code>: <message>"` for structured errors, the raw string otherwise.
    pub fn message(&self) -> String {
        match self {
            ErrorEnvelope::Structured { code, message, .. } => format!("{}: {}", code, message),
            ErrorEnvelope::Unstructured { data, .. } => data.clone(),
        }
    }

    pub fn code(&self) -> Option<&Number> {
        match self {
            ErrorEnvelope::Structured { code, .. } => Some(code),
            ErrorEnvelope::Unstructured { .. } => None,
        }
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
