//! Error types for EC2 operations.
//!
//! `ServiceError` is what EC2 itself reports (an `<Errors>` document with a
//! code and a message). `Ec2Error` wraps it together with the failures this
//! crate can produce on its own side: malformed XML, values that do not
//! parse into the expected wire type, transport and configuration problems.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An error returned by the EC2 API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    /// The EC2 error code (e.g. "InvalidInstanceID.NotFound").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Request ID assigned by EC2.
    pub request_id: Option<String>,
    /// The API action that failed.
    pub action: Option<String>,
    /// Whether retrying the same request may succeed.
    pub retryable: bool,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EC2 error [{}]: {} (HTTP {})",
            self.code, self.message, self.status_code
        )?;
        if let Some(ref action) = self.action {
            write!(f, " during {}", action)?;
        }
        if let Some(ref req_id) = self.request_id {
            write!(f, " [RequestId: {}]", req_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    pub fn new(code: &str, message: &str, status_code: u16) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            status_code,
            request_id: None,
            action: None,
            retryable: Self::is_retryable_code(code, status_code),
        }
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    /// Throttling codes and transient HTTP statuses are retryable.
    fn is_retryable_code(code: &str, status_code: u16) -> bool {
        if matches!(status_code, 429 | 500 | 502 | 503 | 504) {
            return true;
        }
        matches!(
            code,
            "Throttling"
                | "ThrottlingException"
                | "RequestLimitExceeded"
                | "BandwidthLimitExceeded"
                | "EC2ThrottledException"
                | "InternalError"
                | "InternalFailure"
                | "ServiceUnavailable"
                | "Unavailable"
                | "RequestTimeout"
                | "InsufficientInstanceCapacity"
        )
    }

    /// Parse an EC2 error body.
    ///
    /// EC2 answers with
    /// ```xml
    /// <Response>
    ///   <Errors>
    ///     <Error><Code>InvalidInstanceID.Malformed</Code><Message>...</Message></Error>
    ///   </Errors>
    ///   <RequestID>ea966190-f9aa-478e-9ede-example</RequestID>
    /// </Response>
    /// ```
    /// The generic `<ErrorResponse><Error>..</Error><RequestId/>` form used by
    /// other query services is accepted too. Bodies that are not XML at all
    /// become an `UnknownError` carrying a prefix of the body.
    pub fn parse_xml_error(status_code: u16, body: &str) -> Self {
        let root = match crate::protocol::xml::XmlNode::parse(body) {
            Ok(root) => root,
            Err(_) => {
                let snippet: String = body.chars().take(200).collect();
                return Self::new(
                    "UnknownError",
                    &format!("HTTP {}: {}", status_code, snippet),
                    status_code,
                );
            }
        };

        let error = root
            .child("Errors")
            .and_then(|errors| errors.child("Error"))
            .or_else(|| root.child("Error"))
            .unwrap_or(&root);

        let code = error
            .child_text("Code")
            .map(str::trim)
            .unwrap_or("UnknownError")
            .to_string();
        let message = error
            .child_text("Message")
            .map(|m| m.trim().to_string())
            .unwrap_or_else(|| format!("HTTP {} from ec2", status_code));

        let mut err = Self::new(&code, &message, status_code);
        err.request_id = root
            .child_text("RequestID")
            .or_else(|| root.child_text("RequestId"))
            .or_else(|| root.child_text("requestId"))
            .map(|id| id.trim().to_string());
        err
    }
}

/// Top-level error type for this crate.
#[derive(Debug, Error)]
pub enum Ec2Error {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("cannot unmarshall `{path}`: {message}")]
    Unmarshall { path: String, message: String },

    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Ec2Error {
    pub(crate) fn unmarshall(path: &str, message: impl fmt::Display) -> Self {
        Self::Unmarshall {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// The EC2 error code, if this is a service error.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service(err) => Some(&err.code),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Service(err) => err.retryable,
            Self::Transport(_) => true,
            _ => false,
        }
    }
}

impl From<quick_xml::Error> for Ec2Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

// The XML writer targets an in-memory buffer; its io errors surface here.
impl From<std::io::Error> for Ec2Error {
    fn from(err: std::io::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

pub type Ec2Result<T> = Result<T, Ec2Error>;
