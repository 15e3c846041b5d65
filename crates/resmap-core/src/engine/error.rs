use thiserror::Error;

/// Failure of a single call to the analysis service.
///
/// The `Display` output is the one human-readable message the store keeps in a
/// resource's error slot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with an error status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request was sent but nothing came back (timeout, refused connection).
    #[error("{message}")]
    NoResponse { message: String },

    /// The request could not be constructed or sent.
    #[error("{message}")]
    Request { message: String },
}

impl TransportError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn no_response(message: impl Into<String>) -> Self {
        Self::NoResponse {
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// HTTP status of a server-side failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        assert_eq!(
            TransportError::server(404, "System not found").to_string(),
            "System not found"
        );
        assert_eq!(TransportError::request("bad url").to_string(), "bad url");
    }

    #[test]
    fn only_server_errors_carry_status() {
        assert_eq!(TransportError::server(500, "boom").status(), Some(500));
        assert_eq!(TransportError::no_response("timeout").status(), None);
    }
}
