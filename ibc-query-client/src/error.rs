use std::error::Error as StdError;

use displaydoc::Display;
use prost::DecodeError;

use crate::sequence::SequenceError;

/// A transport failure, kept exactly as the base client produced it.
pub type TransportError = Box<dyn StdError + Send + Sync + 'static>;

/// The main error type of the ibc-query-client crate. Every failure raised
/// while serving an extension call surfaces through this type, and no layer
/// replaces a lower-level error with a generic one.
///
/// The variants keep transport and decode failures apart: a caller can tell a
/// node that could not be reached (or rejected the query) from a response that
/// did not parse, without inspecting the message.
#[derive(Debug, Display)]
pub enum QueryError {
    /// {0}
    Transport(TransportError),
    /// invalid argument `{field}`: {reason}
    InvalidArgument { field: String, reason: SequenceError },
    /// {reason}
    Decode { path: String, reason: DecodeError },
}

impl QueryError {
    pub fn transport<E>(e: E) -> Self
    where
        E: Into<TransportError>,
    {
        Self::Transport(e.into())
    }

    pub fn invalid_argument<T: ToString>(field: T, reason: SequenceError) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason,
        }
    }

    pub fn decode<T: ToString>(path: T, reason: DecodeError) -> Self {
        Self::Decode {
            path: path.to_string(),
            reason,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the error raised by the base client, if this is a transport failure.
    pub fn transport_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Returns the transport error as the concrete type the base client raised.
    pub fn downcast_transport<E: StdError + 'static>(&self) -> Option<&E> {
        self.transport_error().and_then(|e| e.downcast_ref::<E>())
    }

    /// Returns the wire path whose response failed to decode.
    pub fn decode_path(&self) -> Option<&str> {
        match self {
            Self::Decode { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Takes the transport error out, handing the original error back otherwise.
    pub fn into_transport_error(self) -> Result<TransportError, Self> {
        match self {
            Self::Transport(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl StdError for QueryError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            // Transport and decode errors are displayed verbatim, so their own cause is the next link.
            Self::Transport(e) => e.source(),
            Self::InvalidArgument { reason, .. } => Some(reason),
            Self::Decode { reason, .. } => reason.source(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use ibc_proto::ibc::core::client::v1::Height as RawHeight;
    use prost::Message;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct NotFound;

    impl fmt::Display for NotFound {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection not found")
        }
    }

    impl StdError for NotFound {}

    #[test]
    fn transport_error_is_displayed_verbatim() {
        let err = QueryError::transport(NotFound);

        assert!(err.is_transport());
        assert_eq!(err.to_string(), "connection not found");
        assert_eq!(err.downcast_transport::<NotFound>(), Some(&NotFound));
    }

    #[test]
    fn decode_error_is_displayed_verbatim() {
        // a truncated varint
        let reason = RawHeight::decode(&[0x08u8][..]).expect_err("truncated input");
        let message = reason.to_string();
        let err = QueryError::decode("/ibc.channel.Query/Channel", reason);

        assert!(err.is_decode());
        assert!(err.downcast_transport::<NotFound>().is_none());
        assert_eq!(err.to_string(), message);
        assert_eq!(err.decode_path(), Some("/ibc.channel.Query/Channel"));
    }

    #[test]
    fn into_transport_error_returns_other_variants_untouched() {
        let err = QueryError::invalid_argument(
            "sequence",
            SequenceError::Negative {
                value: "-1".to_string(),
            },
        );

        let err = err
            .into_transport_error()
            .expect_err("not a transport error");
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("sequence"));
    }
}
