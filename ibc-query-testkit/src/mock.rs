//! An in-memory [`QueryClient`] answering queries from canned replies.

use std::collections::HashMap;

use async_trait::async_trait;
use displaydoc::Display;
use ibc_query_client::QueryClient;
use parking_lot::Mutex;
use prost::Message;
use tracing::debug;

/// Errors returned by [`MockQueryClient`].
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum MockTransportError {
    /// {0}
    Node(String),
    /// no reply registered for `{path}`
    UnknownPath { path: String },
}

impl std::error::Error for MockTransportError {}

/// A query as received by the mock client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedQuery {
    pub path: String,
    pub data: Vec<u8>,
}

impl RecordedQuery {
    /// Decodes the recorded request bytes as `T`.
    pub fn decode<T: Message + Default>(&self) -> Result<T, prost::DecodeError> {
        T::decode(self.data.as_slice())
    }
}

#[derive(Clone, Debug)]
enum Reply {
    Bytes(Vec<u8>),
    Failure(String),
}

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<String, Reply>,
    calls: Vec<RecordedQuery>,
}

/// Answers each query with the reply registered for its path, and records
/// every query it receives, answered or not.
///
/// Paths without a registered reply fail with
/// [`MockTransportError::UnknownPath`], the way a node rejects a route it does
/// not serve.
#[derive(Debug, Default)]
pub struct MockQueryClient {
    state: Mutex<MockState>,
}

impl MockQueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers queries on `path` with the raw `bytes`.
    pub fn respond_with(&self, path: impl Into<String>, bytes: Vec<u8>) -> &Self {
        self.state
            .lock()
            .replies
            .insert(path.into(), Reply::Bytes(bytes));
        self
    }

    /// Answers queries on `path` with the encoding of `message`.
    pub fn respond_with_message<T: Message>(&self, path: impl Into<String>, message: &T) -> &Self {
        self.respond_with(path, message.encode_to_vec())
    }

    /// Fails queries on `path` with a node error carrying `message`.
    pub fn fail_with(&self, path: impl Into<String>, message: impl Into<String>) -> &Self {
        self.state
            .lock()
            .replies
            .insert(path.into(), Reply::Failure(message.into()));
        self
    }

    /// Every query received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.path == path)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// The last query received on `path`.
    pub fn last_call(&self, path: &str) -> Option<RecordedQuery> {
        self.state
            .lock()
            .calls
            .iter()
            .rev()
            .find(|call| call.path == path)
            .cloned()
    }
}

#[async_trait]
impl QueryClient for MockQueryClient {
    type Error = MockTransportError;

    async fn query_unverified(&self, path: &str, data: Vec<u8>) -> Result<Vec<u8>, Self::Error> {
        let mut state = self.state.lock();

        debug!("mock query {} with {} bytes", path, data.len());

        state.calls.push(RecordedQuery {
            path: path.to_owned(),
            data,
        });

        match state.replies.get(path) {
            Some(Reply::Bytes(bytes)) => Ok(bytes.clone()),
            Some(Reply::Failure(message)) => Err(MockTransportError::Node(message.clone())),
            None => Err(MockTransportError::UnknownPath {
                path: path.to_owned(),
            }),
        }
    }
}
