//! A [`QueryClient`] sending queries to a node over its Tendermint RPC endpoint.

use async_trait::async_trait;
use displaydoc::Display;
use tendermint::block::Height;
use tendermint_rpc::{Client, HttpClient};
use tracing::trace;

use crate::client::QueryClient;

/// Errors of the Tendermint RPC transport.
#[derive(Debug, Display)]
pub enum TendermintQueryError {
    /// RPC request failed: `{0}`
    Rpc(tendermint_rpc::Error),
    /// query failed with code `{code}` in codespace `{codespace}`: {log}
    AbciQuery {
        code: u32,
        codespace: String,
        log: String,
    },
}

impl std::error::Error for TendermintQueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rpc(e) => Some(e),
            Self::AbciQuery { .. } => None,
        }
    }
}

impl From<tendermint_rpc::Error> for TendermintQueryError {
    fn from(e: tendermint_rpc::Error) -> Self {
        Self::Rpc(e)
    }
}

/// Sends every query as an `abci_query` without requesting a proof.
///
/// Queries run against the latest height unless a height is pinned with
/// [`with_height`](Self::with_height).
#[derive(Clone, Debug)]
pub struct TendermintQueryClient {
    client: HttpClient,
    height: Option<Height>,
}

impl TendermintQueryClient {
    /// Connects to the RPC endpoint at `url`, e.g. `http://127.0.0.1:26657`.
    pub fn new(url: &str) -> Result<Self, TendermintQueryError> {
        let client = HttpClient::new(url)?;

        Ok(Self::from_client(client))
    }

    pub fn from_client(client: HttpClient) -> Self {
        Self {
            client,
            height: None,
        }
    }

    /// Pins all subsequent queries to the state at `height`.
    pub fn with_height(mut self, height: Height) -> Self {
        self.height = Some(height);
        self
    }

    pub fn height(&self) -> Option<Height> {
        self.height
    }
}

#[async_trait]
impl QueryClient for TendermintQueryClient {
    type Error = TendermintQueryError;

    async fn query_unverified(&self, path: &str, data: Vec<u8>) -> Result<Vec<u8>, Self::Error> {
        let response = self
            .client
            .abci_query(Some(path.to_owned()), data, self.height, false)
            .await?;

        if !response.code.is_ok() {
            return Err(TendermintQueryError::AbciQuery {
                code: response.code.value(),
                codespace: response.codespace,
                log: response.log,
            });
        }

        trace!(
            "abci query {} answered at height {}",
            path,
            response.height
        );

        Ok(response.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_urls() {
        assert!(matches!(
            TendermintQueryClient::new("not a url"),
            Err(TendermintQueryError::Rpc(_))
        ));
    }

    #[test]
    fn pins_the_query_height() {
        let client = TendermintQueryClient::new("http://127.0.0.1:26657")
            .expect("valid url")
            .with_height(Height::from(42u32));

        assert_eq!(client.height(), Some(Height::from(42u32)));
    }

    #[test]
    fn abci_failures_keep_the_node_log() {
        let err = TendermintQueryError::AbciQuery {
            code: 22,
            codespace: "ibc".to_string(),
            log: "channel not found".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "query failed with code `22` in codespace `ibc`: channel not found"
        );
    }
}
