//! Connection queries of the IBC extension.

mod types;

pub use types::*;

use super::IbcQueries;
use crate::client::{QueryClient, QueryMode};
use crate::error::QueryError;
use crate::proto::connection::{
    methods, QueryClientConnectionsRequest, QueryConnectionRequest, QueryConnectionsRequest,
};
use crate::types::PageRequest;
use crate::utils::IntoPlain;

impl<'a, C, M> IbcQueries<'a, C, M>
where
    C: QueryClient + ?Sized,
    M: QueryMode,
{
    /// Queries the connection end stored under `connection_id`.
    pub async fn connection(&self, connection_id: &str) -> Result<ConnectionResponse, QueryError> {
        let request = QueryConnectionRequest {
            connection_id: connection_id.to_owned(),
        };

        self.connection_service
            .call::<methods::Connection>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries all the connections of the chain, leaving pagination to the node.
    pub async fn connections(&self) -> Result<ConnectionsResponse, QueryError> {
        self.query_connections(None).await
    }

    /// Queries one page of the connections of the chain.
    pub async fn connections_page(
        &self,
        pagination: PageRequest,
    ) -> Result<ConnectionsResponse, QueryError> {
        self.query_connections(Some(pagination)).await
    }

    async fn query_connections(
        &self,
        pagination: Option<PageRequest>,
    ) -> Result<ConnectionsResponse, QueryError> {
        let request = QueryConnectionsRequest {
            pagination: pagination.map(Into::into),
        };

        self.connection_service
            .call::<methods::Connections>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries the paths of the connections opened on top of `client_id`.
    pub async fn client_connections(
        &self,
        client_id: &str,
    ) -> Result<ClientConnectionsResponse, QueryError> {
        let request = QueryClientConnectionsRequest {
            client_id: client_id.to_owned(),
        };

        self.connection_service
            .call::<methods::ClientConnections>(request)
            .await
            .map(IntoPlain::into_plain)
    }
}
