//! The IBC extension: named channel and connection queries over the
//! `ibc.channel.Query` and `ibc.connection.Query` services.
//!
//! Operations take plain arguments (string identifiers, numeric sequences,
//! flags), build the request message, perform one round trip through the
//! adapter of their sub-service, and return a plain response. Identifiers are
//! not validated locally; an unknown identifier is reported by the node and
//! surfaces as a transport error.

pub mod channel;
pub mod connection;

use core::fmt;

use crate::client::{QueryClient, QueryMode, Unverified};
use crate::extensions::Extension;
use crate::proto::channel::ChannelQuery;
use crate::proto::connection::ConnectionQuery;
use crate::rpc::RpcService;

/// Entry point of the IBC namespace.
///
/// Queries are grouped by mode: [`unverified`](Self::unverified) results are
/// trusted as returned by the node and are not checked against consensus
/// proofs.
pub struct IbcExtension<'a, C: ?Sized> {
    client: &'a C,
}

impl<'a, C> IbcExtension<'a, C>
where
    C: QueryClient + ?Sized,
{
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Queries whose results are not verified against consensus proofs.
    pub fn unverified(&self) -> IbcQueries<'a, C, Unverified> {
        self.with_mode(Unverified)
    }

    /// Queries dispatched in the given mode.
    pub fn with_mode<M: QueryMode>(&self, mode: M) -> IbcQueries<'a, C, M> {
        IbcQueries::new(self.client, mode)
    }
}

impl<'a, C> Extension<'a, C> for IbcExtension<'a, C>
where
    C: QueryClient + ?Sized,
{
    const NAMESPACE: &'static str = "ibc";

    fn setup(client: &'a C) -> Self {
        Self::new(client)
    }
}

impl<C: ?Sized> fmt::Debug for IbcExtension<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbcExtension").finish_non_exhaustive()
    }
}

/// The IBC operations in one query mode, backed by one adapter per sub-service.
///
/// Channel operations live in [`channel`], connection operations in
/// [`connection`].
pub struct IbcQueries<'a, C: ?Sized, M = Unverified> {
    channel_service: RpcService<'a, C, ChannelQuery, M>,
    connection_service: RpcService<'a, C, ConnectionQuery, M>,
}

impl<'a, C, M> IbcQueries<'a, C, M>
where
    C: QueryClient + ?Sized,
    M: QueryMode,
{
    pub fn new(client: &'a C, mode: M) -> Self {
        Self {
            channel_service: RpcService::new(client, mode),
            connection_service: RpcService::new(client, mode),
        }
    }
}

impl<C: ?Sized, M: QueryMode> fmt::Debug for IbcQueries<'_, C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbcQueries")
            .field("channel_service", &self.channel_service)
            .field("connection_service", &self.connection_service)
            .finish()
    }
}

/// Attaches the `ibc` namespace to every [`QueryClient`].
pub trait IbcQueryExt: QueryClient {
    fn ibc(&self) -> IbcExtension<'_, Self> {
        IbcExtension::new(self)
    }
}

impl<C: QueryClient + ?Sized> IbcQueryExt for C {}

/// Builds the IBC extension on top of `client`.
pub fn setup_ibc_extension<C>(client: &C) -> IbcExtension<'_, C>
where
    C: QueryClient + ?Sized,
{
    IbcExtension::new(client)
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use async_trait::async_trait;

    use super::*;
    use crate::extensions::QueryClientExt;

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "offline")
        }
    }

    impl std::error::Error for Offline {}

    struct OfflineClient;

    #[async_trait]
    impl QueryClient for OfflineClient {
        type Error = Offline;

        async fn query_unverified(&self, _: &str, _: Vec<u8>) -> Result<Vec<u8>, Self::Error> {
            Err(Offline)
        }
    }

    #[test]
    fn queries_name_their_services_and_mode() {
        let client = OfflineClient;
        let queries = client.ibc().unverified();
        let debug = format!("{queries:?}");

        assert!(debug.contains("ibc.channel.Query"));
        assert!(debug.contains("ibc.connection.Query"));
        assert!(debug.contains("unverified"));
    }

    #[test]
    fn extension_is_reachable_by_namespace() {
        let client = OfflineClient;
        let _: IbcExtension<'_, OfflineClient> = client.extension();

        assert_eq!(IbcExtension::<OfflineClient>::NAMESPACE, "ibc");
    }

    #[test_log::test(tokio::test)]
    async fn transport_errors_reach_the_caller() {
        let client = OfflineClient;
        let err = setup_ibc_extension(&client)
            .unverified()
            .next_sequence_receive("transfer", "channel-0")
            .await
            .expect_err("client is offline");

        assert_eq!(err.to_string(), "offline");
        assert!(err.downcast_transport::<Offline>().is_some());
    }
}
