//! Defines the transport contract every query extension is built on, and the
//! query modes dispatching through it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::QueryError;

/// The minimal transport primitive: a named, opaque binary query against a
/// remote node.
///
/// Implementors perform exactly one round trip per call and own whatever
/// connection state they need. Retries, timeouts and pipelining of concurrent
/// calls are transport properties; nothing above this trait adds any.
#[async_trait]
pub trait QueryClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends `data` to the query handler routed at `path` and returns the raw
    /// response bytes, trusted as returned by the node.
    ///
    /// Fails when the node is unreachable, when it does not recognise `path`,
    /// or when it reports an application-level error for the query.
    async fn query_unverified(&self, path: &str, data: Vec<u8>) -> Result<Vec<u8>, Self::Error>;
}

#[async_trait]
impl<C> QueryClient for &C
where
    C: QueryClient + ?Sized,
{
    type Error = C::Error;

    async fn query_unverified(&self, path: &str, data: Vec<u8>) -> Result<Vec<u8>, Self::Error> {
        (**self).query_unverified(path, data).await
    }
}

#[async_trait]
impl<C> QueryClient for Box<C>
where
    C: QueryClient + ?Sized,
{
    type Error = C::Error;

    async fn query_unverified(&self, path: &str, data: Vec<u8>) -> Result<Vec<u8>, Self::Error> {
        (**self).query_unverified(path, data).await
    }
}

#[async_trait]
impl<C> QueryClient for Arc<C>
where
    C: QueryClient + ?Sized,
{
    type Error = C::Error;

    async fn query_unverified(&self, path: &str, data: Vec<u8>) -> Result<Vec<u8>, Self::Error> {
        (**self).query_unverified(path, data).await
    }
}

/// Selects how a query is dispatched through a [`QueryClient`].
///
/// Extensions are generic over the mode, so a proof-checked mode can sit next
/// to [`Unverified`] without changing the operations built on top.
#[async_trait]
pub trait QueryMode: Copy + Send + Sync + 'static {
    /// The namespace the mode is exposed under, e.g. `unverified`.
    const NAME: &'static str;

    async fn query<C>(self, client: &C, path: &str, data: Vec<u8>) -> Result<Vec<u8>, QueryError>
    where
        C: QueryClient + ?Sized;
}

/// Results are trusted as returned by the node; nothing is checked against
/// consensus proofs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Unverified;

#[async_trait]
impl QueryMode for Unverified {
    const NAME: &'static str = "unverified";

    async fn query<C>(self, client: &C, path: &str, data: Vec<u8>) -> Result<Vec<u8>, QueryError>
    where
        C: QueryClient + ?Sized,
    {
        client
            .query_unverified(path, data)
            .await
            .map_err(QueryError::transport)
    }
}
