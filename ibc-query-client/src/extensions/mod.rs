//! Domain extensions and the traits composing them onto a [`QueryClient`].
//!
//! An extension only borrows its client and calls `query_unverified` through
//! it, so any number of extensions can be built on the same client. Each
//! domain exposes its namespace as a method of an extension trait implemented
//! for every client, e.g. [`IbcQueryExt::ibc`](ibc::IbcQueryExt::ibc). Two
//! extension traits in scope exporting the same namespace make the call
//! ambiguous, and the compiler rejects it instead of picking one.

pub mod ibc;

use crate::client::QueryClient;

/// A typed query API built on top of a borrowed [`QueryClient`].
pub trait Extension<'a, C: ?Sized>: Sized {
    /// The top-level namespace of the extension, e.g. `ibc`.
    const NAMESPACE: &'static str;

    fn setup(client: &'a C) -> Self;
}

/// Builds any [`Extension`] from a client.
pub trait QueryClientExt: QueryClient {
    fn extension<'a, E>(&'a self) -> E
    where
        E: Extension<'a, Self>,
    {
        E::setup(self)
    }
}

impl<C: QueryClient + ?Sized> QueryClientExt for C {}
