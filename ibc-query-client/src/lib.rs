//! Contains a typed query façade for an IBC enabled chain. The crate is
//! organised in layers, from the wire upwards:
//!
//! - [`QueryClient`](crate::client::QueryClient): the only transport contract,
//!   a single `query_unverified(path, data)` round trip returning raw bytes.
//! - [`RpcService`](crate::rpc::RpcService): a generic adapter that, given a
//!   protobuf query service descriptor, encodes a request, routes it to
//!   `/{service}/{method}` and decodes the typed response.
//! - Domain extensions such as [`IbcExtension`](crate::extensions::ibc::IbcExtension),
//!   which wrap one adapter per sub-service and expose named operations taking
//!   plain arguments and returning plain response types.
//!
//! Extensions are attached to any client through extension traits, so several
//! domains compose on the same transport handle without sharing any state.
//!
//! Example
//! ```rust,ignore
//! use ibc_query_client::extensions::ibc::IbcQueryExt;
//! use ibc_query_client::transport::TendermintQueryClient;
//!
//! let client = TendermintQueryClient::new("http://127.0.0.1:26657")?;
//!
//! let response = client
//!     .ibc()
//!     .unverified()
//!     .channel("transfer", "channel-0")
//!     .await?;
//!
//! let pending = client
//!     .ibc()
//!     .unverified()
//!     .unrelayed_packets("transfer", "channel-0", [1u64, 2, 3], false)
//!     .await?;
//! ```
//!

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod extensions;
pub mod proto;
pub mod rpc;
pub mod sequence;
pub mod types;
pub mod utils;

#[cfg(feature = "rpc-client")]
pub mod transport;

pub use client::{QueryClient, QueryMode, Unverified};
pub use error::QueryError;
pub use sequence::{IntoSequence, Sequence};
