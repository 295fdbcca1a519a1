//! Protobuf messages and service descriptors of the IBC query services.
//!
//! Top-level request and response messages belong to the `ibc.channel` and
//! `ibc.connection` packages, which is where the node routes
//! `/ibc.channel.Query/*` and `/ibc.connection.Query/*`. Nested messages share
//! their field layout with the `ibc.core.*.v1` definitions and are reused from
//! `ibc-proto`.

pub mod channel;
pub mod connection;

pub use ibc_proto::cosmos::base::query::v1beta1::{
    PageRequest as RawPageRequest, PageResponse as RawPageResponse,
};
pub use ibc_proto::ibc::core::client::v1::Height as RawHeight;
