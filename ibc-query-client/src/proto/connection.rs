pub use ibc_proto::ibc::core::commitment::v1::MerklePrefix;
pub use ibc_proto::ibc::core::connection::v1::{
    ConnectionEnd, Counterparty, IdentifiedConnection, State, Version,
};

use super::{RawHeight, RawPageRequest, RawPageResponse};
use crate::rpc::define_query_service;

/// QueryConnectionRequest is the request type for the Query/Connection RPC
/// method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryConnectionRequest {
    /// connection unique identifier
    #[prost(string, tag = "1")]
    pub connection_id: ::prost::alloc::string::String,
}

/// QueryConnectionResponse is the response type for the Query/Connection RPC
/// method. Besides the connection end, it includes a proof and the height from
/// which the proof was retrieved.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryConnectionResponse {
    /// connection associated with the request identifier
    #[prost(message, optional, tag = "1")]
    pub connection: ::core::option::Option<ConnectionEnd>,
    /// merkle proof of existence
    #[prost(bytes = "vec", tag = "2")]
    pub proof: ::prost::alloc::vec::Vec<u8>,
    /// merkle proof path
    #[prost(string, tag = "3")]
    pub proof_path: ::prost::alloc::string::String,
    /// height at which the proof was retrieved
    #[prost(message, optional, tag = "4")]
    pub proof_height: ::core::option::Option<RawHeight>,
}

/// QueryConnectionsRequest is the request type for the Query/Connections RPC
/// method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryConnectionsRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: ::core::option::Option<RawPageRequest>,
}

/// QueryConnectionsResponse is the response type for the Query/Connections RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryConnectionsResponse {
    /// list of stored connections of the chain.
    #[prost(message, repeated, tag = "1")]
    pub connections: ::prost::alloc::vec::Vec<IdentifiedConnection>,
    /// pagination response
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<RawPageResponse>,
    /// query block height
    #[prost(message, optional, tag = "3")]
    pub height: ::core::option::Option<RawHeight>,
}

/// QueryClientConnectionsRequest is the request type for the
/// Query/ClientConnections RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryClientConnectionsRequest {
    /// client identifier associated with a connection
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
}

/// QueryClientConnectionsResponse is the response type for the
/// Query/ClientConnections RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryClientConnectionsResponse {
    /// slice of all the connection paths associated with a client.
    #[prost(string, repeated, tag = "1")]
    pub connection_paths: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// merkle proof of existence
    #[prost(bytes = "vec", tag = "2")]
    pub proof: ::prost::alloc::vec::Vec<u8>,
    /// merkle proof path
    #[prost(string, tag = "3")]
    pub proof_path: ::prost::alloc::string::String,
    /// height at which the proof was generated
    #[prost(message, optional, tag = "4")]
    pub proof_height: ::core::option::Option<RawHeight>,
}

define_query_service! {
    /// Query provides defines the gRPC querier service of the connection module.
    pub struct ConnectionQuery = "ibc.connection.Query";

    /// Method descriptors of [`ConnectionQuery`].
    pub mod methods {
        /// Queries an IBC connection end.
        Connection(QueryConnectionRequest) -> QueryConnectionResponse;
        /// Queries all the IBC connections of a chain.
        Connections(QueryConnectionsRequest) -> QueryConnectionsResponse;
        /// Queries the connection paths associated with a client state.
        ClientConnections(QueryClientConnectionsRequest) -> QueryClientConnectionsResponse;
    }
}
