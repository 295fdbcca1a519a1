pub use ibc_proto::ibc::core::channel::v1::{
    Channel, Counterparty, IdentifiedChannel, Order, PacketState, State,
};

use super::{RawHeight, RawPageRequest, RawPageResponse};
use crate::rpc::define_query_service;

/// QueryChannelRequest is the request type for the Query/Channel RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryChannelRequest {
    /// port unique identifier
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// channel unique identifier
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
}

/// QueryChannelResponse is the response type for the Query/Channel RPC method.
/// Besides the Channel end, it includes a proof and the height from which the
/// proof was retrieved.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryChannelResponse {
    /// channel associated with the request identifiers
    #[prost(message, optional, tag = "1")]
    pub channel: ::core::option::Option<Channel>,
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

/// QueryChannelsRequest is the request type for the Query/Channels RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryChannelsRequest {
    /// pagination request
    #[prost(message, optional, tag = "1")]
    pub pagination: ::core::option::Option<RawPageRequest>,
}

/// QueryChannelsResponse is the response type for the Query/Channels RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryChannelsResponse {
    /// list of stored channels of the chain.
    #[prost(message, repeated, tag = "1")]
    pub channels: ::prost::alloc::vec::Vec<IdentifiedChannel>,
    /// pagination response
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<RawPageResponse>,
    /// query block height
    #[prost(message, optional, tag = "3")]
    pub height: ::core::option::Option<RawHeight>,
}

/// QueryConnectionChannelsRequest is the request type for the
/// Query/QueryConnectionChannels RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryConnectionChannelsRequest {
    /// connection unique identifier
    #[prost(string, tag = "1")]
    pub connection: ::prost::alloc::string::String,
    /// pagination request
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<RawPageRequest>,
}

/// QueryConnectionChannelsResponse is the Response type for the
/// Query/QueryConnectionChannels RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryConnectionChannelsResponse {
    /// list of channels associated with a connection.
    #[prost(message, repeated, tag = "1")]
    pub channels: ::prost::alloc::vec::Vec<IdentifiedChannel>,
    /// pagination response
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<RawPageResponse>,
    /// query block height
    #[prost(message, optional, tag = "3")]
    pub height: ::core::option::Option<RawHeight>,
}

/// QueryPacketCommitmentRequest is the request type for the
/// Query/PacketCommitment RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryPacketCommitmentRequest {
    /// port unique identifier
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// channel unique identifier
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    /// packet sequence
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

/// QueryPacketCommitmentResponse defines the client query response for a packet
/// which also includes a proof, its path and the height form which the proof was
/// retrieved
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryPacketCommitmentResponse {
    /// packet associated with the request fields
    #[prost(bytes = "vec", tag = "1")]
    pub commitment: ::prost::alloc::vec::Vec<u8>,
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

/// QueryPacketCommitmentsRequest is the request type for the
/// Query/QueryPacketCommitments RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryPacketCommitmentsRequest {
    /// port unique identifier
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// channel unique identifier
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    /// pagination request
    #[prost(message, optional, tag = "3")]
    pub pagination: ::core::option::Option<RawPageRequest>,
}

/// QueryPacketCommitmentsResponse is the request type for the
/// Query/QueryPacketCommitments RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryPacketCommitmentsResponse {
    #[prost(message, repeated, tag = "1")]
    pub commitments: ::prost::alloc::vec::Vec<PacketState>,
    /// pagination response
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<RawPageResponse>,
    /// query block height
    #[prost(message, optional, tag = "3")]
    pub height: ::core::option::Option<RawHeight>,
}

/// QueryPacketAcknowledgementRequest is the request type for the
/// Query/PacketAcknowledgement RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryPacketAcknowledgementRequest {
    /// port unique identifier
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// channel unique identifier
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    /// packet sequence
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

/// QueryPacketAcknowledgementResponse defines the client query response for a
/// packet which also includes a proof, its path and the height form which the
/// proof was retrieved
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryPacketAcknowledgementResponse {
    /// packet associated with the request fields
    #[prost(bytes = "vec", tag = "1")]
    pub acknowledgement: ::prost::alloc::vec::Vec<u8>,
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

/// QueryUnrelayedPacketsRequest is the request type for the
/// Query/UnrelayedPackets RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryUnrelayedPacketsRequest {
    /// port unique identifier
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// channel unique identifier
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    /// list of packet sequences
    #[prost(uint64, repeated, tag = "3")]
    pub packet_commitment_sequences: ::prost::alloc::vec::Vec<u64>,
    /// flag indicating if the return value is packet commitments or
    /// acknowledgements
    #[prost(bool, tag = "4")]
    pub acknowledgements: bool,
}

/// QueryUnrelayedPacketsResponse is the request type for the
/// Query/UnrelayedPacketCommitments RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryUnrelayedPacketsResponse {
    /// list of unrelayed packet sequences
    #[prost(uint64, repeated, tag = "1")]
    pub sequences: ::prost::alloc::vec::Vec<u64>,
    /// query block height
    #[prost(message, optional, tag = "2")]
    pub height: ::core::option::Option<RawHeight>,
}

/// QueryNextSequenceReceiveRequest is the request type for the
/// Query/QueryNextSequenceReceiveRequest RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryNextSequenceReceiveRequest {
    /// port unique identifier
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// channel unique identifier
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
}

/// QuerySequenceResponse is the request type for the
/// Query/QueryNextSequenceReceiveResponse RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryNextSequenceReceiveResponse {
    /// next sequence receive number
    #[prost(uint64, tag = "1")]
    pub next_sequence_receive: u64,
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

define_query_service! {
    /// Query provides defines the gRPC querier service of the channel module.
    pub struct ChannelQuery = "ibc.channel.Query";

    /// Method descriptors of [`ChannelQuery`].
    pub mod methods {
        /// Queries an IBC Channel.
        Channel(QueryChannelRequest) -> QueryChannelResponse;
        /// Queries all the IBC channels of a chain.
        Channels(QueryChannelsRequest) -> QueryChannelsResponse;
        /// Queries all the channels associated with a connection end.
        ConnectionChannels(QueryConnectionChannelsRequest) -> QueryConnectionChannelsResponse;
        /// Queries a stored packet commitment hash.
        PacketCommitment(QueryPacketCommitmentRequest) -> QueryPacketCommitmentResponse;
        /// Returns all the packet commitments hashes associated with a channel.
        PacketCommitments(QueryPacketCommitmentsRequest) -> QueryPacketCommitmentsResponse;
        /// Queries a stored packet acknowledgement hash.
        PacketAcknowledgement(QueryPacketAcknowledgementRequest) -> QueryPacketAcknowledgementResponse;
        /// Returns all the unrelayed IBC packets associated with a channel and
        /// sequences.
        UnrelayedPackets(QueryUnrelayedPacketsRequest) -> QueryUnrelayedPacketsResponse;
        /// Returns the next receive sequence for a given channel.
        NextSequenceReceive(QueryNextSequenceReceiveRequest) -> QueryNextSequenceReceiveResponse;
    }
}
