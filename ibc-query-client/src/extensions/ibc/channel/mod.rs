//! Channel and packet queries of the IBC extension.

mod types;

pub use types::*;

use super::IbcQueries;
use crate::client::{QueryClient, QueryMode};
use crate::error::QueryError;
use crate::proto::channel::{
    methods, QueryChannelRequest, QueryChannelsRequest, QueryConnectionChannelsRequest,
    QueryNextSequenceReceiveRequest, QueryPacketAcknowledgementRequest,
    QueryPacketCommitmentRequest, QueryPacketCommitmentsRequest, QueryUnrelayedPacketsRequest,
};
use crate::sequence::{to_sequence, to_sequences, IntoSequence};
use crate::types::PageRequest;
use crate::utils::IntoPlain;

impl<'a, C, M> IbcQueries<'a, C, M>
where
    C: QueryClient + ?Sized,
    M: QueryMode,
{
    /// Queries the channel end stored under the given port and channel identifiers.
    pub async fn channel(
        &self,
        port_id: &str,
        channel_id: &str,
    ) -> Result<ChannelResponse, QueryError> {
        let request = QueryChannelRequest {
            port_id: port_id.to_owned(),
            channel_id: channel_id.to_owned(),
        };

        self.channel_service
            .call::<methods::Channel>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries all the channels of the chain, leaving pagination to the node.
    pub async fn channels(&self) -> Result<ChannelsResponse, QueryError> {
        self.query_channels(None).await
    }

    /// Queries one page of the channels of the chain.
    pub async fn channels_page(
        &self,
        pagination: PageRequest,
    ) -> Result<ChannelsResponse, QueryError> {
        self.query_channels(Some(pagination)).await
    }

    async fn query_channels(
        &self,
        pagination: Option<PageRequest>,
    ) -> Result<ChannelsResponse, QueryError> {
        let request = QueryChannelsRequest {
            pagination: pagination.map(Into::into),
        };

        self.channel_service
            .call::<methods::Channels>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries the channels built on top of the given connection.
    pub async fn connection_channels(
        &self,
        connection_id: &str,
    ) -> Result<ConnectionChannelsResponse, QueryError> {
        self.query_connection_channels(connection_id, None).await
    }

    /// Queries one page of the channels built on top of the given connection.
    pub async fn connection_channels_page(
        &self,
        connection_id: &str,
        pagination: PageRequest,
    ) -> Result<ConnectionChannelsResponse, QueryError> {
        self.query_connection_channels(connection_id, Some(pagination))
            .await
    }

    async fn query_connection_channels(
        &self,
        connection_id: &str,
        pagination: Option<PageRequest>,
    ) -> Result<ConnectionChannelsResponse, QueryError> {
        let request = QueryConnectionChannelsRequest {
            connection: connection_id.to_owned(),
            pagination: pagination.map(Into::into),
        };

        self.channel_service
            .call::<methods::ConnectionChannels>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries the commitment of the packet sent with `sequence` on the given channel.
    pub async fn packet_commitment<S: IntoSequence>(
        &self,
        port_id: &str,
        channel_id: &str,
        sequence: S,
    ) -> Result<PacketCommitmentResponse, QueryError> {
        let request = QueryPacketCommitmentRequest {
            port_id: port_id.to_owned(),
            channel_id: channel_id.to_owned(),
            sequence: to_sequence("sequence", sequence)?.value(),
        };

        self.channel_service
            .call::<methods::PacketCommitment>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries all the packet commitments stored for the given channel.
    pub async fn packet_commitments(
        &self,
        port_id: &str,
        channel_id: &str,
    ) -> Result<PacketCommitmentsResponse, QueryError> {
        self.query_packet_commitments(port_id, channel_id, None)
            .await
    }

    /// Queries one page of the packet commitments stored for the given channel.
    pub async fn packet_commitments_page(
        &self,
        port_id: &str,
        channel_id: &str,
        pagination: PageRequest,
    ) -> Result<PacketCommitmentsResponse, QueryError> {
        self.query_packet_commitments(port_id, channel_id, Some(pagination))
            .await
    }

    async fn query_packet_commitments(
        &self,
        port_id: &str,
        channel_id: &str,
        pagination: Option<PageRequest>,
    ) -> Result<PacketCommitmentsResponse, QueryError> {
        let request = QueryPacketCommitmentsRequest {
            port_id: port_id.to_owned(),
            channel_id: channel_id.to_owned(),
            pagination: pagination.map(Into::into),
        };

        self.channel_service
            .call::<methods::PacketCommitments>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries the acknowledgement written for the packet received with `sequence`.
    pub async fn packet_acknowledgement<S: IntoSequence>(
        &self,
        port_id: &str,
        channel_id: &str,
        sequence: S,
    ) -> Result<PacketAcknowledgementResponse, QueryError> {
        let request = QueryPacketAcknowledgementRequest {
            port_id: port_id.to_owned(),
            channel_id: channel_id.to_owned(),
            sequence: to_sequence("sequence", sequence)?.value(),
        };

        self.channel_service
            .call::<methods::PacketAcknowledgement>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Filters `packet_commitment_sequences` down to the packets that still have
    /// to be relayed. With `acknowledgements` set, the filter applies to the
    /// acknowledgements of those packets instead.
    pub async fn unrelayed_packets<I>(
        &self,
        port_id: &str,
        channel_id: &str,
        packet_commitment_sequences: I,
        acknowledgements: bool,
    ) -> Result<UnrelayedPacketsResponse, QueryError>
    where
        I: IntoIterator,
        I::Item: IntoSequence,
    {
        let sequences = to_sequences("packet_commitment_sequences", packet_commitment_sequences)?;

        let request = QueryUnrelayedPacketsRequest {
            port_id: port_id.to_owned(),
            channel_id: channel_id.to_owned(),
            packet_commitment_sequences: sequences.into_iter().map(u64::from).collect(),
            acknowledgements,
        };

        self.channel_service
            .call::<methods::UnrelayedPackets>(request)
            .await
            .map(IntoPlain::into_plain)
    }

    /// Queries the sequence of the next packet the given channel expects to receive.
    pub async fn next_sequence_receive(
        &self,
        port_id: &str,
        channel_id: &str,
    ) -> Result<NextSequenceReceiveResponse, QueryError> {
        let request = QueryNextSequenceReceiveRequest {
            port_id: port_id.to_owned(),
            channel_id: channel_id.to_owned(),
        };

        self.channel_service
            .call::<methods::NextSequenceReceive>(request)
            .await
            .map(IntoPlain::into_plain)
    }
}
