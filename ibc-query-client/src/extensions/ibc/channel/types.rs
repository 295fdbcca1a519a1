//! Contains the plain response types of the channel queries and their
//! conversions from the corresponding protobuf messages.

use crate::proto::channel::{
    Channel as RawChannel, Counterparty as RawCounterparty,
    IdentifiedChannel as RawIdentifiedChannel, PacketState as RawPacketState,
    QueryChannelResponse as RawQueryChannelResponse,
    QueryChannelsResponse as RawQueryChannelsResponse,
    QueryConnectionChannelsResponse as RawQueryConnectionChannelsResponse,
    QueryNextSequenceReceiveResponse as RawQueryNextSequenceReceiveResponse,
    QueryPacketAcknowledgementResponse as RawQueryPacketAcknowledgementResponse,
    QueryPacketCommitmentResponse as RawQueryPacketCommitmentResponse,
    QueryPacketCommitmentsResponse as RawQueryPacketCommitmentsResponse,
    QueryUnrelayedPacketsResponse as RawQueryUnrelayedPacketsResponse,
};
use crate::sequence::Sequence;
use crate::types::{Height, PageResponse, Proof};

/// The state of a channel end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum State {
    #[default]
    Uninitialized,
    Init,
    TryOpen,
    Open,
    Closed,
    /// A state this client does not know about, kept as sent by the node.
    Unknown(i32),
}

impl From<i32> for State {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Uninitialized,
            1 => Self::Init,
            2 => Self::TryOpen,
            3 => Self::Open,
            4 => Self::Closed,
            other => Self::Unknown(other),
        }
    }
}

/// The ordering of packets on a channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Order {
    #[default]
    None,
    Unordered,
    Ordered,
    Unknown(i32),
}

impl From<i32> for Order {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Unordered,
            2 => Self::Ordered,
            other => Self::Unknown(other),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Counterparty {
    pub port_id: String,
    pub channel_id: String,
}

impl From<RawCounterparty> for Counterparty {
    fn from(value: RawCounterparty) -> Self {
        Self {
            port_id: value.port_id,
            channel_id: value.channel_id,
        }
    }
}

/// A channel end as stored on the queried chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Channel {
    pub state: State,
    pub ordering: Order,
    pub counterparty: Option<Counterparty>,
    pub connection_hops: Vec<String>,
    pub version: String,
    /// Latest sequence of a completed or in-flight channel upgrade.
    pub upgrade_sequence: Sequence,
}

impl From<RawChannel> for Channel {
    fn from(value: RawChannel) -> Self {
        Self {
            state: value.state.into(),
            ordering: value.ordering.into(),
            counterparty: value.counterparty.map(Into::into),
            connection_hops: value.connection_hops,
            version: value.version,
            upgrade_sequence: value.upgrade_sequence.into(),
        }
    }
}

/// A channel end together with the port and channel identifiers it is stored under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct IdentifiedChannel {
    pub port_id: String,
    pub channel_id: String,
    pub state: State,
    pub ordering: Order,
    pub counterparty: Option<Counterparty>,
    pub connection_hops: Vec<String>,
    pub version: String,
    /// Latest sequence of a completed or in-flight channel upgrade.
    pub upgrade_sequence: Sequence,
}

impl From<RawIdentifiedChannel> for IdentifiedChannel {
    fn from(value: RawIdentifiedChannel) -> Self {
        Self {
            port_id: value.port_id,
            channel_id: value.channel_id,
            state: value.state.into(),
            ordering: value.ordering.into(),
            counterparty: value.counterparty.map(Into::into),
            connection_hops: value.connection_hops,
            version: value.version,
            upgrade_sequence: value.upgrade_sequence.into(),
        }
    }
}

/// A packet commitment, identified by its channel and sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PacketState {
    pub port_id: String,
    pub channel_id: String,
    pub sequence: Sequence,
    pub data: Vec<u8>,
}

impl From<RawPacketState> for PacketState {
    fn from(value: RawPacketState) -> Self {
        Self {
            port_id: value.port_id,
            channel_id: value.channel_id,
            sequence: value.sequence.into(),
            data: value.data,
        }
    }
}

/// Defines the response type when querying a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ChannelResponse {
    pub channel: Option<Channel>,
    pub proof: Proof,
    pub proof_path: String,
    pub proof_height: Option<Height>,
}

impl From<RawQueryChannelResponse> for ChannelResponse {
    fn from(value: RawQueryChannelResponse) -> Self {
        Self {
            channel: value.channel.map(Into::into),
            proof: value.proof,
            proof_path: value.proof_path,
            proof_height: value.proof_height.map(Into::into),
        }
    }
}

/// Defines the response type when querying a list of channels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ChannelsResponse {
    pub channels: Vec<IdentifiedChannel>,
    pub pagination: Option<PageResponse>,
    pub height: Option<Height>,
}

impl From<RawQueryChannelsResponse> for ChannelsResponse {
    fn from(value: RawQueryChannelsResponse) -> Self {
        Self {
            channels: value.channels.into_iter().map(Into::into).collect(),
            pagination: value.pagination.map(Into::into),
            height: value.height.map(Into::into),
        }
    }
}

/// Defines the response type when querying the channels of a connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ConnectionChannelsResponse {
    pub channels: Vec<IdentifiedChannel>,
    pub pagination: Option<PageResponse>,
    pub height: Option<Height>,
}

impl From<RawQueryConnectionChannelsResponse> for ConnectionChannelsResponse {
    fn from(value: RawQueryConnectionChannelsResponse) -> Self {
        Self {
            channels: value.channels.into_iter().map(Into::into).collect(),
            pagination: value.pagination.map(Into::into),
            height: value.height.map(Into::into),
        }
    }
}

/// Defines the response type when querying a packet commitment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PacketCommitmentResponse {
    pub commitment: Vec<u8>,
    pub proof: Proof,
    pub proof_path: String,
    pub proof_height: Option<Height>,
}

impl From<RawQueryPacketCommitmentResponse> for PacketCommitmentResponse {
    fn from(value: RawQueryPacketCommitmentResponse) -> Self {
        Self {
            commitment: value.commitment,
            proof: value.proof,
            proof_path: value.proof_path,
            proof_height: value.proof_height.map(Into::into),
        }
    }
}

/// Defines the response type when querying the packet commitments of a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PacketCommitmentsResponse {
    pub commitments: Vec<PacketState>,
    pub pagination: Option<PageResponse>,
    pub height: Option<Height>,
}

impl From<RawQueryPacketCommitmentsResponse> for PacketCommitmentsResponse {
    fn from(value: RawQueryPacketCommitmentsResponse) -> Self {
        Self {
            commitments: value.commitments.into_iter().map(Into::into).collect(),
            pagination: value.pagination.map(Into::into),
            height: value.height.map(Into::into),
        }
    }
}

/// Defines the response type when querying a packet acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PacketAcknowledgementResponse {
    pub acknowledgement: Vec<u8>,
    pub proof: Proof,
    pub proof_path: String,
    pub proof_height: Option<Height>,
}

impl From<RawQueryPacketAcknowledgementResponse> for PacketAcknowledgementResponse {
    fn from(value: RawQueryPacketAcknowledgementResponse) -> Self {
        Self {
            acknowledgement: value.acknowledgement,
            proof: value.proof,
            proof_path: value.proof_path,
            proof_height: value.proof_height.map(Into::into),
        }
    }
}

/// Defines the response type when querying the unrelayed packets of a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct UnrelayedPacketsResponse {
    pub sequences: Vec<Sequence>,
    pub height: Option<Height>,
}

impl From<RawQueryUnrelayedPacketsResponse> for UnrelayedPacketsResponse {
    fn from(value: RawQueryUnrelayedPacketsResponse) -> Self {
        Self {
            sequences: value.sequences.into_iter().map(Into::into).collect(),
            height: value.height.map(Into::into),
        }
    }
}

/// Defines the response type when querying the next receive sequence of a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct NextSequenceReceiveResponse {
    pub next_sequence_receive: Sequence,
    pub proof: Proof,
    pub proof_path: String,
    pub proof_height: Option<Height>,
}

impl From<RawQueryNextSequenceReceiveResponse> for NextSequenceReceiveResponse {
    fn from(value: RawQueryNextSequenceReceiveResponse) -> Self {
        Self {
            next_sequence_receive: value.next_sequence_receive.into(),
            proof: value.proof,
            proof_path: value.proof_path,
            proof_height: value.proof_height.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::proto::RawHeight;

    #[rstest]
    #[case(0, State::Uninitialized)]
    #[case(3, State::Open)]
    #[case(4, State::Closed)]
    #[case(5, State::Unknown(5))]
    #[case(-1, State::Unknown(-1))]
    fn state_conversion_is_total(#[case] raw: i32, #[case] expected: State) {
        assert_eq!(State::from(raw), expected);
    }

    #[test]
    fn channel_response_without_optional_fields_converts() {
        let plain = ChannelResponse::from(RawQueryChannelResponse::default());

        assert_eq!(plain, ChannelResponse::default());
    }

    #[test]
    fn channel_response_keeps_every_field() {
        let raw = RawQueryChannelResponse {
            channel: Some(RawChannel {
                state: 4,
                ordering: 2,
                counterparty: Some(RawCounterparty {
                    port_id: "transfer".to_string(),
                    channel_id: "channel-7".to_string(),
                }),
                connection_hops: vec!["connection-2".to_string()],
                version: "ics20-1".to_string(),
                upgrade_sequence: 7,
            }),
            proof: vec![1, 2, 3],
            proof_path: "channelEnds/ports/transfer/channels/channel-0".to_string(),
            proof_height: Some(RawHeight {
                revision_number: 1,
                revision_height: 9_007_199_254_740_993,
            }),
        };

        let plain = ChannelResponse::from(raw);

        assert_eq!(
            plain,
            ChannelResponse {
                channel: Some(Channel {
                    state: State::Closed,
                    ordering: Order::Ordered,
                    counterparty: Some(Counterparty {
                        port_id: "transfer".to_string(),
                        channel_id: "channel-7".to_string(),
                    }),
                    connection_hops: vec!["connection-2".to_string()],
                    version: "ics20-1".to_string(),
                    upgrade_sequence: Sequence::new(7),
                }),
                proof: vec![1, 2, 3],
                proof_path: "channelEnds/ports/transfer/channels/channel-0".to_string(),
                proof_height: Some(Height {
                    revision_number: 1,
                    revision_height: 9_007_199_254_740_993,
                }),
            }
        );
    }

    #[test]
    fn identified_channel_keeps_identifiers() {
        let raw = RawIdentifiedChannel {
            state: 3,
            ordering: 1,
            counterparty: Some(RawCounterparty {
                port_id: "transfer".to_string(),
                channel_id: "channel-7".to_string(),
            }),
            connection_hops: vec!["connection-0".to_string()],
            version: "ics20-1".to_string(),
            port_id: "transfer".to_string(),
            channel_id: "channel-0".to_string(),
            upgrade_sequence: 3,
        };

        let plain = IdentifiedChannel::from(raw);

        assert_eq!(plain.port_id, "transfer");
        assert_eq!(plain.channel_id, "channel-0");
        assert_eq!(plain.state, State::Open);
        assert_eq!(plain.ordering, Order::Unordered);
        assert_eq!(
            plain.counterparty.map(|c| c.channel_id).as_deref(),
            Some("channel-7")
        );
        assert_eq!(plain.upgrade_sequence, Sequence::new(3));
    }
}
