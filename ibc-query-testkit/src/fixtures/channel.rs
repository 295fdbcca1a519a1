use ibc_query_client::proto::channel::{
    Channel as RawChannel, Counterparty as RawCounterparty,
    IdentifiedChannel as RawIdentifiedChannel, PacketState as RawPacketState,
    QueryChannelResponse,
};
use typed_builder::TypedBuilder;

use super::{dummy_proof, dummy_raw_height};

/// Configures a `RawChannel` end, an open unordered ICS-20 channel by default.
#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = RawChannel))]
pub struct ChannelConfig {
    #[builder(default = 3)]
    state: i32,
    #[builder(default = 1)]
    ordering: i32,
    #[builder(default = "transfer")]
    counterparty_port_id: &'static str,
    #[builder(default = "channel-1")]
    counterparty_channel_id: &'static str,
    #[builder(default = vec!["connection-0"])]
    connection_hops: Vec<&'static str>,
    #[builder(default = "ics20-1")]
    version: &'static str,
    #[builder(default)]
    upgrade_sequence: u64,
}

impl From<ChannelConfig> for RawChannel {
    fn from(config: ChannelConfig) -> Self {
        Self {
            state: config.state,
            ordering: config.ordering,
            counterparty: Some(RawCounterparty {
                port_id: config.counterparty_port_id.to_string(),
                channel_id: config.counterparty_channel_id.to_string(),
            }),
            connection_hops: config
                .connection_hops
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            version: config.version.to_string(),
            upgrade_sequence: config.upgrade_sequence,
        }
    }
}

/// Returns a dummy `RawChannel` in the given state, for testing purposes only!
pub fn dummy_raw_channel_end(state: i32) -> RawChannel {
    ChannelConfig::builder().state(state).build()
}

/// Returns a dummy `RawIdentifiedChannel` stored under `port_id` and `channel_id`.
pub fn dummy_raw_identified_channel(port_id: &str, channel_id: &str) -> RawIdentifiedChannel {
    let channel = dummy_raw_channel_end(3);

    RawIdentifiedChannel {
        state: channel.state,
        ordering: channel.ordering,
        counterparty: channel.counterparty,
        connection_hops: channel.connection_hops,
        version: channel.version,
        port_id: port_id.to_string(),
        channel_id: channel_id.to_string(),
        upgrade_sequence: channel.upgrade_sequence,
    }
}

pub fn dummy_raw_packet_state(
    port_id: &str,
    channel_id: &str,
    sequence: u64,
    data: &[u8],
) -> RawPacketState {
    RawPacketState {
        port_id: port_id.to_string(),
        channel_id: channel_id.to_string(),
        sequence,
        data: data.to_vec(),
    }
}

/// Returns the answer of a node to a channel query at height `1-10`.
pub fn dummy_channel_response() -> QueryChannelResponse {
    QueryChannelResponse {
        channel: Some(dummy_raw_channel_end(3)),
        proof: dummy_proof(),
        proof_path: "channelEnds/ports/transfer/channels/channel-0".to_string(),
        proof_height: Some(dummy_raw_height(1, 10)),
    }
}
