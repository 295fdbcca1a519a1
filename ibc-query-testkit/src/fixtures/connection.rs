use ibc_query_client::proto::connection::{
    ConnectionEnd as RawConnectionEnd, Counterparty as RawCounterparty,
    IdentifiedConnection as RawIdentifiedConnection, MerklePrefix, Version as RawVersion,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = RawCounterparty))]
pub struct CounterpartyConfig {
    #[builder(default = "07-tendermint-0")]
    client_id: &'static str,
    #[builder(default = "connection-0")]
    connection_id: &'static str,
    #[builder(default = Some(MerklePrefix {
        key_prefix: b"ibc".to_vec()
    }))]
    prefix: Option<MerklePrefix>,
}

impl From<CounterpartyConfig> for RawCounterparty {
    fn from(config: CounterpartyConfig) -> Self {
        Self {
            client_id: config.client_id.to_string(),
            connection_id: config.connection_id.to_string(),
            prefix: config.prefix,
        }
    }
}

/// Configures a `RawConnectionEnd`, an open connection on `07-tendermint-0` by default.
#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = RawConnectionEnd))]
pub struct ConnectionEndConfig {
    #[builder(default = "07-tendermint-0")]
    client_id: &'static str,
    #[builder(default = 3)]
    state: i32,
    #[builder(default = CounterpartyConfig::builder().build())]
    counterparty: RawCounterparty,
    #[builder(default = vec![dummy_raw_version()])]
    versions: Vec<RawVersion>,
    #[builder(default)]
    delay_period: u64,
}

impl From<ConnectionEndConfig> for RawConnectionEnd {
    fn from(config: ConnectionEndConfig) -> Self {
        Self {
            client_id: config.client_id.to_string(),
            versions: config.versions,
            state: config.state,
            counterparty: Some(config.counterparty),
            delay_period: config.delay_period,
        }
    }
}

/// Returns the default IBC connection version.
pub fn dummy_raw_version() -> RawVersion {
    RawVersion {
        identifier: "1".to_string(),
        features: vec!["ORDER_ORDERED".to_string(), "ORDER_UNORDERED".to_string()],
    }
}

/// Returns a dummy `RawIdentifiedConnection` stored under `connection_id`.
pub fn dummy_raw_identified_connection(connection_id: &str) -> RawIdentifiedConnection {
    let end: RawConnectionEnd = ConnectionEndConfig::builder().build();

    RawIdentifiedConnection {
        id: connection_id.to_string(),
        client_id: end.client_id,
        versions: end.versions,
        state: end.state,
        counterparty: end.counterparty,
        delay_period: end.delay_period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_end_config_overrides_defaults() {
        let end: RawConnectionEnd = ConnectionEndConfig::builder()
            .state(1)
            .delay_period(30)
            .build();

        assert_eq!(end.state, 1);
        assert_eq!(end.delay_period, 30);
        assert_eq!(
            end.counterparty.and_then(|c| c.prefix).map(|p| p.key_prefix),
            Some(b"ibc".to_vec())
        );
    }
}
