//! Contains the plain response types of the connection queries and their
//! conversions from the corresponding protobuf messages.

use crate::proto::connection::{
    ConnectionEnd as RawConnectionEnd, Counterparty as RawCounterparty,
    IdentifiedConnection as RawIdentifiedConnection,
    QueryClientConnectionsResponse as RawQueryClientConnectionsResponse,
    QueryConnectionResponse as RawQueryConnectionResponse,
    QueryConnectionsResponse as RawQueryConnectionsResponse, Version as RawVersion,
};
use crate::types::{Height, PageResponse, Proof};

/// The state of a connection end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum State {
    #[default]
    Uninitialized,
    Init,
    TryOpen,
    Open,
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
            other => Self::Unknown(other),
        }
    }
}

/// A connection version: an identifier and the channel orderings it supports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Version {
    pub identifier: String,
    pub features: Vec<String>,
}

impl From<RawVersion> for Version {
    fn from(value: RawVersion) -> Self {
        Self {
            identifier: value.identifier,
            features: value.features,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Counterparty {
    pub client_id: String,
    pub connection_id: String,
    /// The commitment prefix of the counterparty store.
    pub prefix: Option<Vec<u8>>,
}

impl From<RawCounterparty> for Counterparty {
    fn from(value: RawCounterparty) -> Self {
        Self {
            client_id: value.client_id,
            connection_id: value.connection_id,
            prefix: value.prefix.map(|p| p.key_prefix),
        }
    }
}

/// A connection end as stored on the queried chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ConnectionEnd {
    pub client_id: String,
    pub versions: Vec<Version>,
    pub state: State,
    pub counterparty: Option<Counterparty>,
    /// Delay period in nanoseconds.
    #[cfg_attr(feature = "serde", serde(with = "crate::utils::serde_str"))]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub delay_period: u64,
}

impl From<RawConnectionEnd> for ConnectionEnd {
    fn from(value: RawConnectionEnd) -> Self {
        Self {
            client_id: value.client_id,
            versions: value.versions.into_iter().map(Into::into).collect(),
            state: value.state.into(),
            counterparty: value.counterparty.map(Into::into),
            delay_period: value.delay_period,
        }
    }
}

/// A connection end together with the identifier it is stored under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct IdentifiedConnection {
    pub id: String,
    pub client_id: String,
    pub versions: Vec<Version>,
    pub state: State,
    pub counterparty: Option<Counterparty>,
    #[cfg_attr(feature = "serde", serde(with = "crate::utils::serde_str"))]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub delay_period: u64,
}

impl From<RawIdentifiedConnection> for IdentifiedConnection {
    fn from(value: RawIdentifiedConnection) -> Self {
        Self {
            id: value.id,
            client_id: value.client_id,
            versions: value.versions.into_iter().map(Into::into).collect(),
            state: value.state.into(),
            counterparty: value.counterparty.map(Into::into),
            delay_period: value.delay_period,
        }
    }
}

/// Defines the response type when querying a connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ConnectionResponse {
    pub connection: Option<ConnectionEnd>,
    pub proof: Proof,
    pub proof_path: String,
    pub proof_height: Option<Height>,
}

impl From<RawQueryConnectionResponse> for ConnectionResponse {
    fn from(value: RawQueryConnectionResponse) -> Self {
        Self {
            connection: value.connection.map(Into::into),
            proof: value.proof,
            proof_path: value.proof_path,
            proof_height: value.proof_height.map(Into::into),
        }
    }
}

/// Defines the response type when querying a list of connections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ConnectionsResponse {
    pub connections: Vec<IdentifiedConnection>,
    pub pagination: Option<PageResponse>,
    pub height: Option<Height>,
}

impl From<RawQueryConnectionsResponse> for ConnectionsResponse {
    fn from(value: RawQueryConnectionsResponse) -> Self {
        Self {
            connections: value.connections.into_iter().map(Into::into).collect(),
            pagination: value.pagination.map(Into::into),
            height: value.height.map(Into::into),
        }
    }
}

/// Defines the response type when querying the connections of a client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ClientConnectionsResponse {
    pub connection_paths: Vec<String>,
    pub proof: Proof,
    pub proof_path: String,
    pub proof_height: Option<Height>,
}

impl From<RawQueryClientConnectionsResponse> for ClientConnectionsResponse {
    fn from(value: RawQueryClientConnectionsResponse) -> Self {
        Self {
            connection_paths: value.connection_paths,
            proof: value.proof,
            proof_path: value.proof_path,
            proof_height: value.proof_height.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::connection::MerklePrefix;

    use super::*;

    #[test]
    fn counterparty_tells_an_empty_prefix_from_a_missing_one() {
        let with_prefix = Counterparty::from(RawCounterparty {
            client_id: "07-tendermint-0".to_string(),
            connection_id: "connection-3".to_string(),
            prefix: Some(MerklePrefix {
                key_prefix: b"ibc".to_vec(),
            }),
        });
        assert_eq!(with_prefix.prefix, Some(b"ibc".to_vec()));

        let empty_prefix = Counterparty::from(RawCounterparty {
            prefix: Some(MerklePrefix { key_prefix: vec![] }),
            ..Default::default()
        });
        assert_eq!(empty_prefix.prefix, Some(vec![]));

        let without_prefix = Counterparty::from(RawCounterparty::default());
        assert_eq!(without_prefix.prefix, None);
    }

    #[test]
    fn connection_end_keeps_versions_and_delay() {
        let plain = ConnectionEnd::from(RawConnectionEnd {
            client_id: "07-tendermint-0".to_string(),
            versions: vec![RawVersion {
                identifier: "1".to_string(),
                features: vec!["ORDER_ORDERED".to_string(), "ORDER_UNORDERED".to_string()],
            }],
            state: 3,
            counterparty: None,
            delay_period: u64::MAX,
        });

        assert_eq!(plain.state, State::Open);
        assert_eq!(plain.versions[0].features.len(), 2);
        assert_eq!(plain.delay_period, u64::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn delay_period_serializes_as_string() {
        let plain = ConnectionEnd {
            delay_period: 9_007_199_254_740_993,
            ..Default::default()
        };

        let json = serde_json::to_value(&plain).expect("serializable");
        assert_eq!(json["delay_period"], "9007199254740993");
    }
}
