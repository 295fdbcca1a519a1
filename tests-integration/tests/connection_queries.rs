use ibc_query_client::extensions::ibc::connection::{ConnectionEnd, Counterparty, State, Version};
use ibc_query_client::extensions::ibc::IbcQueryExt;
use ibc_query_client::proto::connection::{
    QueryClientConnectionsRequest, QueryClientConnectionsResponse, QueryConnectionRequest,
    QueryConnectionResponse, QueryConnectionsRequest, QueryConnectionsResponse,
};
use ibc_query_client::types::PageRequest;
use ibc_query_testkit::fixtures::connection::{
    dummy_raw_identified_connection, ConnectionEndConfig,
};
use ibc_query_testkit::fixtures::{dummy_proof, dummy_raw_height};
use ibc_query_testkit::{MockQueryClient, MockTransportError};
use rstest::rstest;

const CONNECTION: &str = "/ibc.connection.Query/Connection";
const CONNECTIONS: &str = "/ibc.connection.Query/Connections";
const CLIENT_CONNECTIONS: &str = "/ibc.connection.Query/ClientConnections";

#[test_log::test(tokio::test)]
async fn connection_converts_to_plain_values() {
    let client = MockQueryClient::new();
    client.respond_with_message(
        CONNECTION,
        &QueryConnectionResponse {
            connection: Some(ConnectionEndConfig::builder().delay_period(10).build()),
            proof: dummy_proof(),
            proof_path: "connections/connection-0".to_string(),
            proof_height: Some(dummy_raw_height(2, 100)),
        },
    );

    let response = client
        .ibc()
        .unverified()
        .connection("connection-0")
        .await
        .expect("connection is registered");

    let request: QueryConnectionRequest = client
        .last_call(CONNECTION)
        .expect("query was sent")
        .decode()
        .expect("valid request");
    assert_eq!(request.connection_id, "connection-0");

    assert_eq!(
        response.connection,
        Some(ConnectionEnd {
            client_id: "07-tendermint-0".to_string(),
            versions: vec![Version {
                identifier: "1".to_string(),
                features: vec!["ORDER_ORDERED".to_string(), "ORDER_UNORDERED".to_string()],
            }],
            state: State::Open,
            counterparty: Some(Counterparty {
                client_id: "07-tendermint-0".to_string(),
                connection_id: "connection-0".to_string(),
                prefix: Some(b"ibc".to_vec()),
            }),
            delay_period: 10,
        })
    );
    assert_eq!(response.proof_path, "connections/connection-0");
    assert_eq!(response.proof_height.map(|h| h.to_string()), Some("2-100".to_string()));
}

#[test_log::test(tokio::test)]
async fn node_errors_pass_through_unchanged() {
    let client = MockQueryClient::new();
    client.fail_with(CONNECTIONS, "not found");

    let err = client
        .ibc()
        .unverified()
        .connections()
        .await
        .expect_err("node rejects the query");

    assert!(err.is_transport());
    assert_eq!(err.to_string(), "not found");
    assert_eq!(
        err.downcast_transport::<MockTransportError>(),
        Some(&MockTransportError::Node("not found".to_string()))
    );
    assert_eq!(client.call_count(CONNECTIONS), 1);
}

#[test_log::test(tokio::test)]
async fn unserved_routes_surface_as_transport_errors() {
    let client = MockQueryClient::new();

    let err = client
        .ibc()
        .unverified()
        .client_connections("07-tendermint-0")
        .await
        .expect_err("no reply registered");

    assert_eq!(
        err.downcast_transport::<MockTransportError>(),
        Some(&MockTransportError::UnknownPath {
            path: CLIENT_CONNECTIONS.to_string()
        })
    );
}

#[rstest]
#[case(PageRequest::with_limit(2), 2)]
#[case(PageRequest::after(b"connection-1".to_vec(), 5), 5)]
#[tokio::test]
async fn connections_page_forwards_the_page_request(
    #[case] page: PageRequest,
    #[case] limit: u64,
) {
    let client = MockQueryClient::new();
    client.respond_with_message(
        CONNECTIONS,
        &QueryConnectionsResponse {
            connections: vec![
                dummy_raw_identified_connection("connection-0"),
                dummy_raw_identified_connection("connection-1"),
            ],
            pagination: None,
            height: Some(dummy_raw_height(2, 101)),
        },
    );

    let response = client
        .ibc()
        .unverified()
        .connections_page(page.clone())
        .await
        .expect("connections are registered");

    let request: QueryConnectionsRequest = client
        .last_call(CONNECTIONS)
        .expect("query was sent")
        .decode()
        .expect("valid request");
    let pagination = request.pagination.expect("pagination is sent");
    assert_eq!(pagination.limit, limit);
    assert_eq!(pagination.key, page.key);

    let ids: Vec<_> = response.connections.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["connection-0", "connection-1"]);
}

#[test_log::test(tokio::test)]
async fn client_connections_lists_connection_paths() {
    let client = MockQueryClient::new();
    client.respond_with_message(
        CLIENT_CONNECTIONS,
        &QueryClientConnectionsResponse {
            connection_paths: vec!["connection-0".to_string(), "connection-3".to_string()],
            proof: dummy_proof(),
            proof_path: "clients/07-tendermint-0/connections".to_string(),
            proof_height: Some(dummy_raw_height(2, 102)),
        },
    );

    let response = client
        .ibc()
        .unverified()
        .client_connections("07-tendermint-0")
        .await
        .expect("client is registered");

    let request: QueryClientConnectionsRequest = client
        .last_call(CLIENT_CONNECTIONS)
        .expect("query was sent")
        .decode()
        .expect("valid request");
    assert_eq!(request.client_id, "07-tendermint-0");
    assert_eq!(response.connection_paths, ["connection-0", "connection-3"]);
}
