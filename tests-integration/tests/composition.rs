use std::sync::Arc;

use ibc_query_client::extensions::ibc::{setup_ibc_extension, IbcExtension, IbcQueryExt};
use ibc_query_client::extensions::{Extension, QueryClientExt};
use ibc_query_client::proto::channel::{QueryChannelsResponse, QueryUnrelayedPacketsResponse};
use ibc_query_client::proto::connection::QueryConnectionsResponse;
use ibc_query_client::QueryClient;
use ibc_query_testkit::fixtures::channel::{dummy_channel_response, dummy_raw_identified_channel};
use ibc_query_testkit::fixtures::connection::dummy_raw_identified_connection;
use ibc_query_testkit::fixtures::dummy_raw_height;
use ibc_query_testkit::MockQueryClient;

const CHANNEL: &str = "/ibc.channel.Query/Channel";
const CHANNELS: &str = "/ibc.channel.Query/Channels";
const CONNECTIONS: &str = "/ibc.connection.Query/Connections";
const UNRELAYED_PACKETS: &str = "/ibc.channel.Query/UnrelayedPackets";

fn populated_client() -> MockQueryClient {
    let client = MockQueryClient::new();
    client
        .respond_with_message(CHANNEL, &dummy_channel_response())
        .respond_with_message(
            CHANNELS,
            &QueryChannelsResponse {
                channels: vec![dummy_raw_identified_channel("transfer", "channel-0")],
                pagination: None,
                height: Some(dummy_raw_height(1, 10)),
            },
        )
        .respond_with_message(
            CONNECTIONS,
            &QueryConnectionsResponse {
                connections: vec![dummy_raw_identified_connection("connection-0")],
                pagination: None,
                height: Some(dummy_raw_height(1, 10)),
            },
        );
    client
}

#[test_log::test(tokio::test)]
async fn extensions_are_built_from_any_client() {
    let client = populated_client();

    let generic: IbcExtension<'_, MockQueryClient> = client.extension();
    let explicit = setup_ibc_extension(&client);

    let first = generic
        .unverified()
        .channel("transfer", "channel-0")
        .await
        .expect("channel is registered");
    let second = explicit
        .unverified()
        .channel("transfer", "channel-0")
        .await
        .expect("channel is registered");

    assert_eq!(first, second);
    assert_eq!(client.call_count(CHANNEL), 2);
    assert_eq!(IbcExtension::<MockQueryClient>::NAMESPACE, "ibc");
}

#[test_log::test(tokio::test)]
async fn extensions_work_through_shared_and_erased_clients() {
    let client = Arc::new(populated_client());
    let erased: Box<dyn QueryClient<Error = ibc_query_testkit::MockTransportError>> =
        Box::new(populated_client());

    let shared = client
        .ibc()
        .unverified()
        .connections()
        .await
        .expect("connections are registered");
    let boxed = erased
        .ibc()
        .unverified()
        .connections()
        .await
        .expect("connections are registered");

    assert_eq!(shared, boxed);
    assert_eq!(shared.connections[0].id, "connection-0");
}

#[test_log::test(tokio::test)]
async fn concurrent_queries_are_independent() {
    let client = populated_client();
    let queries = client.ibc().unverified();

    let (channel, channels, connections) = futures::join!(
        queries.channel("transfer", "channel-0"),
        queries.channels(),
        queries.connections(),
    );

    assert!(channel.expect("channel").channel.is_some());
    assert_eq!(channels.expect("channels").channels.len(), 1);
    assert_eq!(connections.expect("connections").connections.len(), 1);
    assert_eq!(client.total_calls(), 3);
}

#[test_log::test(tokio::test)]
async fn queries_on_separate_tasks_share_the_client() {
    let client = Arc::new(populated_client());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .ibc()
                    .unverified()
                    .channels()
                    .await
                    .map(|response| response.channels.len())
            })
        })
        .collect();

    for handle in handles {
        let len = handle.await.expect("task completes").expect("channels");
        assert_eq!(len, 1);
    }
    assert_eq!(client.call_count(CHANNELS), 4);
}

#[cfg(feature = "serde")]
#[test_log::test(tokio::test)]
async fn plain_responses_serialize_wide_integers_as_strings() {
    let client = MockQueryClient::new();
    client.respond_with_message(
        UNRELAYED_PACKETS,
        &QueryUnrelayedPacketsResponse {
            sequences: vec![1, 9_007_199_254_740_993],
            height: Some(dummy_raw_height(1, 10)),
        },
    );

    let response = client
        .ibc()
        .unverified()
        .unrelayed_packets("transfer", "channel-0", [1u64], false)
        .await
        .expect("sequences are valid");

    let json = serde_json::to_value(&response).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "sequences": ["1", "9007199254740993"],
            "height": { "revision_number": "1", "revision_height": "10" },
        })
    );
}
