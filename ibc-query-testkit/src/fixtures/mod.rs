//! Protobuf fixtures of the values returned by the IBC query services.

pub mod channel;
pub mod connection;

use ibc_query_client::proto::RawHeight;

pub fn dummy_raw_height(revision_number: u64, revision_height: u64) -> RawHeight {
    RawHeight {
        revision_number,
        revision_height,
    }
}

/// Returns a proof placeholder; proofs are never verified by unverified queries.
pub fn dummy_proof() -> Vec<u8> {
    b"Y29uc2Vuc3VzU3RhdGUvaWJjb25lY2xpZW50LzIy".to_vec()
}
