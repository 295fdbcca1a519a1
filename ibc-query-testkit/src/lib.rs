#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

pub mod fixtures;
pub mod mock;

pub use mock::{MockQueryClient, MockTransportError, RecordedQuery};
