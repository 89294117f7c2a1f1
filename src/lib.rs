pub mod api;
pub mod bandwidth;
pub mod config;
pub mod fetcher;
pub mod poller;
pub mod snapshot;
pub mod utils;

pub use api::{ApiServer, ApiState, NodesResponse};
pub use bandwidth::{
    FilterSource, Mbps, NodeRecord, extract_bandwidth_mbps, filter_lines, filter_node_texts,
    filter_nodes, filter_table_rows, to_mbps,
};
pub use config::{ScrapeConfig, ScrapeConfigBuilder};
pub use fetcher::{FetchError, Fetcher, HttpFetcher};
pub use poller::{PollOutcome, Poller};
pub use snapshot::{NodeSnapshot, SnapshotStore};
