pub mod list_clusters;

pub use list_clusters::{ClusterListTool, ListClustersRequest, ListClustersResponse, TextContent};
