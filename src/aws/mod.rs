pub mod client;
pub mod mock;
pub mod sdk;

pub use client::{EksClient, EksClientFactory, ListClustersInput, ListClustersOutput};
pub use mock::{MockEksClient, MockEksClientFactory};
pub use sdk::{SdkEksClient, SdkEksClientFactory};
