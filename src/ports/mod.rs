mod data_designer_client;
mod principle_store;

pub use data_designer_client::{
    ClientCredentials, DataDesignerClient, DataDesignerClientFactory, PreviewResult,
};
pub use principle_store::PrincipleStore;
