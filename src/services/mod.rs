mod data_designer_http;
mod filesystem_principle_store;

pub use data_designer_http::{HttpDataDesignerClient, HttpDataDesignerClientFactory};
pub use filesystem_principle_store::FilesystemPrincipleStore;
