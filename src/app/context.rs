use crate::ports::{DataDesignerClientFactory, PrincipleStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: DataDesignerClientFactory, S: PrincipleStore> {
    clients: F,
    store: S,
}

impl<F: DataDesignerClientFactory, S: PrincipleStore> AppContext<F, S> {
    /// Create a new application context.
    pub fn new(clients: F, store: S) -> Self {
        Self { clients, store }
    }

    /// Get a reference to the client factory.
    pub fn clients(&self) -> &F {
        &self.clients
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
