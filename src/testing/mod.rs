mod fake_data_designer;
mod memory_principle_store;

pub use fake_data_designer::{FakeDataDesignerClient, FakeDataDesignerClientFactory};
pub use memory_principle_store::MemoryPrincipleStore;

use crate::domain::{GeneratedRecord, PRINCIPLE_FIELDS};
use crate::domain::principle::PRINCIPLE_NAME;

/// A record with every principle field set; `principle_name` is `topic`.
pub fn principle_record(topic: &str) -> GeneratedRecord {
    GeneratedRecord::from_pairs(PRINCIPLE_FIELDS.iter().map(|name| {
        let value =
            if *name == PRINCIPLE_NAME { topic.to_string() } else { format!("{name} text") };
        (*name, value)
    }))
}
