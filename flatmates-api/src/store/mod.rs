mod messages;
mod users;

pub use messages::{MessageRef, MessageStore};
pub use users::{UpdateSummary, UserStore};

use mongodb::Database;

/// Handle over the document store. Cloning is cheap: collections share the
/// driver's pooled client underneath.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn users(&self) -> UserStore {
        UserStore::new(self.db.collection("users"))
    }

    pub fn messages(&self) -> MessageStore {
        MessageStore::new(self.db.collection("messages"))
    }
}
