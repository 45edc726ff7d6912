//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::sync::SyncClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sync client; `Rc`-based, so kept in thread-local storage
    client: StoredValue<SyncClient, LocalStorage>,
    /// Whether the page renders the ticket table
    pub ticket_table: bool,
}

impl AppContext {
    pub fn new(client: SyncClient, ticket_table: bool) -> Self {
        Self {
            client: StoredValue::new_local(client),
            ticket_table,
        }
    }

    /// Cheap clone of the sync client, for moving into a spawned task
    pub fn client(&self) -> SyncClient {
        self.client.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
