//! Ticket Service Bindings
//!
//! The remote REST contract, and its HTTP implementation.

mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::models::{NewTicket, NewUser, StatusUpdate, Ticket, User};

pub use http::HttpApi;

/// Remote ticket/user service
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait TicketApi {
    /// GET /tickets
    async fn list_tickets(&self) -> SyncResult<Vec<Ticket>>;

    /// POST /tickets
    async fn create_ticket(&self, ticket: &NewTicket) -> SyncResult<()>;

    /// PUT /tickets/{id}
    async fn update_ticket(&self, id: i64, update: &StatusUpdate) -> SyncResult<()>;

    /// DELETE /tickets/{id}
    async fn delete_ticket(&self, id: i64) -> SyncResult<()>;

    /// GET /users
    async fn list_users(&self) -> SyncResult<Vec<User>>;

    /// POST /users
    async fn create_user(&self, user: &NewUser) -> SyncResult<()>;
}
