//! API Sync Client
//!
//! Command handlers behind the page's forms and buttons. Every operation
//! fetches or mutates through `TicketApi`, then rewrites a whole view target
//! from the freshly fetched list. Failures are logged and alerted here; the
//! returned `SyncResult` is informational.

use std::rc::Rc;

use crate::api::TicketApi;
use crate::error::{SyncError, SyncResult};
use crate::models::{StatusUpdate, TicketDraft, UserDraft};
use crate::notify::Notifier;
use crate::view_model::{self, TicketCard, TicketRow, UserCard, ViewTarget};

pub const TICKET_TABLE_BODY: &str = "ticketTableBody";

pub const LOAD_TICKETS_FAILED: &str = "Failed to load tickets. Please try again later.";
pub const CREATE_TICKET_FAILED: &str = "Failed to create ticket. Please try again.";
pub const DELETE_TICKET_FAILED: &str = "Failed to delete ticket. Please try again.";
pub const UPDATE_STATUS_FAILED: &str = "Error updating ticket status. Please try again.";
pub const LOAD_USERS_FAILED: &str = "Failed to load users. Please try again later.";
pub const CREATE_USER_FAILED: &str = "Failed to create user. Please try again.";

/// The page regions the client writes to
pub struct ViewTargets {
    pub ticket_cards: Box<dyn ViewTarget<TicketCard>>,
    /// Absent on pages without the ticket table
    pub ticket_table: Option<Box<dyn ViewTarget<TicketRow>>>,
    pub user_cards: Box<dyn ViewTarget<UserCard>>,
}

#[derive(Clone)]
pub struct SyncClient {
    api: Rc<dyn TicketApi>,
    notifier: Rc<dyn Notifier>,
    targets: Rc<ViewTargets>,
}

impl SyncClient {
    pub fn new(api: Rc<dyn TicketApi>, notifier: impl Notifier + 'static, targets: ViewTargets) -> Self {
        Self {
            api,
            notifier: Rc::new(notifier),
            targets: Rc::new(targets),
        }
    }

    /// Log the detail, show the static notice, hand the error back
    fn fail(&self, operation: &str, notice: &str, error: SyncError) -> SyncError {
        log::error!("{} failed ({}): {}", operation, error.kind(), error);
        self.notifier.alert(notice);
        error
    }

    // ========================
    // Tickets
    // ========================

    /// GET /tickets into the card list
    pub async fn list_ticket_cards(&self) -> SyncResult<()> {
        log::debug!("fetching tickets for card view");
        let tickets = self
            .api
            .list_tickets()
            .await
            .map_err(|e| self.fail("list tickets", LOAD_TICKETS_FAILED, e))?;
        self.targets.ticket_cards.replace(view_model::ticket_cards(&tickets));
        Ok(())
    }

    /// GET /tickets into the table body; a no-op on pages without one
    pub async fn list_ticket_table(&self) -> SyncResult<()> {
        let Some(table) = self.targets.ticket_table.as_ref() else {
            log::warn!("{}", SyncError::ElementMissing(TICKET_TABLE_BODY));
            return Ok(());
        };

        log::debug!("fetching tickets for table view");
        let tickets = self
            .api
            .list_tickets()
            .await
            .map_err(|e| self.fail("list tickets", LOAD_TICKETS_FAILED, e))?;
        log::debug!("fetched {} tickets", tickets.len());
        table.replace(view_model::ticket_rows(&tickets));
        Ok(())
    }

    /// POST /tickets, then refresh the table.
    /// `on_created` runs before the refresh, and only on success.
    pub async fn create_ticket(&self, draft: &TicketDraft, on_created: impl FnOnce()) -> SyncResult<()> {
        let request = draft.to_request();
        self.api
            .create_ticket(&request)
            .await
            .map_err(|e| self.fail("create ticket", CREATE_TICKET_FAILED, e))?;
        log::info!("created ticket {:?}", request.title);
        on_created();
        // A failed refresh reports itself
        let _ = self.list_ticket_table().await;
        Ok(())
    }

    /// DELETE /tickets/{id}, then refresh the table
    pub async fn delete_ticket(&self, id: i64) -> SyncResult<()> {
        self.api
            .delete_ticket(id)
            .await
            .map_err(|e| self.fail("delete ticket", DELETE_TICKET_FAILED, e))?;
        log::info!("deleted ticket {}", id);
        let _ = self.list_ticket_table().await;
        Ok(())
    }

    /// PUT /tickets/{id} with the new status, then refresh the table
    pub async fn update_ticket_status(&self, id: i64, status: &str) -> SyncResult<()> {
        log::debug!("updating status for ticket {} to {:?}", id, status);
        let update = StatusUpdate { status: status.to_string() };
        self.api
            .update_ticket(id, &update)
            .await
            .map_err(|e| self.fail("update ticket status", UPDATE_STATUS_FAILED, e))?;
        let _ = self.list_ticket_table().await;
        Ok(())
    }

    // ========================
    // Users
    // ========================

    /// GET /users into the user card list
    pub async fn list_user_cards(&self) -> SyncResult<()> {
        log::debug!("fetching users");
        let users = self
            .api
            .list_users()
            .await
            .map_err(|e| self.fail("list users", LOAD_USERS_FAILED, e))?;
        self.targets.user_cards.replace(view_model::user_cards(&users));
        Ok(())
    }

    /// POST /users, then refresh the user list
    pub async fn create_user(&self, draft: &UserDraft, on_created: impl FnOnce()) -> SyncResult<()> {
        let request = draft.to_request();
        self.api
            .create_user(&request)
            .await
            .map_err(|e| self.fail("create user", CREATE_USER_FAILED, e))?;
        log::info!("created user {:?}", request.username);
        on_created();
        let _ = self.list_user_cards().await;
        Ok(())
    }
}
