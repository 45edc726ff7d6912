//! In-memory ticket service for tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::TicketApi;
use crate::error::{SyncError, SyncResult};
use crate::models::{NewTicket, NewUser, StatusUpdate, Ticket, User};

#[derive(Default)]
struct State {
    tickets: Vec<Ticket>,
    users: Vec<User>,
    next_id: i64,
    /// "METHOD /path-prefix" routes that fail; `None` answers 500
    failing: Vec<(String, Option<SyncError>)>,
    /// Every request seen, as "METHOD /path"
    requests: Vec<String>,
}

#[derive(Default)]
pub struct FakeApi {
    state: RefCell<State>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tickets(self, tickets: Vec<Ticket>) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.next_id = tickets.iter().map(|t| t.id).max().unwrap_or(0);
            state.tickets = tickets;
        }
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.state.borrow_mut().users = users;
        self
    }

    /// Make every request matching `route` (e.g. "GET /tickets") fail with 500
    pub fn fail(&self, route: &str) {
        self.state.borrow_mut().failing.push((route.to_string(), None));
    }

    /// Make every request matching `route` fail with `error`
    pub fn fail_with(&self, route: &str, error: SyncError) {
        self.state.borrow_mut().failing.push((route.to_string(), Some(error)));
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.borrow().requests.clone()
    }

    fn record(&self, method: &'static str, path: &str) -> SyncResult<()> {
        let mut state = self.state.borrow_mut();
        let line = format!("{} {}", method, path);
        state.requests.push(line.clone());
        match state.failing.iter().find(|(route, _)| line.starts_with(route.as_str())) {
            Some((_, Some(error))) => Err(error.clone()),
            Some((_, None)) => Err(SyncError::status(method, path, 500, "Internal Server Error")),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i64 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }
}

pub fn ticket(id: i64, title: &str, status: &str, user_id: i64) -> Ticket {
    Ticket {
        id,
        title: title.to_string(),
        description: format!("Description of {}", title),
        status: status.to_string(),
        user_id,
    }
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
    }
}

#[async_trait(?Send)]
impl TicketApi for FakeApi {
    async fn list_tickets(&self) -> SyncResult<Vec<Ticket>> {
        self.record("GET", "/tickets")?;
        Ok(self.state.borrow().tickets.clone())
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> SyncResult<()> {
        self.record("POST", "/tickets")?;
        let user_id = match ticket.user_id {
            Some(id) if !ticket.title.is_empty() && !ticket.description.is_empty() => id,
            _ => return Err(SyncError::status("POST", "/tickets", 400, "Missing data")),
        };
        let id = self.next_id();
        self.state.borrow_mut().tickets.push(Ticket {
            id,
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: "Open".to_string(),
            user_id,
        });
        Ok(())
    }

    async fn update_ticket(&self, id: i64, update: &StatusUpdate) -> SyncResult<()> {
        let path = format!("/tickets/{}", id);
        self.record("PUT", &path)?;
        let mut state = self.state.borrow_mut();
        match state.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.status = update.status.clone();
                Ok(())
            }
            None => Err(SyncError::status("PUT", path, 404, "Not Found")),
        }
    }

    async fn delete_ticket(&self, id: i64) -> SyncResult<()> {
        let path = format!("/tickets/{}", id);
        self.record("DELETE", &path)?;
        let mut state = self.state.borrow_mut();
        let before = state.tickets.len();
        state.tickets.retain(|t| t.id != id);
        if state.tickets.len() == before {
            return Err(SyncError::status("DELETE", path, 404, "Not Found"));
        }
        Ok(())
    }

    async fn list_users(&self) -> SyncResult<Vec<User>> {
        self.record("GET", "/users")?;
        Ok(self.state.borrow().users.clone())
    }

    async fn create_user(&self, user: &NewUser) -> SyncResult<()> {
        self.record("POST", "/users")?;
        if user.username.is_empty() || user.email.is_empty() {
            return Err(SyncError::status("POST", "/users", 400, "Missing data"));
        }
        let id = self.next_id();
        self.state.borrow_mut().users.push(User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
        });
        Ok(())
    }
}
