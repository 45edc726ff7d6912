//! View Model
//!
//! Pure render functions from fetched records to complete view contents,
//! and the `ViewTarget` seam that receives them.

use leptos::prelude::*;

use crate::models::{Ticket, User};

/// A named page region that is rewritten wholesale on every render
pub trait ViewTarget<T> {
    fn replace(&self, entries: Vec<T>);
}

impl<T: Send + Sync + 'static> ViewTarget<T> for WriteSignal<Vec<T>> {
    fn replace(&self, entries: Vec<T>) {
        self.set(entries);
    }
}

/// One ticket in the card list
#[derive(Debug, Clone, PartialEq)]
pub struct TicketCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    /// Labelled lines under the description
    pub fields: Vec<(&'static str, String)>,
}

/// One ticket in the table body: id, title, description, status, user id
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRow {
    pub id: i64,
    pub cells: [String; 5],
}

/// One user in the card list
#[derive(Debug, Clone, PartialEq)]
pub struct UserCard {
    pub id: i64,
    pub fields: Vec<(&'static str, String)>,
}

pub fn ticket_cards(tickets: &[Ticket]) -> Vec<TicketCard> {
    tickets
        .iter()
        .map(|t| TicketCard {
            id: t.id,
            title: t.title.clone(),
            description: t.description.clone(),
            status: t.status.clone(),
            fields: vec![("Status", t.status.clone()), ("User ID", t.user_id.to_string())],
        })
        .collect()
}

pub fn ticket_rows(tickets: &[Ticket]) -> Vec<TicketRow> {
    tickets
        .iter()
        .map(|t| TicketRow {
            id: t.id,
            cells: [
                t.id.to_string(),
                t.title.clone(),
                t.description.clone(),
                t.status.clone(),
                t.user_id.to_string(),
            ],
        })
        .collect()
}

pub fn user_cards(users: &[User]) -> Vec<UserCard> {
    users
        .iter()
        .map(|u| UserCard {
            id: u.id,
            fields: vec![
                ("ID", u.id.to_string()),
                ("Username", u.username.clone()),
                ("Email", u.email.clone()),
            ],
        })
        .collect()
}

/// Status choices for a card: the conventional set, plus the ticket's own
/// status when it is something else
pub fn status_choices(current: &str) -> Vec<String> {
    let mut choices: Vec<String> = crate::models::TICKET_STATUSES.iter().map(|s| s.to_string()).collect();
    if !current.is_empty() && !choices.iter().any(|s| s == current) {
        choices.insert(0, current.to_string());
    }
    choices
}
