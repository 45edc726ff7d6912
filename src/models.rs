//! Frontend Models
//!
//! Records owned by the ticket service, plus request bodies and form drafts.

use serde::{Deserialize, Serialize};

/// Statuses offered by the update-status control.
/// The server does not enforce these; new tickets start as "Open".
pub const TICKET_STATUSES: &[&str] = &["Open", "In Progress", "Closed"];

/// Ticket record (matches service JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub user_id: i64,
}

/// User record (matches service JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

// ========================
// Request Bodies
// ========================

/// POST /tickets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    /// `None` serializes as `null`; the server rejects it
    pub user_id: Option<i64>,
}

/// POST /users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// PUT /tickets/{id}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: String,
}

// ========================
// Form Drafts
// ========================

/// Raw field values of the ticket form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub user_id: String,
}

impl TicketDraft {
    pub fn to_request(&self) -> NewTicket {
        NewTicket {
            title: self.title.clone(),
            description: self.description.clone(),
            user_id: parse_leading_int(&self.user_id),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raw field values of the user form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
}

impl UserDraft {
    pub fn to_request(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Integer parsing with browser `parseInt` leniency: leading whitespace,
/// optional sign, then as many decimal digits as are present.
/// Returns `None` when no digit follows, or on overflow.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}
