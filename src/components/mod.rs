//! UI Components
//!
//! Leptos components bound to the sync client's view targets.

mod delete_confirm_button;
mod ticket_card_list;
mod ticket_form;
mod ticket_table;
mod user_card_list;
mod user_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use ticket_card_list::TicketCardList;
pub use ticket_form::TicketForm;
pub use ticket_table::TicketTable;
pub use user_card_list::UserCardList;
pub use user_form::UserForm;
