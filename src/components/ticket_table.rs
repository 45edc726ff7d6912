//! Ticket Table Component

use leptos::prelude::*;

use crate::view_model::TicketRow;

const HEADERS: [&str; 5] = ["ID", "Title", "Description", "Status", "User ID"];

#[component]
pub fn TicketTable(rows: ReadSignal<Vec<TicketRow>>) -> impl IntoView {
    view! {
        <table class="ticket-table">
            <thead>
                <tr>
                    {HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody id="ticketTableBody">
                {move || rows.get().into_iter().map(|row| view! {
                    <tr>
                        {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
