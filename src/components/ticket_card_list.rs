//! Ticket Card List Component
//!
//! One card per ticket with delete and update-status controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::view_model::{status_choices, TicketCard};

/// Status picker plus "Update Status" button for a single ticket
#[component]
fn StatusControl(id: i64, status: String) -> impl IntoView {
    let ctx = use_app_context();
    let choices = status_choices(&status);
    let (selected, set_selected) = signal(status);

    let on_update = move |_| {
        let client = ctx.client();
        let status = selected.get();
        spawn_local(async move {
            let _ = client.update_ticket_status(id, &status).await;
        });
    };

    view! {
        <span class="status-control">
            <select on:change=move |ev| set_selected.set(event_target_value(&ev))>
                {choices.into_iter().map(|choice| {
                    let is_current = choice == selected.get_untracked();
                    view! { <option value=choice.clone() selected=is_current>{choice.clone()}</option> }
                }).collect_view()}
            </select>
            <button class="update-status-button" on:click=on_update>"Update Status"</button>
        </span>
    }
}

#[component]
pub fn TicketCardList(cards: ReadSignal<Vec<TicketCard>>) -> impl IntoView {
    let ctx = use_app_context();

    let delete = move |id: i64| {
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.delete_ticket(id).await;
        });
    };

    // Rebuilt wholesale whenever the card list is replaced
    view! {
        <div id="ticketList" class="ticket-list">
            {move || cards.get().into_iter().map(|card| {
                let id = card.id;
                view! {
                    <div class="ticket">
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                        {card.fields.into_iter().map(|(label, value)| view! {
                            <p><strong>{label} ":"</strong> " " {value}</p>
                        }).collect_view()}
                        <DeleteConfirmButton on_confirm=Callback::new(move |_| delete(id)) />
                        <StatusControl id=id status=card.status />
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
