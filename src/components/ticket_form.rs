//! Ticket Form Component
//!
//! Creates a ticket from title, description and user id fields.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::TicketDraft;

#[component]
pub fn TicketForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(TicketDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();
        let current = draft.get();
        spawn_local(async move {
            // Fields keep their values when the request fails
            let _ = client.create_ticket(&current, move || draft.update(TicketDraft::clear)).await;
        });
    };

    view! {
        <form id="ticketForm" class="ticket-form" on:submit=on_submit>
            <input
                id="title"
                type="text"
                placeholder="Title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
            <textarea
                id="description"
                placeholder="Description"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
            <input
                id="userId"
                type="number"
                placeholder="User ID"
                prop:value=move || draft.with(|d| d.user_id.clone())
                on:input=move |ev| draft.update(|d| d.user_id = event_target_value(&ev))
            />
            <button type="submit">"Create Ticket"</button>
        </form>
    }
}
