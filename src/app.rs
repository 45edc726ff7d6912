//! Helpdesk Frontend App
//!
//! Wires the view-target signals to the sync client and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::components::{TicketCardList, TicketForm, TicketTable, UserCardList, UserForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify::BrowserAlert;
use crate::sync::{SyncClient, ViewTargets};
use crate::view_model::{TicketCard, TicketRow, UserCard, ViewTarget};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // View targets
    let (ticket_cards, set_ticket_cards) = signal(Vec::<TicketCard>::new());
    let (ticket_rows, set_ticket_rows) = signal(Vec::<TicketRow>::new());
    let (user_cards, set_user_cards) = signal(Vec::<UserCard>::new());

    let targets = ViewTargets {
        ticket_cards: Box::new(set_ticket_cards),
        ticket_table: config
            .ticket_table
            .then(|| Box::new(set_ticket_rows) as Box<dyn ViewTarget<TicketRow>>),
        user_cards: Box::new(set_user_cards),
    };

    log::info!("using ticket service at {}", config.api_url);
    let client = SyncClient::new(Rc::new(HttpApi::new(config.api_url.clone())), BrowserAlert, targets);
    let ctx = AppContext::new(client, config.ticket_table);
    provide_context(ctx);

    // Initial load: three independent fetches, no ordering between them
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.list_ticket_cards().await;
        });
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.list_user_cards().await;
        });
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.list_ticket_table().await;
        });
    });

    view! {
        <main class="helpdesk">
            <h1>"Helpdesk"</h1>

            <section class="tickets">
                <h2>"Tickets"</h2>
                <TicketForm />
                <TicketCardList cards=ticket_cards />
                <Show when=move || ctx.ticket_table>
                    <TicketTable rows=ticket_rows />
                </Show>
            </section>

            <section class="users">
                <h2>"Users"</h2>
                <UserForm />
                <UserCardList cards=user_cards />
            </section>
        </main>
    }
}
