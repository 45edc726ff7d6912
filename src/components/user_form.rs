//! User Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::UserDraft;

#[component]
pub fn UserForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(UserDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();
        let current = draft.get();
        spawn_local(async move {
            let _ = client.create_user(&current, move || draft.update(UserDraft::clear)).await;
        });
    };

    view! {
        <form id="userForm" class="user-form" on:submit=on_submit>
            <input
                id="username"
                type="text"
                placeholder="Username"
                prop:value=move || draft.with(|d| d.username.clone())
                on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
            />
            <input
                id="email"
                type="email"
                placeholder="Email"
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
            />
            <button type="submit">"Create User"</button>
        </form>
    }
}
