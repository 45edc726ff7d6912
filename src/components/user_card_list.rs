//! User Card List Component

use leptos::prelude::*;

use crate::view_model::UserCard;

#[component]
pub fn UserCardList(cards: ReadSignal<Vec<UserCard>>) -> impl IntoView {
    view! {
        <div id="userList" class="user-list">
            {move || cards.get().into_iter().map(|card| view! {
                <div class="user">
                    {card.fields.into_iter().map(|(label, value)| view! {
                        <p><strong>{label} ":"</strong> " " {value}</p>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}
