use leptos::*;

use crate::{components::layout::LoadingSpinner, state::board::use_board};

use super::{repository::EmployeeCard, view_model::use_employee_cards};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let cards = use_employee_cards();

    view! {
        <div class="space-y-6">
            <h2 class="text-xl font-semibold text-fg">"Employees"</h2>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    cards.get().map(|result| match result {
                        Ok(cards) if cards.is_empty() => view! {
                            <p class="text-sm text-fg-muted">"No employees registered yet."</p>
                        }
                        .into_view(),
                        Ok(cards) => view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {cards
                                    .into_iter()
                                    .map(|card| view! { <EmployeeCardView card=card /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_view(),
                        Err(error) => view! {
                            <p class="text-sm text-status-error-text">{error.message}</p>
                        }
                        .into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn EmployeeCardView(card: EmployeeCard) -> impl IntoView {
    let board = use_board();
    let detail_href = format!("/employees/{}", card.id);
    let pin = {
        let card = card.clone();
        move |_| board.add(card.id, &card.full_name, card.photo_url.clone())
    };

    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-4 space-y-2">
            {card.photo_url.clone().map(|url| view! {
                <img src=url alt=card.full_name.clone() class="h-24 w-24 rounded-full object-cover" />
            })}
            <a href=detail_href class="block text-lg font-semibold text-fg hover:underline">
                {card.full_name.clone()}
            </a>
            <p class="text-sm text-fg-muted">{card.headline.clone()}</p>
            <p class="text-sm text-fg-muted">{format!("Email: {}", card.email)}</p>
            <button
                type="button"
                class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                on:click=pin
            >
                "Add to board"
            </button>
        </div>
    }
}
