use leptos::*;

use crate::state::board::{use_board, BoardItem};

/// The selection board: every employee pinned from the directory, with a
/// per-row count. Lives only in memory for the current session.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = use_board();
    let items = board.items();
    let is_empty = move || items.with(|i| i.is_empty());

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-fg">"Selection board"</h2>
                <Show when=move || !is_empty()>
                    <button
                        type="button"
                        class="text-sm font-medium text-fg-muted hover:text-fg"
                        on:click=move |_| board.clear()
                    >
                        "Clear board"
                    </button>
                </Show>
            </div>
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <p class="text-sm text-fg-muted">"No employees pinned yet. Add them from the directory."</p>
                }
            >
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="border-b border-border text-fg-muted">
                            <th class="py-2 pr-4">"Employee"</th>
                            <th class="py-2 pr-4">"Count"</th>
                            <th class="py-2"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|item| item.employee_id
                            children=move |item: BoardItem| {
                                let id = item.employee_id;
                                view! {
                                    <tr class="border-b border-border">
                                        <td class="py-2 pr-4">
                                            <div class="flex items-center gap-3">
                                                {item.photo_url.clone().map(|url| view! {
                                                    <img src=url alt=item.full_name.clone() class="h-8 w-8 rounded-full object-cover" />
                                                })}
                                                <span class="font-medium text-fg">{item.full_name.clone()}</span>
                                            </div>
                                        </td>
                                        <td class="py-2 pr-4">
                                            <div class="inline-flex items-center gap-2">
                                                <button
                                                    type="button"
                                                    class="rounded border border-border px-2"
                                                    on:click=move |_| board.decrement(id)
                                                >
                                                    "-"
                                                </button>
                                                <span>{item.quantity}</span>
                                                <button
                                                    type="button"
                                                    class="rounded border border-border px-2"
                                                    on:click=move |_| board.increment(id)
                                                >
                                                    "+"
                                                </button>
                                            </div>
                                        </td>
                                        <td class="py-2 text-right">
                                            <button
                                                type="button"
                                                class="text-sm text-status-error-text hover:underline"
                                                on:click=move |_| board.remove(id)
                                            >
                                                "Remove"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <p class="text-sm text-fg-muted">
                    {move || format!("Total pinned: {}", board.total_count())}
                </p>
            </Show>
        </div>
    }
}
