use crate::state::{auth, board::use_board};
use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Shell around every authenticated page: title bar, navigation, the board
/// pin counter and the logout button.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let board = use_board();
    let board_count = move || board.total_count();

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <h1 class="text-xl font-semibold text-fg">"HR Administration Portal"</h1>
                        <nav class="flex items-center space-x-4">
                            <a href="/employees" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Employees"
                            </a>
                            <a href="/employees/new" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Register"
                            </a>
                            <a href="/board" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Board"
                                <Show when=move || { board_count() > 0 }>
                                    <span class="ml-1 inline-flex items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text text-xs px-2 py-0.5">
                                        {board_count}
                                    </span>
                                </Show>
                            </a>
                            <button
                                type="button"
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                disabled=move || logout_pending.get()
                                on:click=on_logout
                            >
                                "Logout"
                            </button>
                        </nav>
                    </div>
                </div>
            </header>
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">{children()}</main>
        </div>
    }
}
