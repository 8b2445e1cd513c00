use std::rc::Rc;

use leptos::*;
use leptos_router::use_navigate;

use crate::{
    api::{ApiClient, ApiError},
    components::error::InlineErrorMessage,
    config,
    state::auth::use_auth,
};

use super::{gsi, view_model};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let error = create_rw_signal(None::<ApiError>);

    // Already signed in: skip straight to the employee list.
    {
        let navigate = use_navigate();
        create_effect(move |_| {
            let state = auth.get();
            if !state.loading && state.is_authenticated {
                navigate("/employees", Default::default());
            }
        });
    }

    let login_action = create_action(move |credential: &String| {
        let credential = credential.clone();
        let api = api.clone();
        async move { view_model::sign_in(&api, &credential, &config::hr_marker(), set_auth).await }
    });
    let login_pending = login_action.pending();

    {
        let navigate = use_navigate();
        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(()) => navigate("/employees", Default::default()),
                    Err(e) => error.set(Some(e)),
                }
            }
        });
    }

    create_effect(move |_| {
        gsi::mount_google_button(
            "google-signin",
            Rc::new(move |credential: String| {
                error.set(None);
                login_action.dispatch(credential);
            }),
        );
    });

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center p-4">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-8 space-y-6">
                <div class="space-y-2 text-center">
                    <h1 class="text-2xl font-semibold text-fg">"HR Administration Portal"</h1>
                    <p class="text-sm text-fg-muted">"Sign in with your corporate Google account"</p>
                </div>
                <InlineErrorMessage error=error />
                <div id="google-signin" class="flex justify-center"></div>
                <Show when=move || login_pending.get()>
                    <p class="text-center text-sm text-fg-muted">"Signing in..."</p>
                </Show>
            </div>
        </div>
    }
}
