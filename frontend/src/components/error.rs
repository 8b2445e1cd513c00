use crate::api::ApiError;
use leptos::*;

/// Dismissible error banner. The owning page hands over the signal so it can
/// also clear the error itself, e.g. before retrying a request.
#[component]
pub fn InlineErrorMessage(error: RwSignal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="flex items-start justify-between gap-3 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| e.message).unwrap_or_default()}
                </div>
                <button
                    type="button"
                    aria-label="Dismiss"
                    class="text-status-error-text hover:opacity-75"
                    on:click=move |_| error.set(None)
                >
                    {"✕"}
                </button>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::new("Failed to load employee data")));
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(html.contains("Failed to load employee data"));
        assert!(html.contains("aria-label=\"Dismiss\""));
    }

    #[test]
    fn inline_error_renders_nothing_without_an_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(!html.contains("Dismiss"));
    }
}
