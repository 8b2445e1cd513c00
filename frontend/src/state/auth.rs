use crate::api::{ApiClient, ApiError, SessionUser};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    // One check-auth round trip on mount decides the initial state; the route
    // guard shows a spinner until `loading` clears.
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let set_auth_for_check = set_auth_state;
    spawn_local(async move {
        refresh_auth(&api_client, set_auth_for_check).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Re-asks the gateway who we are and folds the answer into the auth state.
pub async fn refresh_auth(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match api_client.check_auth().await {
        Ok(response) if response.is_authenticated => set_auth_state.update(|state| {
            state.user = Some(response.user);
            state.is_authenticated = true;
            state.loading = false;
        }),
        other => {
            if let Err(e) = other {
                log::debug!("check-auth rejected: {}", e);
            }
            set_auth_state.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            })
        }
    }
}

/// Ends the gateway session. Local state is cleared even when the request
/// fails; a dead cookie on the server is harmless, a stale client state is
/// not.
pub async fn logout(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api_client.logout().await.map(|_| ());

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}
