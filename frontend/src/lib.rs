use leptos::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use api::ApiClient;
use pages::{
    board::BoardPage, employee_detail::EmployeeDetailPage, employees::EmployeesPage,
    login::LoginPage, register::RegisterPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::new());
    state::board::provide_board();
    view! {
        <state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/employees" view=ProtectedEmployees/>
                    <Route path="/employees/new" view=ProtectedRegister/>
                    <Route path="/employees/:id" view=ProtectedEmployeeDetail/>
                    <Route path="/board" view=ProtectedBoard/>
                    <Route path="/*any" view=|| view! { <Redirect path="/employees"/> }/>
                </Routes>
            </Router>
        </state::auth::AuthProvider>
    }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! {
        <components::guard::RequireAuth>
            <components::layout::AppLayout>
                <EmployeesPage/>
            </components::layout::AppLayout>
        </components::guard::RequireAuth>
    }
}

#[component]
fn ProtectedEmployeeDetail() -> impl IntoView {
    view! {
        <components::guard::RequireAuth>
            <components::layout::AppLayout>
                <EmployeeDetailPage/>
            </components::layout::AppLayout>
        </components::guard::RequireAuth>
    }
}

#[component]
fn ProtectedRegister() -> impl IntoView {
    view! {
        <components::guard::RequireAuth>
            <components::layout::AppLayout>
                <RegisterPage/>
            </components::layout::AppLayout>
        </components::guard::RequireAuth>
    }
}

#[component]
fn ProtectedBoard() -> impl IntoView {
    view! {
        <components::guard::RequireAuth>
            <components::layout::AppLayout>
                <BoardPage/>
            </components::layout::AppLayout>
        </components::guard::RequireAuth>
    }
}

/// Loads runtime config, then mounts the application. Browser-only.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting HR portal frontend");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(App);
    });
}
