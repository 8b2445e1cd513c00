use leptos::*;
use leptos_router::use_navigate;
use web_sys::HtmlInputElement;

use crate::{
    api::{ApiClient, ApiError, DepartmentSeats, PhotoUpload},
    components::{error::InlineErrorMessage, forms::TextField, layout::LoadingSpinner},
    pages::employee_detail::repository::fetch_departments,
    utils::file as file_utils,
};

use super::{utils::RegisterForm, view_model};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let departments = {
        let api = api.clone();
        create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { fetch_departments(&api).await }
            },
        )
    };

    view! {
        <div class="max-w-2xl space-y-6">
            <h2 class="text-xl font-semibold text-fg">"Register employee"</h2>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    departments.get().map(|result| match result {
                        Ok(departments) => {
                            view! { <RegisterFormView departments=departments /> }.into_view()
                        }
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
fn RegisterFormView(departments: Vec<DepartmentSeats>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let error = create_rw_signal(None::<ApiError>);

    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let title = create_rw_signal(String::new());
    let department_id = create_rw_signal(None::<i64>);
    let photo = create_rw_signal(None::<PhotoUpload>);

    let departments = store_value(departments);

    let on_photo_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = file_utils::selected_file(&input) else {
            photo.set(None);
            return;
        };
        spawn_local(async move {
            match file_utils::read_photo(file).await {
                Ok(upload) => photo.set(Some(upload)),
                Err(message) => error.set(Some(ApiError::new(message))),
            }
        });
    };

    let submit_action = create_action(move |_: &()| {
        let api = api.clone();
        let form = RegisterForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            title: title.get_untracked(),
            department_id: department_id.get_untracked(),
        };
        let upload = photo.get_untracked();
        let depts = departments.get_value();
        async move { view_model::submit(&api, &form, &depts, upload).await }
    });
    let submit_pending = submit_action.pending();

    {
        let navigate = use_navigate();
        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(_) => {
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message("Employee registered successfully!");
                        }
                        navigate("/employees", Default::default());
                    }
                    Err(e) => error.set(Some(e)),
                }
            }
        });
    }

    view! {
        <form class="space-y-4" on:submit=move |ev| {
            ev.prevent_default();
            error.set(None);
            submit_action.dispatch(());
        }>
            <InlineErrorMessage error=error />
            <TextField label="First name" value=first_name />
            <TextField label="Last name" value=last_name />
            <TextField label="Email" value=email input_type="email" />
            <TextField label="Job title" value=title />
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Department"</span>
                <select
                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    on:change=move |ev| {
                        department_id.set(event_target_value(&ev).parse::<i64>().ok());
                    }
                >
                    <option value="" selected disabled>"Select a department"</option>
                    {departments.with_value(|depts| {
                        depts
                            .iter()
                            .map(|dept| {
                                let value = dept.department_id.to_string();
                                let label = format!("{} ({} seats left)", dept.name, dept.seats_left);
                                let full = dept.seats_left <= 0;
                                view! { <option value=value disabled=full>{label}</option> }
                            })
                            .collect_view()
                    })}
                </select>
            </label>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Photograph"</span>
                <input type="file" accept="image/*" on:change=on_photo_change />
            </label>
            <button
                type="submit"
                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || submit_pending.get()
            >
                "Register"
            </button>
        </form>
    }
}
