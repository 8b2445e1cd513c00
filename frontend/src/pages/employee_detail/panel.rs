use leptos::*;
use leptos_router::{use_navigate, use_params_map};
use web_sys::HtmlInputElement;

use crate::{
    api::{ApiClient, ApiError, PhotoUpload},
    components::{
        confirm_dialog::ConfirmDialog, error::InlineErrorMessage, layout::LoadingSpinner,
    },
    utils::{file as file_utils, photos::normalize_photo_url},
};

use super::{
    repository::{self, department_option_disabled, EmployeeDraft},
    view_model::{use_detail, DetailData},
};

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|value| value.parse::<i64>().ok()))
    });
    let detail = use_detail(id);

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner /> }>
            {move || {
                detail.get().map(|result| match result {
                    Ok(data) => {
                        let id = data.employee.employee_id;
                        view! { <DetailForm data=data employee_id=id /> }.into_view()
                    }
                    Err(error) => view! {
                        <p class="text-sm text-status-error-text">{error.message}</p>
                    }
                    .into_view(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn DetailForm(data: DetailData, employee_id: i64) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let error = create_rw_signal(None::<ApiError>);

    let draft = create_rw_signal(EmployeeDraft::from_record(&data.employee));
    // The department the server currently has on file. Full departments stay
    // selectable while they are this one.
    let saved_department_id = create_rw_signal(data.employee.department_id);
    let photo = create_rw_signal(None::<PhotoUpload>);

    let departments = store_value(data.departments);
    let hr_origin = store_value(data.hr_origin);

    let photo_preview = move || {
        draft.with(|d| {
            d.photograph_path
                .as_deref()
                .and_then(|path| hr_origin.with_value(|origin| normalize_photo_url(path, origin)))
        })
    };

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

    let on_department_change = move |ev: leptos::ev::Event| {
        if let Ok(department_id) = event_target_value(&ev).parse::<i64>() {
            departments
                .with_value(|depts| draft.update(|d| d.change_department(depts, department_id)));
        }
    };

    let save_action = {
        let api = api.clone();
        create_action(move |_: &()| {
            let api = api.clone();
            let current = draft.get_untracked();
            let upload = photo.get_untracked();
            async move { repository::save_employee(&api, employee_id, &current, upload).await }
        })
    };
    let save_pending = save_action.pending();
    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(stored) => {
                    draft.update(|d| d.apply_record(&stored));
                    saved_department_id.set(stored.department_id);
                    photo.set(None);
                    error.set(None);
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Employee updated successfully");
                    }
                }
                Err(e) => error.set(Some(e)),
            }
        }
    });

    let confirm_delete_open = create_rw_signal(false);
    let delete_action = {
        let api = api.clone();
        create_action(move |_: &()| {
            let api = api.clone();
            async move { repository::delete_employee(&api, employee_id).await }
        })
    };
    {
        let navigate = use_navigate();
        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(()) => navigate("/employees", Default::default()),
                    Err(e) => {
                        confirm_delete_open.set(false);
                        error.set(Some(e));
                    }
                }
            }
        });
    }

    let field = |label: &'static str,
                 get: fn(&EmployeeDraft) -> String,
                 set: fn(&mut EmployeeDraft, String)| {
        view! {
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">{label}</span>
                <input
                    type="text"
                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    prop:value=move || draft.with(get)
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="max-w-2xl space-y-6">
            <h2 class="text-xl font-semibold text-fg">"Employee details"</h2>
            <InlineErrorMessage error=error />
            {move || photo_preview().map(|url| view! {
                <img src=url alt="Employee photograph" class="h-32 w-32 rounded-full object-cover" />
            })}
            <form class="space-y-4" on:submit=move |ev| {
                ev.prevent_default();
                save_action.dispatch(());
            }>
                {field("First name", |d| d.first_name.clone(), |d, v| d.first_name = v)}
                {field("Last name", |d| d.last_name.clone(), |d, v| d.last_name = v)}
                {field("Email", |d| d.email.clone(), |d, v| d.email = v)}
                {field("Job title", |d| d.title.clone(), |d, v| d.title = v)}
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Department"</span>
                    <select
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        prop:value=move || draft.with(|d| d.department_id.to_string())
                        on:change=on_department_change
                    >
                        {departments.with_value(|depts| {
                            depts
                                .iter()
                                .map(|dept| {
                                    let value = dept.department_id.to_string();
                                    let label = format!(
                                        "{} ({} seats left)",
                                        dept.name, dept.seats_left
                                    );
                                    let initially_selected = dept.department_id
                                        == draft.get_untracked().department_id;
                                    let dept = dept.clone();
                                    view! {
                                        <option
                                            value=value
                                            disabled=move || department_option_disabled(
                                                &dept,
                                                saved_department_id.get(),
                                            )
                                            selected=initially_selected
                                        >
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        })}
                    </select>
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Photograph"</span>
                    <input type="file" accept="image/*" on:change=on_photo_change />
                </label>
                <div class="flex gap-3">
                    <button
                        type="submit"
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || save_pending.get()
                    >
                        "Save changes"
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                        on:click=move |_| confirm_delete_open.set(true)
                    >
                        "Delete employee"
                    </button>
                </div>
            </form>
            <ConfirmDialog
                is_open=confirm_delete_open.into()
                title="Delete employee"
                message="Are you sure you want to delete this employee?"
                destructive=true
                on_confirm=Callback::new(move |_| delete_action.dispatch(()))
                on_cancel=Callback::new(move |_| confirm_delete_open.set(false))
            />
        </div>
    }
}
