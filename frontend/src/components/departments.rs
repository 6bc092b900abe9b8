//! 部门面板
//!
//! 单字段 CRUD；编辑模式把输入框原地换成编辑表单，更新走 PATCH。

use crate::api::DEPARTMENTS;
use crate::components::form::FieldError;
use crate::components::icons::{Pencil, Trash2};
use crate::session::use_session;
use crate::store::use_store;
use crate::validate::{self, FieldErrors};
use inventory_shared::NewDepartment;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let session = use_session();
    let store = use_store();

    let new_name = RwSignal::new(String::new());
    let edit_id = RwSignal::new(Option::<u32>::None);
    let edit_name = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    Effect::new(move |_| {
        if let Some(api) = session.api() {
            store.refresh_departments(api);
        }
    });

    let on_add = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let field_errors = validate::validate_department_name(&new_name.get_untracked());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        let Some(api) = session.api() else { return };
        let payload = NewDepartment {
            name: new_name.get_untracked(),
        };
        spawn_local(async move {
            match DEPARTMENTS.create(&api, &payload).await {
                Ok(_) => {
                    new_name.set(String::new());
                    store.refresh_departments(api);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error adding department: {}", e).into());
                }
            }
        });
    };

    let on_save_edit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let field_errors = validate::validate_department_name(&edit_name.get_untracked());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        let Some(id) = edit_id.get_untracked() else { return };
        let Some(api) = session.api() else { return };
        let payload = NewDepartment {
            name: edit_name.get_untracked(),
        };
        spawn_local(async move {
            match DEPARTMENTS.patch(&api, id, &payload).await {
                Ok(_) => {
                    edit_id.set(None);
                    edit_name.set(String::new());
                    store.refresh_departments(api);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error updating department: {}", e).into());
                }
            }
        });
    };

    let on_delete = move |id: u32| {
        let Some(api) = session.api() else { return };
        spawn_local(async move {
            match DEPARTMENTS.delete(&api, id).await {
                Ok(()) => store.refresh_departments(api),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting department: {}", e).into());
                }
            }
        });
    };

    let cancel_edit = move |_| {
        edit_id.set(None);
        edit_name.set(String::new());
        errors.set(FieldErrors::new());
    };

    let name_error = Signal::derive(move || errors.get().get("name"));

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <h1 class="card-title text-2xl">"Department Management"</h1>

                {move || if edit_id.get().is_none() {
                    view! {
                        <form on:submit=on_add class="flex items-start gap-2">
                            <div class="flex-1">
                                <input
                                    type="text"
                                    placeholder="New Department Name"
                                    on:input=move |ev| new_name.set(event_target_value(&ev))
                                    prop:value=new_name
                                    class="input input-bordered w-full"
                                />
                                <FieldError error=name_error />
                            </div>
                            <button type="submit" class="btn btn-primary">"Add Department"</button>
                        </form>
                    }
                    .into_any()
                } else {
                    view! {
                        <form on:submit=on_save_edit class="flex items-start gap-2">
                            <div class="flex-1">
                                <input
                                    type="text"
                                    placeholder="Edit Department Name"
                                    on:input=move |ev| edit_name.set(event_target_value(&ev))
                                    prop:value=edit_name
                                    class="input input-bordered w-full"
                                />
                                <FieldError error=name_error />
                            </div>
                            <button type="submit" class="btn btn-success">"Save Changes"</button>
                            <button type="button" on:click=cancel_edit class="btn btn-ghost">
                                "Cancel"
                            </button>
                        </form>
                    }
                    .into_any()
                }}

                <ul class="space-y-4">
                    <For
                        each=move || store.departments.get()
                        key=|department| department.id
                        children=move |department| {
                            let department_id = department.id;
                            let name = department.name.clone();
                            let name_for_edit = name.clone();
                            view! {
                                <li class="bg-base-200 p-4 rounded-lg shadow-sm flex justify-between items-center">
                                    <span>{name}</span>
                                    <div class="flex gap-4">
                                        <button
                                            on:click=move |_| {
                                                edit_id.set(Some(department_id));
                                                edit_name.set(name_for_edit.clone());
                                                errors.set(FieldErrors::new());
                                            }
                                            class="btn btn-warning btn-sm gap-2"
                                        >
                                            <Pencil attr:class="h-4 w-4" /> "Edit"
                                        </button>
                                        <button
                                            on:click=move |_| on_delete(department_id)
                                            class="btn btn-error btn-sm gap-2"
                                        >
                                            <Trash2 attr:class="h-4 w-4" /> "Delete"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
