//! 设备类型面板
//!
//! 独立的设备类型 CRUD；与设备面板内嵌的迷你 CRUD 共用
//! 同一个端点描述子与校验器。

use crate::api::DEVICE_TYPES;
use crate::components::form::{Modal, TextField};
use crate::components::icons::{Pencil, Plus, Trash2};
use crate::session::use_session;
use crate::store::use_store;
use crate::validate::{self, FieldErrors};
use inventory_shared::NewDeviceType;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DeviceTypesPage() -> impl IntoView {
    let session = use_session();
    let store = use_store();

    let modal_open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let editing = RwSignal::new(Option::<u32>::None);
    let errors = RwSignal::new(FieldErrors::new());

    Effect::new(move |_| {
        if let Some(api) = session.api() {
            store.refresh_device_types(api);
        }
    });

    let open_add_modal = move |_| {
        name.set(String::new());
        editing.set(None);
        errors.set(FieldErrors::new());
        modal_open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let field_errors = validate::validate_device_type_name(&name.get_untracked());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        let Some(api) = session.api() else { return };
        let payload = NewDeviceType {
            name: name.get_untracked(),
        };
        spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(id) => DEVICE_TYPES.update(&api, id, &payload).await,
                None => DEVICE_TYPES.create(&api, &payload).await,
            };
            match result {
                Ok(_) => {
                    store.refresh_device_types(api);
                    name.set(String::new());
                    editing.set(None);
                    modal_open.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving device type: {}", e).into());
                }
            }
        });
    };

    let on_delete = move |id: u32| {
        let Some(api) = session.api() else { return };
        spawn_local(async move {
            match DEVICE_TYPES.delete(&api, id).await {
                Ok(()) => store.refresh_device_types(api),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting device type: {}", e).into());
                }
            }
        });
    };

    let modal_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Device Type".to_string()
        } else {
            "Add Device Type".to_string()
        }
    });

    view! {
        <div class="container mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-center">"Device Type Management"</h1>

            <div class="flex justify-end">
                <button on:click=open_add_modal class="btn btn-primary gap-2">
                    <Plus attr:class="h-4 w-4" /> "Add Device Type"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Device Types"</h2>
                    <ul class="space-y-4">
                        <For
                            each=move || store.device_types.get()
                            key=|t| t.id
                            children=move |device_type| {
                                let type_id = device_type.id;
                                let type_name = device_type.name.clone();
                                let name_for_edit = type_name.clone();
                                view! {
                                    <li class="bg-base-200 p-4 rounded-lg shadow-sm flex justify-between items-center">
                                        <span>{type_name}</span>
                                        <div class="flex gap-4">
                                            <button
                                                on:click=move |_| {
                                                    editing.set(Some(type_id));
                                                    name.set(name_for_edit.clone());
                                                    errors.set(FieldErrors::new());
                                                    modal_open.set(true);
                                                }
                                                class="btn btn-warning btn-sm gap-2"
                                            >
                                                <Pencil attr:class="h-4 w-4" /> "Edit"
                                            </button>
                                            <button
                                                on:click=move |_| on_delete(type_id)
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

            <Modal open=modal_open title=modal_title>
                <form on:submit=on_submit class="space-y-4 mt-2">
                    <TextField
                        label="Device Type Name"
                        id="name"
                        placeholder="Device Type Name"
                        value=name
                        error=Signal::derive(move || errors.get().get("name"))
                    />
                    <div class="modal-action">
                        <button
                            type="button"
                            on:click=move |_| modal_open.set(false)
                            class="btn btn-ghost"
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if editing.get().is_some() { "Update Device Type" } else { "Add Device Type" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
