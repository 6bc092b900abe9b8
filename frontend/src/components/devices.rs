//! 设备面板
//!
//! 新增表单 + 行内编辑表单 + 列表，另带一个设备类型迷你 CRUD 模态框。
//! 迷你 CRUD 与独立的设备类型面板共用同一个端点描述子与表单构件。

use crate::api::{DEVICE_TYPES, DEVICES};
use crate::components::form::{Modal, SelectField, TextField};
use crate::components::icons::{Pencil, Plus, Trash2};
use crate::session::use_session;
use crate::store::use_store;
use crate::validate::{self, FieldErrors};
use chrono::NaiveDate;
use inventory_shared::{Device, NewDevice, NewDeviceType, rules};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 设备表单状态（新增与编辑各持一份）
#[derive(Clone, Copy)]
struct DeviceFormState {
    model_name: RwSignal<String>,
    serial_number: RwSignal<String>,
    device_type: RwSignal<String>,
    purchase_date: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
}

impl DeviceFormState {
    fn new() -> Self {
        Self {
            model_name: RwSignal::new(String::new()),
            serial_number: RwSignal::new(String::new()),
            device_type: RwSignal::new(String::new()),
            purchase_date: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    fn reset(&self) {
        self.model_name.set(String::new());
        self.serial_number.set(String::new());
        self.device_type.set(String::new());
        self.purchase_date.set(String::new());
        self.errors.set(FieldErrors::new());
    }

    /// 把选中行的字段拷贝进编辑状态
    fn load(&self, device: &Device) {
        self.model_name.set(device.model_name.clone());
        self.serial_number.set(device.serial_number.clone());
        self.device_type
            .set(device.device_type.map(|id| id.to_string()).unwrap_or_default());
        self.purchase_date
            .set(device.purchase_date.format("%Y-%m-%d").to_string());
        self.errors.set(FieldErrors::new());
    }

    fn validate(&self) -> FieldErrors {
        validate::validate_device_form(
            &self.model_name.get_untracked(),
            &self.serial_number.get_untracked(),
            &self.device_type.get_untracked(),
            &self.purchase_date.get_untracked(),
        )
    }

    fn to_payload(&self) -> Option<NewDevice> {
        Some(NewDevice {
            model_name: self.model_name.get_untracked(),
            serial_number: self.serial_number.get_untracked(),
            device_type: self.device_type.get_untracked().parse().ok()?,
            purchase_date: NaiveDate::parse_from_str(
                &self.purchase_date.get_untracked(),
                "%Y-%m-%d",
            )
            .ok()?,
        })
    }

    fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.get().get(field))
    }
}

#[component]
fn DeviceFormFields(form: DeviceFormState, id_prefix: &'static str) -> impl IntoView {
    let store = use_store();
    let type_options = Signal::derive(move || {
        store
            .device_types
            .get()
            .iter()
            .map(|t| (t.id.to_string(), t.name.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <TextField
                label="Model Name"
                id=format!("{}model_name", id_prefix)
                placeholder="Model Name"
                value=form.model_name
                error=form.field_error("model_name")
            />
            <TextField
                label="Serial Number"
                id=format!("{}serial_number", id_prefix)
                placeholder="Serial Number"
                value=form.serial_number
                error=form.field_error("serial_number")
            />
            <SelectField
                label="Device Type"
                id=format!("{}device_type", id_prefix)
                placeholder="Select Device Type"
                options=type_options
                value=form.device_type
                error=form.field_error("device_type")
            />
            <TextField
                label="Purchase Date"
                id=format!("{}purchase_date", id_prefix)
                input_type="date"
                value=form.purchase_date
                error=form.field_error("purchase_date")
            />
        </div>
    }
}

#[component]
pub fn DevicesPage() -> impl IntoView {
    let session = use_session();
    let store = use_store();

    let add_form = DeviceFormState::new();
    let edit_form = DeviceFormState::new();
    let edit_id = RwSignal::new(Option::<u32>::None);

    // 设备类型迷你 CRUD 的模态状态
    let modal_open = RwSignal::new(false);
    let type_name = RwSignal::new(String::new());
    let editing_type = RwSignal::new(Option::<u32>::None);
    let modal_errors = RwSignal::new(FieldErrors::new());

    // 挂载时拉取主列表与类型选择器数据
    Effect::new(move |_| {
        if let Some(api) = session.api() {
            store.refresh_devices(api.clone());
            store.refresh_device_types(api);
        }
    });

    let on_add = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let errors = add_form.validate();
        if !errors.is_empty() {
            add_form.errors.set(errors);
            return;
        }
        add_form.errors.set(FieldErrors::new());
        let (Some(payload), Some(api)) = (add_form.to_payload(), session.api()) else {
            return;
        };
        spawn_local(async move {
            match DEVICES.create(&api, &payload).await {
                Ok(_) => {
                    store.refresh_devices(api);
                    add_form.reset();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error adding device: {}", e).into());
                }
            }
        });
    };

    let on_edit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let errors = edit_form.validate();
        if !errors.is_empty() {
            edit_form.errors.set(errors);
            return;
        }
        edit_form.errors.set(FieldErrors::new());
        let Some(id) = edit_id.get_untracked() else {
            return;
        };
        let (Some(payload), Some(api)) = (edit_form.to_payload(), session.api()) else {
            return;
        };
        spawn_local(async move {
            match DEVICES.update(&api, id, &payload).await {
                Ok(_) => {
                    store.refresh_devices(api);
                    edit_id.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error editing device: {}", e).into());
                }
            }
        });
    };

    let on_delete = move |id: u32| {
        let Some(api) = session.api() else { return };
        spawn_local(async move {
            match DEVICES.delete(&api, id).await {
                Ok(()) => store.refresh_devices(api),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting device: {}", e).into());
                }
            }
        });
    };

    // ---- 设备类型迷你 CRUD ----

    let open_type_modal = move |_| {
        type_name.set(String::new());
        editing_type.set(None);
        modal_errors.set(FieldErrors::new());
        modal_open.set(true);
    };

    let on_save_type = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let errors = validate::validate_device_type_name(&type_name.get_untracked());
        if !errors.is_empty() {
            modal_errors.set(errors);
            return;
        }
        modal_errors.set(FieldErrors::new());
        let Some(api) = session.api() else { return };
        let payload = NewDeviceType {
            name: type_name.get_untracked(),
        };
        spawn_local(async move {
            let result = match editing_type.get_untracked() {
                Some(id) => DEVICE_TYPES.update(&api, id, &payload).await,
                None => DEVICE_TYPES.create(&api, &payload).await,
            };
            match result {
                Ok(_) => {
                    store.refresh_device_types(api);
                    type_name.set(String::new());
                    editing_type.set(None);
                    modal_open.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving device type: {}", e).into());
                }
            }
        });
    };

    let on_delete_type = move |id: u32| {
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
        if editing_type.get().is_some() {
            "Edit Device Type".to_string()
        } else {
            "Add Device Type".to_string()
        }
    });

    view! {
        <div class="container mx-auto space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">"Device Management"</h1>
                <button on:click=open_type_modal class="btn btn-primary btn-sm gap-2">
                    <Plus attr:class="h-4 w-4" /> "Manage Device Types"
                </button>
            </div>

            // 新增设备
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Add Device"</h2>
                    <form on:submit=on_add class="space-y-4">
                        <DeviceFormFields form=add_form id_prefix="" />
                        <div class="flex justify-end">
                            <button type="submit" class="btn btn-success">"Add Device"</button>
                        </div>
                    </form>
                </div>
            </div>

            // 编辑设备（选中某行后出现）
            <Show when=move || edit_id.get().is_some()>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">"Edit Device"</h2>
                        <form on:submit=on_edit class="space-y-4">
                            <DeviceFormFields form=edit_form id_prefix="edit_" />
                            <div class="flex justify-end gap-4">
                                <button type="submit" class="btn btn-warning">"Save Changes"</button>
                                <button
                                    type="button"
                                    on:click=move |_| edit_id.set(None)
                                    class="btn btn-ghost"
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>

            // 设备列表
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Devices"</h2>
                    <ul class="space-y-4">
                        <For
                            each=move || store.devices.get()
                            key=|device| device.id
                            children=move |device| {
                                let type_label = {
                                    let type_id = device.device_type;
                                    move || {
                                        store
                                            .device_types
                                            .with(|types| rules::device_type_name(types, type_id))
                                    }
                                };
                                let edit_device = device.clone();
                                let device_id = device.id;
                                view! {
                                    <li class="bg-base-200 p-4 rounded-lg shadow-sm flex justify-between items-center">
                                        <div>
                                            <h3 class="text-xl font-bold">{device.model_name.clone()}</h3>
                                            <p>"Serial Number: " {device.serial_number.clone()}</p>
                                            <p>"Device Type: " {type_label}</p>
                                            <p>"Purchase Date: " {device.purchase_date.format("%Y-%m-%d").to_string()}</p>
                                            <p>"Status: " {device.status.clone()}</p>
                                        </div>
                                        <div class="flex gap-4">
                                            <button
                                                on:click=move |_| {
                                                    edit_form.load(&edit_device);
                                                    edit_id.set(Some(edit_device.id));
                                                }
                                                class="btn btn-warning btn-sm gap-2"
                                            >
                                                <Pencil attr:class="h-4 w-4" /> "Edit"
                                            </button>
                                            <button
                                                on:click=move |_| on_delete(device_id)
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

            // 设备类型迷你 CRUD 模态框
            <Modal open=modal_open title=modal_title>
                <form on:submit=on_save_type class="space-y-4 mt-2">
                    <TextField
                        label="Device Type Name"
                        id="device_type_name"
                        placeholder="Device Type Name"
                        value=type_name
                        error=Signal::derive(move || modal_errors.get().get("name"))
                    />
                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| modal_open.set(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if editing_type.get().is_some() { "Save Changes" } else { "Add Device Type" }}
                        </button>
                    </div>
                </form>

                <ul class="mt-4 space-y-2">
                    <For
                        each=move || store.device_types.get()
                        key=|t| t.id
                        children=move |device_type| {
                            let type_id = device_type.id;
                            let name = device_type.name.clone();
                            let edit_name = name.clone();
                            view! {
                                <li class="bg-base-200 p-2 rounded flex justify-between items-center">
                                    <span>{name}</span>
                                    <div class="flex gap-2">
                                        <button
                                            on:click=move |_| {
                                                editing_type.set(Some(type_id));
                                                type_name.set(edit_name.clone());
                                                modal_errors.set(FieldErrors::new());
                                            }
                                            class="btn btn-ghost btn-xs"
                                        >
                                            <Pencil attr:class="h-4 w-4" />
                                        </button>
                                        <button
                                            on:click=move |_| on_delete_type(type_id)
                                            class="btn btn-ghost btn-xs text-error"
                                        >
                                            <Trash2 attr:class="h-4 w-4" />
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Modal>
        </div>
    }
}
