//! 设备分配面板（旧分配流程）
//!
//! 与员工表单上的设备引用并行存在的另一条分配链路：
//! 走独立的 assign-device / assigned-devices 资源，
//! 设备选择器只展示当前快照中未分配的设备。

use crate::api;
use crate::session::use_session;
use crate::store::use_store;
use inventory_shared::AssignDeviceRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::form::SelectField;

#[component]
pub fn AssignDevicePage() -> impl IntoView {
    let session = use_session();
    let store = use_store();

    let selected_employee = RwSignal::new(String::new());
    let selected_device = RwSignal::new(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(api) = session.api() {
            store.refresh_employees(api.clone());
            store.refresh_devices(api.clone());
            store.refresh_assigned(api);
        }
    });

    let employee_options = Signal::derive(move || {
        store
            .employees
            .get()
            .iter()
            .map(|e| (e.id.to_string(), e.full_name()))
            .collect::<Vec<_>>()
    });

    // 可用设备池：只排除快照里已标记分配的设备，无事务保证
    let device_options = Signal::derive(move || {
        store
            .devices
            .get()
            .iter()
            .filter(|d| !d.assigned)
            .map(|d| (d.id.to_string(), d.model_name.clone()))
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let (employee, device) = (
            selected_employee.get_untracked(),
            selected_device.get_untracked(),
        );
        let (Ok(employee_id), Ok(device_id)) = (employee.parse::<u32>(), device.parse::<u32>())
        else {
            set_error_msg.set(Some("Please select both employee and device".to_string()));
            return;
        };

        let Some(api) = session.api() else { return };
        spawn_local(async move {
            let req = AssignDeviceRequest {
                employee_id,
                device_id,
            };
            match api::assign_device(&api, &req).await {
                Ok(()) => {
                    store.refresh_assigned(api.clone());
                    store.refresh_devices(api);
                    selected_employee.set(String::new());
                    selected_device.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error assigning device: {}", e).into());
                    set_error_msg.set(Some("Failed to assign device".to_string()));
                }
            }
        });
    };

    view! {
        <div class="container mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Assign Device"</h1>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <form on:submit=on_submit class="space-y-4">
                        <SelectField
                            label="Employee"
                            id="assign_employee"
                            placeholder="Select Employee"
                            options=employee_options
                            value=selected_employee
                        />
                        <SelectField
                            label="Device"
                            id="assign_device"
                            placeholder="Select Device"
                            options=device_options
                            value=selected_device
                        />
                        <Show when=move || error_msg.get().is_some()>
                            <p class="text-error">{move || error_msg.get().unwrap_or_default()}</p>
                        </Show>
                        <button type="submit" class="btn btn-primary">"Assign Device"</button>
                    </form>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Assigned Devices"</h2>
                    <ul class="space-y-4">
                        <For
                            each=move || store.assigned.get()
                            key=|assignment| assignment.id
                            children=move |assignment| {
                                view! {
                                    <li class="bg-base-200 p-4 rounded-lg shadow-sm">
                                        {assignment.employee.name.clone()}
                                        " - "
                                        {assignment.device.name.clone()}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </div>
    }
}
