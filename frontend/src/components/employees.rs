//! 员工面板
//!
//! 模态框承载新增/编辑表单；除必填检查外，还做设备双重分配的
//! 客户端检查（对编辑者本来持有的设备豁免）。该检查只覆盖当前
//! 快照，见 `inventory_shared::rules` 的说明。

use crate::api::EMPLOYEES;
use crate::components::form::{Modal, SelectField, TextField};
use crate::components::icons::{Pencil, Plus, Trash2};
use crate::session::use_session;
use crate::store::use_store;
use crate::validate::{self, FieldErrors};
use inventory_shared::{DeviceAssignment, Employee, EmployeePayload, rules};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
struct EmployeeFormState {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<String>,
    position: RwSignal<String>,
    device_id: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
}

impl EmployeeFormState {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            department: RwSignal::new(String::new()),
            position: RwSignal::new(String::new()),
            device_id: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    fn reset(&self) {
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
        self.position.set(String::new());
        self.device_id.set(String::new());
        self.errors.set(FieldErrors::new());
    }

    fn load(&self, employee: &Employee) {
        self.first_name.set(employee.first_name.clone());
        self.last_name.set(employee.last_name.clone());
        self.email.set(employee.email.clone());
        self.department
            .set(employee.department.map(|id| id.to_string()).unwrap_or_default());
        self.position.set(employee.position.clone());
        self.device_id.set(
            employee
                .held_device_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.errors.set(FieldErrors::new());
    }

    fn validate(&self, employees: &[Employee], editing: Option<u32>) -> FieldErrors {
        validate::validate_employee_form(
            &self.first_name.get_untracked(),
            &self.last_name.get_untracked(),
            &self.email.get_untracked(),
            &self.department.get_untracked(),
            &self.position.get_untracked(),
            &self.device_id.get_untracked(),
            employees,
            editing,
        )
    }

    fn to_payload(&self) -> Option<EmployeePayload> {
        Some(EmployeePayload {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked().parse().ok()?,
            position: self.position.get_untracked(),
            device: self.device_id.get_untracked().parse().ok()?,
        })
    }

    fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.get().get(field))
    }
}

fn format_date(assignment: &Option<DeviceAssignment>, return_date: bool) -> String {
    let date = assignment.as_ref().and_then(|a| {
        if return_date {
            a.return_date
        } else {
            Some(a.assignment_date)
        }
    });
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let session = use_session();
    let store = use_store();

    let form = EmployeeFormState::new();
    let modal_open = RwSignal::new(false);
    // None = 新增，Some(id) = 编辑中的员工
    let editing = RwSignal::new(Option::<u32>::None);

    Effect::new(move |_| {
        if let Some(api) = session.api() {
            store.refresh_employees(api.clone());
            store.refresh_devices(api.clone());
            store.refresh_departments(api);
        }
    });

    let open_add_modal = move |_| {
        form.reset();
        editing.set(None);
        modal_open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let editing_id = editing.get_untracked();
        let errors = store
            .employees
            .with_untracked(|employees| form.validate(employees, editing_id));
        if !errors.is_empty() {
            form.errors.set(errors);
            return;
        }
        form.errors.set(FieldErrors::new());
        let (Some(payload), Some(api)) = (form.to_payload(), session.api()) else {
            return;
        };
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => EMPLOYEES.update(&api, id, &payload).await,
                None => EMPLOYEES.create(&api, &payload).await,
            };
            match result {
                Ok(_) => {
                    store.refresh_employees(api);
                    form.reset();
                    editing.set(None);
                    modal_open.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving employee: {}", e).into());
                }
            }
        });
    };

    let on_delete = move |id: u32| {
        let Some(api) = session.api() else { return };
        spawn_local(async move {
            match EMPLOYEES.delete(&api, id).await {
                Ok(()) => store.refresh_employees(api),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting employee: {}", e).into());
                }
            }
        });
    };

    let department_options = Signal::derive(move || {
        store
            .departments
            .get()
            .iter()
            .map(|d| (d.id.to_string(), d.name.clone()))
            .collect::<Vec<_>>()
    });
    let device_options = Signal::derive(move || {
        store
            .devices
            .get()
            .iter()
            .map(|d| (d.id.to_string(), d.model_name.clone()))
            .collect::<Vec<_>>()
    });

    let modal_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Employee".to_string()
        } else {
            "Add Employee".to_string()
        }
    });

    view! {
        <div class="container mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-center">"Employee Management"</h1>

            <div class="flex justify-end">
                <button on:click=open_add_modal class="btn btn-primary gap-2">
                    <Plus attr:class="h-4 w-4" /> "Add Employee"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Employees"</h2>
                    <ul class="space-y-4">
                        <For
                            each=move || store.employees.get()
                            key=|employee| employee.id
                            children=move |employee| {
                                let edit_employee = employee.clone();
                                let employee_id = employee.id;
                                let department_label = {
                                    let department_id = employee.department;
                                    move || {
                                        store.departments.with(|departments| {
                                            rules::department_name(departments, department_id)
                                        })
                                    }
                                };
                                let device_label = employee
                                    .device
                                    .as_ref()
                                    .map(|d| d.model_name.clone())
                                    .unwrap_or_else(|| "None".to_string());
                                let assigned_on = format_date(&employee.device_assignment, false);
                                let returned_on = format_date(&employee.device_assignment, true);
                                view! {
                                    <li class="bg-base-200 p-4 rounded-lg shadow-sm flex justify-between items-center">
                                        <div>
                                            <h3 class="text-xl font-bold">{employee.full_name()}</h3>
                                            <p>"Email: " {employee.email.clone()}</p>
                                            <p>"Department: " {department_label}</p>
                                            <p>"Device: " {device_label}</p>
                                            <p>"Assignment Date: " {assigned_on}</p>
                                            <p>"Return Date: " {returned_on}</p>
                                        </div>
                                        <div class="flex gap-4">
                                            <button
                                                on:click=move |_| {
                                                    form.load(&edit_employee);
                                                    editing.set(Some(edit_employee.id));
                                                    modal_open.set(true);
                                                }
                                                class="btn btn-warning btn-sm gap-2"
                                            >
                                                <Pencil attr:class="h-4 w-4" /> "Edit"
                                            </button>
                                            <button
                                                on:click=move |_| on_delete(employee_id)
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
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField
                            label="First Name"
                            id="first_name"
                            placeholder="First Name"
                            value=form.first_name
                            error=form.field_error("first_name")
                        />
                        <TextField
                            label="Last Name"
                            id="last_name"
                            placeholder="Last Name"
                            value=form.last_name
                            error=form.field_error("last_name")
                        />
                        <TextField
                            label="Email"
                            id="employee_email"
                            input_type="email"
                            placeholder="Email"
                            value=form.email
                            error=form.field_error("email")
                        />
                        <SelectField
                            label="Department"
                            id="department"
                            placeholder="Select Department"
                            options=department_options
                            value=form.department
                            error=form.field_error("department")
                        />
                        <TextField
                            label="Position"
                            id="position"
                            placeholder="Position"
                            value=form.position
                            error=form.field_error("position")
                        />
                        <SelectField
                            label="Device"
                            id="device_id"
                            placeholder="Select Device"
                            options=device_options
                            value=form.device_id
                            error=form.field_error("device_id")
                        />
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            on:click=move |_| modal_open.set(false)
                            class="btn btn-ghost"
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if editing.get().is_some() { "Update Employee" } else { "Add Employee" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
