//! 共享实体存储
//!
//! 进程内唯一的一份实体快照，按实体类型各持有一个列表信号。
//! 面板不再各自保存拉取副本；每次变更后由触发方刷新受影响的
//! 列表，所有面板同步看到新快照。拉取失败只记录到控制台，
//! 保留上一份快照，界面维持可用。

use crate::api::{self, ApiError, InventoryApi};
use inventory_shared::{AssignedDevice, Department, Device, DeviceType, Employee};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct Store {
    pub devices: RwSignal<Vec<Device>>,
    pub employees: RwSignal<Vec<Employee>>,
    pub departments: RwSignal<Vec<Department>>,
    pub device_types: RwSignal<Vec<DeviceType>>,
    pub assigned: RwSignal<Vec<AssignedDevice>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            devices: RwSignal::new(Vec::new()),
            employees: RwSignal::new(Vec::new()),
            departments: RwSignal::new(Vec::new()),
            device_types: RwSignal::new(Vec::new()),
            assigned: RwSignal::new(Vec::new()),
        }
    }

    pub fn refresh_devices(&self, api: InventoryApi) {
        let signal = self.devices;
        spawn_local(async move {
            match api::DEVICES.list(&api).await {
                Ok(data) => signal.set(data),
                Err(e) => log_fetch_error("devices", &e),
            }
        });
    }

    pub fn refresh_employees(&self, api: InventoryApi) {
        let signal = self.employees;
        spawn_local(async move {
            match api::EMPLOYEES.list(&api).await {
                Ok(data) => signal.set(data),
                Err(e) => log_fetch_error("employees", &e),
            }
        });
    }

    pub fn refresh_departments(&self, api: InventoryApi) {
        let signal = self.departments;
        spawn_local(async move {
            match api::DEPARTMENTS.list(&api).await {
                Ok(data) => signal.set(data),
                Err(e) => log_fetch_error("departments", &e),
            }
        });
    }

    pub fn refresh_device_types(&self, api: InventoryApi) {
        let signal = self.device_types;
        spawn_local(async move {
            match api::DEVICE_TYPES.list(&api).await {
                Ok(data) => signal.set(data),
                Err(e) => log_fetch_error("device types", &e),
            }
        });
    }

    pub fn refresh_assigned(&self, api: InventoryApi) {
        let signal = self.assigned;
        spawn_local(async move {
            match api::assigned_devices(&api).await {
                Ok(data) => signal.set(data),
                Err(e) => log_fetch_error("assigned devices", &e),
            }
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn log_fetch_error(what: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("[Store] failed to fetch {}: {}", what, err).into());
}

/// 从 Context 获取共享存储
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store should be provided")
}
