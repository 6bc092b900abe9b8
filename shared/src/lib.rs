use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod rules;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 设备记录（后端读取形态）
///
/// `device_type` 为类型引用 id；类型被删除后后端可能返回 null，
/// 因此用 `Option` 承接，显示层回退为 "Unknown"。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: u32,
    pub model_name: String,
    pub serial_number: String,
    #[serde(default)]
    pub device_type: Option<u32>,
    pub purchase_date: NaiveDate,
    #[serde(default)]
    pub status: String,
    /// 是否已被分配（分配流程据此过滤可用设备池）
    #[serde(default)]
    pub assigned: bool,
}

/// 新建/编辑设备的写入载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDevice {
    pub model_name: String,
    pub serial_number: String,
    pub device_type: u32,
    pub purchase_date: NaiveDate,
}

/// 设备分配子对象（嵌入在员工读取响应中）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAssignment {
    pub assignment_date: DateTime<Utc>,
    #[serde(default)]
    pub return_date: Option<DateTime<Utc>>,
}

/// 员工记录（后端读取形态）
///
/// 读取响应内嵌完整的设备对象与分配子对象；
/// 写入时设备只传引用 id，见 [`EmployeePayload`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<u32>,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub device: Option<Device>,
    #[serde(default)]
    pub device_assignment: Option<DeviceAssignment>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 当前持有的设备 id（无设备时为 None）
    pub fn held_device_id(&self) -> Option<u32> {
        self.device.as_ref().map(|d| d.id)
    }
}

/// 新建/编辑员工的写入载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: u32,
    pub position: String,
    pub device: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceType {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeviceType {
    pub name: String,
}

// =========================================================
// 分配流程 (Legacy Assignment Flow)
// =========================================================

/// 已分配列表的反规范化条目：只携带展示所需的 (员工, 设备) 名称对
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedDevice {
    pub id: u32,
    pub employee: EmployeeRef,
    pub device: DeviceRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignDeviceRequest {
    pub employee_id: u32,
    pub device_id: u32,
}

// =========================================================
// 认证 (Authentication)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应：access 是守卫唯一检查的令牌；
/// refresh 会被写入存储但目前没有续期逻辑使用它。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_read_shape_with_embedded_device() {
        // 后端员工读取响应：内嵌设备对象与分配子对象
        let json = r#"{
            "id": 7,
            "first_name": "Ana",
            "last_name": "Petrova",
            "email": "ana@example.com",
            "department": 2,
            "position": "Accountant",
            "device": {
                "id": 31,
                "model_name": "ThinkPad T14",
                "serial_number": "SN-0031",
                "device_type": 1,
                "purchase_date": "2023-05-10",
                "status": "active",
                "assigned": true
            },
            "device_assignment": {
                "assignment_date": "2023-06-01T09:30:00Z",
                "return_date": null
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.full_name(), "Ana Petrova");
        assert_eq!(employee.held_device_id(), Some(31));
        assert_eq!(employee.department, Some(2));
        let assignment = employee.device_assignment.unwrap();
        assert!(assignment.return_date.is_none());
    }

    #[test]
    fn employee_read_shape_without_device() {
        // 未持有设备的员工：device 与 device_assignment 缺省
        let json = r#"{
            "id": 8,
            "first_name": "Marko",
            "last_name": "Ilic",
            "email": "marko@example.com",
            "department": null,
            "position": "Intern"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.held_device_id(), None);
        assert_eq!(employee.department, None);
        assert!(employee.device_assignment.is_none());
    }

    #[test]
    fn assigned_device_denormalized_pair() {
        let json = r#"{
            "id": 3,
            "employee": { "id": 7, "name": "Ana Petrova" },
            "device": { "id": 31, "name": "ThinkPad T14" }
        }"#;

        let entry: AssignedDevice = serde_json::from_str(json).unwrap();
        assert_eq!(entry.employee.name, "Ana Petrova");
        assert_eq!(entry.device.id, 31);
    }

    #[test]
    fn device_tolerates_missing_optional_fields() {
        // 旧快照可能缺 status/assigned 字段
        let json = r#"{
            "id": 1,
            "model_name": "LaserJet Pro",
            "serial_number": "SN-0001",
            "device_type": null,
            "purchase_date": "2022-11-02"
        }"#;

        let device: Device = serde_json::from_str(json).unwrap();
        assert!(!device.assigned);
        assert_eq!(device.device_type, None);
    }
}
