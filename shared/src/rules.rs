//! 纯领域规则
//!
//! 不依赖任何浏览器 API，可在原生目标上直接测试。
//! 这里的双重分配检查是尽力而为的客户端校验：它只扫描
//! 最近一次拉取的员工快照，不提供任何事务性保证；
//! 权威约束（如果存在）在后端。

use crate::{Department, DeviceType, Employee};

/// 选中的设备是否与另一名员工的持有记录冲突
///
/// `editing` 为正在编辑的员工 id：把员工改回其本来持有的
/// 设备不算冲突（自我豁免）。新增流程传 `None`。
pub fn device_conflict(employees: &[Employee], device_id: u32, editing: Option<u32>) -> bool {
    employees
        .iter()
        .any(|e| e.held_device_id() == Some(device_id) && Some(e.id) != editing)
}

/// 按引用 id 解析部门名，悬挂引用回退为 "Unknown"
pub fn department_name(departments: &[Department], id: Option<u32>) -> String {
    id.and_then(|id| departments.iter().find(|d| d.id == id))
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// 按引用 id 解析设备类型名，悬挂引用回退为 "Unknown"
pub fn device_type_name(types: &[DeviceType], id: Option<u32>) -> String {
    id.and_then(|id| types.iter().find(|t| t.id == id))
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Device;
    use chrono::NaiveDate;

    fn device(id: u32) -> Device {
        Device {
            id,
            model_name: format!("Device-{id}"),
            serial_number: format!("SN-{id:04}"),
            device_type: Some(1),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            status: "active".to_string(),
            assigned: true,
        }
    }

    fn employee(id: u32, held: Option<u32>) -> Employee {
        Employee {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: format!("e{id}@example.com"),
            department: Some(1),
            position: "Staff".to_string(),
            device: held.map(device),
            device_assignment: None,
        }
    }

    #[test]
    fn conflict_when_device_held_by_other_employee() {
        let employees = vec![employee(1, Some(10)), employee(2, None)];
        // 新增员工试图选择 1 号员工持有的设备
        assert!(device_conflict(&employees, 10, None));
        // 编辑 2 号员工，选择 1 号员工持有的设备
        assert!(device_conflict(&employees, 10, Some(2)));
    }

    #[test]
    fn no_conflict_for_own_previous_device() {
        // 自我豁免：把员工改回其已持有的设备不报错
        let employees = vec![employee(1, Some(10)), employee(2, Some(20))];
        assert!(!device_conflict(&employees, 10, Some(1)));
    }

    #[test]
    fn no_conflict_for_unheld_device() {
        let employees = vec![employee(1, Some(10))];
        assert!(!device_conflict(&employees, 99, None));
        assert!(!device_conflict(&employees, 99, Some(1)));
    }

    #[test]
    fn conflict_scan_ignores_employees_without_device() {
        let employees = vec![employee(1, None), employee(2, None)];
        assert!(!device_conflict(&employees, 10, None));
    }

    #[test]
    fn department_lookup_falls_back_to_unknown() {
        let departments = vec![
            Department {
                id: 1,
                name: "Finance".to_string(),
            },
            Department {
                id: 2,
                name: "IT".to_string(),
            },
        ];
        assert_eq!(department_name(&departments, Some(2)), "IT");
        // 部门 3 已被删除但员工仍引用它
        assert_eq!(department_name(&departments, Some(3)), "Unknown");
        assert_eq!(department_name(&departments, None), "Unknown");
    }

    #[test]
    fn device_type_lookup_falls_back_to_unknown() {
        let types = vec![DeviceType {
            id: 1,
            name: "Laptop".to_string(),
        }];
        assert_eq!(device_type_name(&types, Some(1)), "Laptop");
        assert_eq!(device_type_name(&types, Some(7)), "Unknown");
        assert_eq!(device_type_name(&types, None), "Unknown");
    }
}
