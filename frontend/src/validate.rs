//! 客户端表单校验
//!
//! 只做必填存在性检查（格式校验交给原生 input），以及员工表单的
//! 设备双重分配检查。校验失败的提交在发出任何网络请求之前被拦下，
//! 错误按字段渲染在对应输入框下方。

use inventory_shared::{Employee, rules};

/// 逐字段错误映射
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.push((field, message.into()));
    }

    /// 取某字段的错误文案（供 UI 渲染，克隆出所有权）
    pub fn get(&self, field: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// 必填检查：值为空则登记错误
pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(field, message);
    }
}

// =========================================================
// 各表单校验器
// =========================================================

pub fn validate_device_form(
    model_name: &str,
    serial_number: &str,
    device_type: &str,
    purchase_date: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "model_name", model_name, "Model name is required.");
    require(
        &mut errors,
        "serial_number",
        serial_number,
        "Serial number is required.",
    );
    require(
        &mut errors,
        "device_type",
        device_type,
        "Device type is required.",
    );
    require(
        &mut errors,
        "purchase_date",
        purchase_date,
        "Purchase date is required.",
    );
    errors
}

/// 员工表单校验
///
/// `employees` 是当前加载的员工快照，`editing` 是编辑中的员工 id。
/// 设备检查是尽力而为的：快照可能过期，见 `inventory_shared::rules`。
pub fn validate_employee_form(
    first_name: &str,
    last_name: &str,
    email: &str,
    department: &str,
    position: &str,
    device_id: &str,
    employees: &[Employee],
    editing: Option<u32>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "first_name", first_name, "First name is required.");
    require(&mut errors, "last_name", last_name, "Last name is required.");
    require(&mut errors, "email", email, "Email is required.");
    require(&mut errors, "department", department, "Department is required.");
    require(&mut errors, "position", position, "Position is required.");

    match device_id.trim().parse::<u32>() {
        Err(_) => errors.push("device_id", "Device is required."),
        Ok(id) => {
            if rules::device_conflict(employees, id, editing) {
                errors.push(
                    "device_id",
                    "This device is already assigned to another employee.",
                );
            }
        }
    }
    errors
}

/// 设备类型名（独立面板与设备面板内嵌迷你 CRUD 共用）
pub fn validate_device_type_name(name: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", name, "Device type name is required.");
    errors
}

pub fn validate_department_name(name: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", name, "Department name is required.");
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use inventory_shared::Device;

    fn held_device(id: u32) -> Device {
        Device {
            id,
            model_name: "ThinkPad T14".to_string(),
            serial_number: "SN-0031".to_string(),
            device_type: Some(1),
            purchase_date: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
            status: "active".to_string(),
            assigned: true,
        }
    }

    fn employee(id: u32, held: Option<u32>) -> Employee {
        Employee {
            id,
            first_name: "Ana".to_string(),
            last_name: "Petrova".to_string(),
            email: "ana@example.com".to_string(),
            department: Some(1),
            position: "Accountant".to_string(),
            device: held.map(held_device),
            device_assignment: None,
        }
    }

    #[test]
    fn empty_device_form_reports_every_field() {
        let errors = validate_device_form("", "", "", "");
        assert_eq!(errors.len(), 4);
        assert!(errors.get("model_name").is_some());
        assert!(errors.get("serial_number").is_some());
        assert!(errors.get("device_type").is_some());
        assert!(errors.get("purchase_date").is_some());
    }

    #[test]
    fn device_form_reports_exactly_the_missing_field() {
        let errors = validate_device_form("MacBook Air", "SN-0042", "2", "");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("purchase_date").as_deref(),
            Some("Purchase date is required.")
        );
    }

    #[test]
    fn complete_device_form_passes() {
        let errors = validate_device_form("MacBook Air", "SN-0042", "2", "2024-02-01");
        assert!(errors.is_empty());
    }

    #[test]
    fn employee_form_requires_every_field() {
        let errors = validate_employee_form("", "", "", "", "", "", &[], None);
        assert_eq!(errors.len(), 6);
        assert!(errors.get("device_id").is_some());
    }

    #[test]
    fn assigning_a_device_held_by_another_employee_is_rejected() {
        let employees = vec![employee(1, Some(31))];
        let errors = validate_employee_form(
            "Marko",
            "Ilic",
            "marko@example.com",
            "1",
            "Intern",
            "31",
            &employees,
            None,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("device_id").as_deref(),
            Some("This device is already assigned to another employee.")
        );
    }

    #[test]
    fn editing_back_onto_own_device_is_exempt() {
        let employees = vec![employee(1, Some(31)), employee(2, None)];
        let errors = validate_employee_form(
            "Ana",
            "Petrova",
            "ana@example.com",
            "1",
            "Accountant",
            "31",
            &employees,
            Some(1),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_selects_count_as_missing() {
        // select 的占位 option 提交空字符串
        let errors = validate_employee_form(
            "Ana",
            "Petrova",
            "ana@example.com",
            "",
            "Accountant",
            "",
            &[],
            None,
        );
        assert_eq!(errors.len(), 2);
        assert!(errors.get("department").is_some());
        assert!(errors.get("device_id").is_some());
    }

    #[test]
    fn single_name_forms() {
        assert!(!validate_device_type_name("").is_empty());
        assert!(validate_device_type_name("Laptop").is_empty());
        assert!(!validate_department_name("   ").is_empty());
        assert!(validate_department_name("Finance").is_empty());
    }
}
