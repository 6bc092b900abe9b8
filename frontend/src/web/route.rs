//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、路径映射与守卫判定。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面
    #[default]
    Login,
    /// 注册页面
    Signup,
    /// 设备面板（同时也是根路径的落点）
    Devices,
    /// 员工面板
    Employees,
    /// 部门面板
    Departments,
    /// 设备类型面板
    DeviceTypes,
    /// 设备分配面板（旧分配流程）
    AssignDevice,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/" | "/devices" => Self::Devices,
            "/employees" => Self::Employees,
            "/departments" => Self::Departments,
            "/device-types" => Self::DeviceTypes,
            "/assign-device" => Self::AssignDevice,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的规范 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Devices => "/devices",
            Self::Employees => "/employees",
            Self::Departments => "/departments",
            Self::DeviceTypes => "/device-types",
            Self::AssignDevice => "/assign-device",
            Self::NotFound => "/404",
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup | Self::NotFound)
    }

    /// 已认证用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标（沿用原系统登录后落在员工面板的行为）
    pub fn auth_success_redirect() -> Self {
        Self::Employees
    }
}

/// 守卫判定：None 放行，Some(target) 重定向
///
/// 导航、popstate 与认证状态变化共用这一个判定。
pub fn guard(target: AppRoute, is_authenticated: bool) -> Option<AppRoute> {
    if target.requires_auth() && !is_authenticated {
        return Some(AppRoute::auth_failure_redirect());
    }
    if target.should_redirect_when_authenticated() && is_authenticated {
        return Some(AppRoute::auth_success_redirect());
    }
    None
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_lands_on_devices() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Devices);
        assert_eq!(AppRoute::from_path("/devices"), AppRoute::Devices);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::NotFound);
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::Devices,
            AppRoute::Employees,
            AppRoute::Departments,
            AppRoute::DeviceTypes,
            AppRoute::AssignDevice,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn protected_routes_redirect_to_login_without_token() {
        for route in [
            AppRoute::Devices,
            AppRoute::Employees,
            AppRoute::Departments,
            AppRoute::DeviceTypes,
            AppRoute::AssignDevice,
        ] {
            assert_eq!(guard(route, false), Some(AppRoute::Login));
        }
    }

    #[test]
    fn stored_token_renders_protected_routes() {
        // 存在即放行：令牌有效性不在守卫职责内
        for route in [AppRoute::Devices, AppRoute::Employees, AppRoute::AssignDevice] {
            assert_eq!(guard(route, true), None);
        }
    }

    #[test]
    fn login_and_signup_are_public() {
        assert_eq!(guard(AppRoute::Login, false), None);
        assert_eq!(guard(AppRoute::Signup, false), None);
        // 注册页对已认证用户同样开放
        assert_eq!(guard(AppRoute::Signup, true), None);
    }

    #[test]
    fn authenticated_user_leaves_login_for_employees() {
        assert_eq!(guard(AppRoute::Login, true), Some(AppRoute::Employees));
    }
}
