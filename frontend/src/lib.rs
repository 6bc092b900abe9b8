//! Office Inventory 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与守卫引擎
//! - `session`: 会话状态管理（令牌生命周期的唯一访问点）
//! - `store`: 共享实体存储（按实体类型规范化的一份快照）
//! - `api`: REST 客户端
//! - `components`: UI 组件层

mod api;
mod session;
mod store;
mod validate;
mod components {
    pub mod assign_device;
    pub mod departments;
    pub mod device_types;
    pub mod devices;
    pub mod employees;
    pub mod form;
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod signup;
}

// 原生 Web API 封装模块
// 对 History 与 Storage 的轻量封装；HTTP 走 gloo-net。
pub(crate) mod web;

use crate::components::assign_device::AssignDevicePage;
use crate::components::departments::DepartmentsPage;
use crate::components::device_types::DeviceTypesPage;
use crate::components::devices::DevicesPage;
use crate::components::employees::EmployeesPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::signup::SignupPage;
use crate::session::{SessionContext, init_session};
use crate::store::Store;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 登录与注册之外的所有视图都包在 Layout 外壳里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Devices => view! { <Layout><DevicesPage /></Layout> }.into_any(),
        AppRoute::Employees => view! { <Layout><EmployeesPage /></Layout> }.into_any(),
        AppRoute::Departments => view! { <Layout><DepartmentsPage /></Layout> }.into_any(),
        AppRoute::DeviceTypes => view! { <Layout><DeviceTypesPage /></Layout> }.into_any(),
        AppRoute::AssignDevice => view! { <Layout><AssignDevicePage /></Layout> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文：从存储做一次令牌存在性检查
    let session = SessionContext::new();
    provide_context(session);
    init_session(&session);

    // 2. 共享实体存储
    provide_context(Store::new());

    // 3. 认证信号注入路由服务实现守卫（解耦）
    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
