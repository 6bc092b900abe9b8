//! 应用外壳
//!
//! 可折叠侧边栏 + 顶栏注销按钮，包裹所有已认证视图。
//! 除侧边栏开合外没有任何状态，也不发起网络请求。

use crate::components::icons::{LogOut, Menu, Package, X};
use crate::session::{logout, use_session};
use crate::web::router::Link;
use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/devices", "Devices"),
    ("/employees", "Employees"),
    ("/departments", "Departments"),
    ("/device-types", "Device Types"),
    ("/assign-device", "Assign Device"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let (sidebar_open, set_sidebar_open) = signal(true);

    // 注销后的跳转由路由服务的认证监听自动完成
    let on_logout = move |_| logout(session);

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class=move || {
                if sidebar_open.get() {
                    "w-64 bg-neutral text-neutral-content p-4 transition-all duration-300"
                } else {
                    "w-16 bg-neutral text-neutral-content p-4 transition-all duration-300"
                }
            }>
                <div class="flex items-center justify-between mb-6">
                    <Show when=move || sidebar_open.get()>
                        <div class="flex items-center gap-2">
                            <Package attr:class="h-6 w-6 text-warning" />
                            <h2 class="text-lg font-bold tracking-widest uppercase">
                                "Office Inventory"
                            </h2>
                        </div>
                    </Show>
                    <button
                        class="btn btn-ghost btn-sm btn-square"
                        on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                    >
                        {move || if sidebar_open.get() {
                            view! { <X attr:class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Menu attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </button>
                </div>

                <Show when=move || sidebar_open.get()>
                    <ul class="menu menu-lg gap-1 p-0">
                        {NAV_LINKS
                            .iter()
                            .map(|(path, label)| {
                                view! {
                                    <li>
                                        <Link to=*path class="rounded hover:bg-neutral-focus">
                                            {*label}
                                        </Link>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </aside>

            <div class="flex-1 flex flex-col">
                <div class="navbar bg-base-100 shadow justify-end">
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut attr:class="h-4 w-4" /> "Logout"
                    </button>
                </div>
                <main class="p-4">{children()}</main>
            </div>
        </div>
    }
}
