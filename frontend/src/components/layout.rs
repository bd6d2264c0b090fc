//! 受保护区域的外壳：侧边栏 + 顶栏 + 内容区

use crate::auth::use_auth;
use crate::components::icons::{LogOut, ShieldCheck};
use crate::components::menu::SideMenu;
use backoffice::route::AppRoute;
use leptos::prelude::*;

#[component]
pub fn AdminLayout(route: AppRoute, children: Children) -> impl IntoView {
    let auth = use_auth();
    let user_name = move || {
        auth.session.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let role = move || auth.session.with(|s| s.primary_role().unwrap_or("-").to_string());

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="admin-drawer" type="checkbox" class="drawer-toggle" />

            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow">
                    <div class="flex-none lg:hidden">
                        <label for="admin-drawer" class="btn btn-square btn-ghost">"☰"</label>
                    </div>
                    <div class="flex-1">
                        <h2 class="text-xl font-bold px-2">{route.title()}</h2>
                    </div>
                    <div class="flex-none gap-2 items-center hidden md:flex">
                        <span class="font-medium">{user_name}</span>
                        <span class="badge badge-neutral">{role}</span>
                    </div>
                </div>

                <main class="flex-1 p-4 md:p-8">
                    <div class="max-w-7xl mx-auto">{children()}</div>
                </main>

                <footer class="footer footer-center p-4 text-base-content/60">
                    <p>"© 2025 Mi App"</p>
                </footer>
            </div>

            <div class="drawer-side">
                <label for="admin-drawer" class="drawer-overlay"></label>
                <aside class="w-56 min-h-full bg-base-100 flex flex-col justify-between">
                    <div>
                        <div class="flex items-center gap-2 p-4 text-primary">
                            <ShieldCheck attr:class="h-6 w-6" />
                            <span class="font-bold text-lg">"Back Office"</span>
                        </div>
                        <SideMenu />
                    </div>
                    <div class="p-4">
                        <button class="btn btn-error btn-block gap-2" on:click=move |_| auth.logout()>
                            <LogOut attr:class="h-4 w-4" /> "Logout"
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
