//! 后台管理控制台前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - 核心库 `backoffice`: 路由、守卫、会话、菜单、列表页状态机（与 DOM 无关）
//! - `web`: 浏览器适配层（fetch、LocalStorage、History）
//! - `auth` / `api`: 通过 Context 注入的会话与 API 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod screen;
pub mod telemetry;
mod components {
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod login;
    mod menu;
    pub mod orders;
    pub mod products;
    pub mod reports;
    pub mod toasts;
    pub mod users;
    mod widgets;
}
pub(crate) mod web;

use crate::auth::{AuthContext, use_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::layout::AdminLayout;
use crate::components::login::LoginPage;
use crate::components::orders::OrdersPage;
use crate::components::products::ProductsPage;
use crate::components::reports::ReportsPage;
use crate::components::toasts::{GlobalToasts, provide_notices};
use crate::components::users::UsersPage;

use backoffice::guard::RouteGuard;
use backoffice::route::AppRoute;
use backoffice::AppConfig;
use leptos::prelude::*;
use tracing::warn;
use web::router::{Router, RouterOutlet};

fn not_found_view(class: &'static str) -> AnyView {
    view! {
        <div class=class>
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">{AppRoute::NotFound.title()}</p>
            </div>
        </div>
    }
    .into_any()
}

/// 路由匹配函数
///
/// 受保护页面统一包在 `AdminLayout` 中；已登录用户的 404 也留在布局内。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::NotFound => {
            let signed_in = use_auth().session.with_untracked(|s| s.is_authenticated());
            if !signed_in {
                return not_found_view("flex items-center justify-center min-h-screen bg-base-200");
            }
            not_found_view("flex items-center justify-center py-24")
        }
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
    };
    view! { <AdminLayout route=route>{page}</AdminLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与 API 客户端
    let config = AppConfig::from_build_env();
    let guard = RouteGuard::new(config.guard_bypass);
    if guard.is_bypassed() {
        warn!("route guard bypass is enabled, private pages are open");
    }
    api::provide_services(config);

    // 2. 认证上下文（从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_notices();

    // 3. 会话信号注入路由服务，守卫只读取它
    let session = auth_ctx.session_signal();

    view! {
        <GlobalToasts />
        <Router session=session guard=guard>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
