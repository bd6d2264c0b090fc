//! 路由服务模块 - 核心引擎
//!
//! 封装了 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫判定 -> 写入历史 -> 更新信号"。
//! 守卫逻辑本身在核心库的 `RouteGuard` 中，这里只负责执行判定。

use backoffice::guard::{GuardDecision, RouteGuard};
use backoffice::route::AppRoute;
use backoffice::session::Session;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

/// 对目标路由做守卫判定
fn decide(guard: RouteGuard, route: AppRoute, session: &Session) -> GuardDecision {
    if route.requires_auth() {
        guard.check(session)
    } else if route.should_redirect_when_authenticated() {
        guard.check_login_page(session)
    } else {
        GuardDecision::Admit
    }
}

/// 路由器服务
///
/// 通过注入的会话信号与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 地址栏中的实际路径
    location: RwSignal<String>,
    session: Signal<Session>,
    guard: RouteGuard,
}

impl RouterService {
    fn new(session: Signal<Session>, guard: RouteGuard) -> Self {
        let path = current_path();
        let (current_route, set_route) = signal(AppRoute::from_path(&path));
        let service = Self {
            current_route,
            set_route,
            location: RwSignal::new(path.clone()),
            session,
            guard,
        };
        // 首次加载同样经过守卫
        service.apply_path(&path, true);
        service
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn current_location(&self) -> Signal<String> {
        self.location.into()
    }

    /// 导航到指定路由（写入新的历史记录）
    pub fn navigate(&self, route: AppRoute) {
        self.apply(route, route.to_path(), false);
    }

    /// 按原样导航到一个路径，地址栏保留该路径
    pub fn navigate_path(&self, path: &str) {
        self.apply_path(path, false);
    }

    fn apply_path(&self, path: &str, replace: bool) {
        self.apply(AppRoute::from_path(path), path, replace);
    }

    /// **核心方法：守卫 + 导航**
    ///
    /// 重定向总是替换当前历史记录，后退按钮不会回到被拒绝的页面。
    fn apply(&self, target: AppRoute, path: &str, replace: bool) {
        let decision = self
            .session
            .with_untracked(|session| decide(self.guard, target, session));

        match decision {
            GuardDecision::Admit => {
                if current_path() != path {
                    write_history(path, replace);
                }
                self.location.set(path.to_string());
                self.set_route.set(target);
            }
            GuardDecision::Redirect { to, replace } => {
                debug!(from = %target, to = %to, "route guard redirect");
                write_history(to.to_path(), replace);
                self.location.set(to.to_path().to_string());
                self.set_route.set(to);
            }
        }
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let service = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            service.apply_path(&current_path(), true);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话变化时重新判定当前页面（登录后离开登录页、注销后离开受保护页面）
    fn setup_session_redirect(&self) {
        let service = *self;
        Effect::new(move |_| {
            service.session.track();
            let path = service.location.get_untracked();
            service.apply_path(&path, true);
        });
    }
}

fn provide_router(session: Signal<Session>, guard: RouteGuard) -> RouterService {
    let router = RouterService::new(session, guard);
    router.init_popstate_listener();
    router.setup_session_redirect();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(session: Signal<Session>, guard: RouteGuard, children: Children) -> impl IntoView {
    provide_router(session, guard);
    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// 站内链接，点击时走路由服务而不是整页跳转
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(route);
    };

    view! {
        <a href=route.to_path() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
