//! 通知提示框
//!
//! 每条通知挂载时启动一个定时器，到期或点击时移除。

use backoffice::notify::{NOTIFICATION_TTL_MS, Notification};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn Toasts(
    #[prop(into)] notifications: Signal<Vec<Notification>>,
    #[prop(into)] on_dismiss: Callback<Uuid>,
) -> impl IntoView {
    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || notifications.get()
                key=|n| n.id
                children=move |n| view! { <Toast notification=n on_dismiss=on_dismiss /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification, on_dismiss: Callback<Uuid>) -> impl IntoView {
    let id = notification.id;
    // 组件卸载时定时器随 StoredValue 一起 drop，不会再触发
    let _timer = StoredValue::new_local(Timeout::new(NOTIFICATION_TTL_MS, move || {
        on_dismiss.run(id)
    }));

    let class = if notification.is_error() {
        "alert alert-error shadow-lg cursor-pointer"
    } else {
        "alert alert-success shadow-lg cursor-pointer"
    };

    view! {
        <div class=class on:click=move |_| on_dismiss.run(id)>
            <span>{notification.text}</span>
        </div>
    }
}

// ============================================================================
// 全局通知（跨页面保留，如登录后的欢迎语）
// ============================================================================

#[derive(Clone, Copy)]
pub struct Notices(RwSignal<Vec<Notification>>);

impl Notices {
    pub fn push(&self, notification: Notification) {
        self.0.update(|list| list.push(notification));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.0.update(|list| list.retain(|n| n.id != id));
    }
}

pub fn provide_notices() -> Notices {
    let notices = Notices(RwSignal::new(Vec::new()));
    provide_context(notices);
    notices
}

pub fn use_notices() -> Notices {
    use_context::<Notices>().expect("Notices should be provided")
}

#[component]
pub fn GlobalToasts() -> impl IntoView {
    let notices = use_notices();
    view! {
        <Toasts
            notifications=notices.0
            on_dismiss=move |id| notices.dismiss(id)
        />
    }
}
