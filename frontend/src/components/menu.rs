//! 侧边栏菜单
//!
//! 以 `{token, role}` 为键加载；键变化时重新加载，旧请求的结果被丢弃。

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::MenuGlyph;
use crate::web::router::use_router;
use backoffice::menu::{MENU_EMPTY_TEXT, MENU_LOADING_TEXT, MenuItem, MenuKey, MenuLoader, MenuState, MenuView};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SideMenu() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let state = RwSignal::new(MenuState::Unavailable);
    let key = Memo::new(move |_| auth.session.with(MenuKey::from_session));
    let in_flight = StoredValue::new(None::<MenuKey>);

    Effect::new(move |_| {
        let key = key.get();
        state.set(MenuState::for_key(key.as_ref()));
        in_flight.set_value(key.clone());

        let Some(key) = key else {
            return;
        };
        let loader = MenuLoader::new(api.clone());
        spawn_local(async move {
            let loaded = loader.load_key(&key).await;
            let current = in_flight
                .try_with_value(|k| k.as_ref() == Some(&key))
                .unwrap_or(false);
            if current {
                state.set(loaded);
            }
        });
    });

    let location = router.current_location();
    let selected = move || {
        location.with(|path| state.with(|s| s.selected(path).map(|item| item.path.clone())))
    };

    move || {
        state.with(|s| match s.view() {
            MenuView::Loading => view! {
                <div class="flex items-center gap-2 p-4 text-sm opacity-70">
                    <span class="loading loading-spinner loading-sm"></span>
                    {MENU_LOADING_TEXT}
                </div>
            }
            .into_any(),
            MenuView::Empty => view! {
                <div class="p-4 text-sm opacity-50">{MENU_EMPTY_TEXT}</div>
            }
            .into_any(),
            MenuView::Items(items) => {
                let entries = items
                    .iter()
                    .cloned()
                    .map(|item| view! { <MenuLink item=item selected=Signal::derive(selected) /> })
                    .collect_view();
                view! { <ul class="menu w-full gap-1">{entries}</ul> }.into_any()
            }
        })
    }
}

/// 菜单项按条目自身的路径导航；不在路由表中的路径显示 404 页面
#[component]
fn MenuLink(item: MenuItem, selected: Signal<Option<String>>) -> impl IntoView {
    let router = use_router();
    let path = item.path.clone();
    let class = move || {
        if selected.with(|s| s.as_deref() == Some(path.as_str())) {
            "active"
        } else {
            ""
        }
    };
    let target = item.path.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_path(&target);
    };

    view! {
        <li>
            <a href=item.path.clone() class=class on:click=on_click>
                <MenuGlyph icon=item.icon />
                {item.title}
            </a>
        </li>
    }
}
