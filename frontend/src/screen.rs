//! 资源列表页的响应式包装
//!
//! `ResourceScreen` 持有 `Rc`，只能放在本地存储里；组件通过 `ScreenHandle`
//! 访问它。控制器每次变化都会递增 `tick`，读取方法先 track 再借用状态。

use backoffice::screen::{ResourceGateway, ResourceScreen, ScreenState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

pub struct ScreenHandle<G: ResourceGateway + 'static> {
    screen: StoredValue<ResourceScreen<G>, LocalStorage>,
    tick: RwSignal<u64>,
}

impl<G: ResourceGateway + 'static> Clone for ScreenHandle<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ResourceGateway + 'static> Copy for ScreenHandle<G> {}

impl<G: ResourceGateway + 'static> ScreenHandle<G> {
    /// 响应式读取；页面销毁后返回默认值
    pub fn read<T: Default>(&self, f: impl FnOnce(&ScreenState<G::Record>) -> T) -> T {
        self.tick.track();
        self.screen
            .try_with_value(|screen| screen.with_state(f))
            .unwrap_or_default()
    }

    fn with_screen(&self, f: impl FnOnce(&ResourceScreen<G>)) {
        self.screen.try_with_value(f);
    }

    pub async fn reload(&self) {
        if let Some(screen) = self.screen.try_get_value() {
            screen.refresh().await;
        }
    }

    pub fn refresh(&self) {
        let handle = *self;
        spawn_local(async move { handle.reload().await });
    }

    pub fn search(&self, query: &str) {
        self.with_screen(|s| s.search(query));
    }

    pub fn open_add(&self) {
        self.with_screen(ResourceScreen::open_add);
    }

    pub fn open_edit(&self, record: G::Record) {
        self.with_screen(|s| s.open_edit(record));
    }

    pub fn close_modal(&self) {
        self.with_screen(ResourceScreen::close_modal);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.with_screen(|s| s.dismiss(id));
    }

    pub fn submit(&self, draft: G::Draft)
    where
        G::Draft: 'static,
    {
        let Some(screen) = self.screen.try_get_value() else {
            return;
        };
        spawn_local(async move {
            screen.submit(draft).await;
        });
    }

    pub fn delete(&self, id: String) {
        let Some(screen) = self.screen.try_get_value() else {
            return;
        };
        spawn_local(async move {
            screen.delete(&id).await;
        });
    }
}

/// 创建页面控制器；组件卸载时销毁，之后到达的响应被丢弃
pub fn use_screen<G: ResourceGateway + 'static>(gateway: G) -> ScreenHandle<G> {
    let screen = ResourceScreen::new(gateway);
    let tick = RwSignal::new(0u64);
    screen.subscribe(move || {
        tick.try_update(|n| *n = n.wrapping_add(1));
    });

    let screen = StoredValue::new_local(screen);
    on_cleanup(move || {
        screen.try_with_value(ResourceScreen::dispose);
    });

    ScreenHandle { screen, tick }
}
