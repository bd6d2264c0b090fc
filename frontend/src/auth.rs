//! 认证模块
//!
//! 会话状态以信号形式在组件间共享，路由服务只读取这个信号。
//! 持久化由核心库的 `SessionStore` 负责。

use crate::api::Api;
use crate::web::BrowserStorage;
use backoffice::auth::{SignInError, sign_in, sign_out};
use backoffice::forms::LoginForm;
use backoffice::session::{Session, SessionStore};
use backoffice_shared::UserProfile;
use leptos::prelude::*;
use std::rc::Rc;
use tracing::error;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话（只读）
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    store: StoredValue<Rc<SessionStore<BrowserStorage>>, LocalStorage>,
}

impl AuthContext {
    /// 创建认证上下文，并从 LocalStorage 恢复上次的会话
    pub fn new() -> Self {
        let store = SessionStore::restored(BrowserStorage);
        let (session, set_session) = signal(store.current());
        Self {
            session,
            set_session,
            store: StoredValue::new_local(Rc::new(store)),
        }
    }

    /// 会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<Session> {
        self.session.into()
    }

    /// 登录并同步信号
    pub async fn login(&self, api: &Api, form: &LoginForm) -> Result<UserProfile, SignInError> {
        let store = self.store.get_value();
        let result = sign_in(api, &store, form).await;
        self.set_session.set(store.current());
        result
    }

    /// 注销；存储写入失败时会话保持不变
    pub fn logout(&self) {
        self.store.with_value(|store| {
            if let Err(e) = sign_out(store) {
                error!(error = %e, "failed to clear session");
            }
            self.set_session.set(store.current());
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
