//! API 客户端与配置的 Context

use crate::web::FetchClient;
use backoffice::{AdminApi, AppConfig};
use leptos::prelude::*;

/// 浏览器中使用的 API 客户端
pub type Api = AdminApi<FetchClient>;

/// 注入配置与匿名 API 客户端；需要凭据的调用通过 `with_token` 派生
pub fn provide_services(config: AppConfig) {
    let api = Api::new(config.api_base_url.clone(), FetchClient);
    provide_context(api);
    provide_context(config);
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("Api should be provided")
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig should be provided")
}

/// 携带当前会话 token 的客户端；未登录时返回匿名客户端
pub fn use_session_api() -> Api {
    let api = use_api();
    let session = crate::auth::use_auth().session.get_untracked();
    match session.token {
        Some(token) => api.with_token(token),
        None => api,
    }
}
