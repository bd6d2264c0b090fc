//! 浏览器适配层
//!
//! 核心库只依赖 trait，这里提供 fetch、LocalStorage 与 History 的实现。

mod http;
pub mod router;
mod storage;

pub use http::FetchClient;
pub use storage::BrowserStorage;
