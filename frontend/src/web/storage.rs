//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage` 实现核心库的 `KeyValueStore`。
//! 值按原始字符串读写，不经过 gloo 的 JSON 编码，与其他客户端写入的格式保持一致。

use backoffice::error::{AdminError, AdminResult};
use backoffice::session::KeyValueStore;
use gloo_storage::{LocalStorage, Storage};

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    /// 键不存在或存储不可用时返回 None
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> AdminResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| AdminError::storage(format!("写入 {} 失败: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> AdminResult<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| AdminError::storage(format!("删除 {} 失败: {:?}", key, e)))
    }
}
