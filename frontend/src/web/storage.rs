//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口，
//! 并在其上实现会话存储（键名 `token`）。

use vendor_console::SessionStore;
use vendor_console_shared::SESSION_KEY;

/// 本地存储操作封装
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在或发生错误时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 持久化到 localStorage 的会话，刷新页面后仍然有效
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new(SESSION_KEY)
    }
}

impl SessionStore for BrowserSessionStore {
    fn has_session(&self) -> bool {
        BrowserStorage::get(&self.key).is_some()
    }

    fn credential(&self) -> String {
        BrowserStorage::get(&self.key).unwrap_or_default()
    }

    fn set_session(&self, token: &str) {
        if !BrowserStorage::set(&self.key, token) {
            tracing::warn!("localStorage unavailable, session not persisted");
        }
    }

    fn clear_session(&self) {
        BrowserStorage::delete(&self.key);
    }
}
