//! 控制台上下文
//!
//! 会话只存在于核心包的 `AuthService` 中，这里把组装好的 [`Console`]
//! 放进 Leptos Context，供各页面组件取用。

use std::rc::Rc;

use crate::web::router::HistoryNavigator;
use crate::web::{BrowserSessionStore, FetchHttpClient};
use leptos::prelude::*;
use vendor_console::{AuthService, Console, ConsoleApi, ConsoleConfig, RouteGuard};

/// 编译期注入的配置，未设置时使用默认值
pub fn build_config() -> ConsoleConfig {
    ConsoleConfig::from_lookup(|key| {
        let value = match key {
            "CONSOLE_API_URL" => option_env!("CONSOLE_API_URL"),
            "CONSOLE_MAX_RETRIES" => option_env!("CONSOLE_MAX_RETRIES"),
            "CONSOLE_MAX_IMAGE_BYTES" => option_env!("CONSOLE_MAX_IMAGE_BYTES"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 控制台上下文
///
/// `Console` 持有 `Rc`，只能以本地存储的方式放进响应式系统。
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    console: StoredValue<Console<FetchHttpClient>, LocalStorage>,
}

impl ConsoleContext {
    pub fn new(navigator: HistoryNavigator) -> Self {
        let config = build_config();
        let store = BrowserSessionStore::new(&config.session_key);
        let console = Console::new(FetchHttpClient, config, store, Rc::new(navigator));
        Self {
            console: StoredValue::new_local(console),
        }
    }

    pub fn api(&self) -> Rc<ConsoleApi<FetchHttpClient>> {
        self.console.with_value(|c| c.api.clone())
    }

    pub fn auth(&self) -> Rc<AuthService> {
        self.console.with_value(|c| c.auth.clone())
    }

    /// 路由守卫与 API 共享同一个会话
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.auth())
    }
}

/// 从 Context 获取控制台上下文
pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>().expect("ConsoleContext should be provided")
}
