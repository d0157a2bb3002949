//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："监听 -> 守卫 -> 处理 -> 加载"，守卫逻辑来自核心包的 `RouteGuard`。

use leptos::prelude::*;
use vendor_console::{AppRoute, GuardDecision, Navigator, RouteGuard};
use wasm_bindgen::prelude::*;

/// 当前浏览器地址（路径 + 查询串）
fn current_url() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 重定向时使用，不留下历史记录
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 不经守卫的导航器，注入核心包供 401 处理使用
#[derive(Clone, Copy)]
pub struct HistoryNavigator {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_url()));
        Self {
            current_route,
            set_route,
        }
    }
}

impl Navigator for HistoryNavigator {
    fn current_url(&self) -> String {
        current_url()
    }

    fn navigate(&self, url: &str) {
        push_history_state(url);
        self.set_route.set(AppRoute::from_path(url));
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；守卫在每次导航（含前进/后退）时求值。
#[derive(Clone, Copy)]
pub struct RouterService {
    history: HistoryNavigator,
    guard: StoredValue<RouteGuard, LocalStorage>,
}

impl RouterService {
    fn new(history: HistoryNavigator, guard: RouteGuard) -> Self {
        Self {
            history,
            guard: StoredValue::new_local(guard),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.history.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, url: &str) {
        self.resolve(url, true);
    }

    fn resolve(&self, url: &str, use_push: bool) {
        let Some(decision) = self.guard.try_with_value(|g| g.check(url)) else {
            return;
        };
        let (path, route) = match decision {
            GuardDecision::Allow(route) => (url.to_string(), route),
            GuardDecision::Redirect(route) => (route.to_path(), route),
        };
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.history.set_route.set(route);
    }

    /// 浏览器后退/前进时同样执行守卫
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.resolve(&current_url(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并对初始地址执行一次守卫
pub fn provide_router(history: HistoryNavigator, guard: RouteGuard) -> RouterService {
    let router = RouterService::new(history, guard);
    router.resolve(&current_url(), false);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure provide_router was called.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，点击时经由路由服务导航
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
