//! 商户控制台前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web`: 浏览器 API 封装（fetch、localStorage、history 路由）
//! - `auth`: 控制台上下文（核心包服务的组装）
//! - `components`: UI 组件层，业务状态由核心包的页面视图模型维护
//! - `logging`: tracing 到 devtools 控制台的桥接

mod auth;
mod components;
pub mod logging;
pub(crate) mod web;

use crate::auth::ConsoleContext;
use crate::components::campaign::CampaignFormView;
use crate::components::coupon::CouponFormView;
use crate::components::home::HomeView;
use crate::components::listing::{CampaignListView, CouponListView, OutletListView};
use crate::components::login::{LoginView, RegisterView};
use crate::components::organization::OrganizationView;
use crate::components::outlet::OutletFormView;
use crate::components::NotFoundView;
use crate::web::router::{HistoryNavigator, RouterOutlet, provide_router};

use leptos::prelude::*;
use vendor_console::AppRoute;
use vendor_console::pages::FormMode;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home { created } => view! { <HomeView created=created /> }.into_any(),
        AppRoute::Login => view! { <LoginView /> }.into_any(),
        AppRoute::Register => view! { <RegisterView /> }.into_any(),
        AppRoute::CampaignCreate => {
            view! { <CampaignFormView mode=FormMode::Create /> }.into_any()
        }
        AppRoute::CampaignList(filter) => view! { <CampaignListView filter=filter /> }.into_any(),
        AppRoute::CampaignEdit(id) => {
            view! { <CampaignFormView mode=FormMode::Edit(id) /> }.into_any()
        }
        AppRoute::CouponCreate => view! { <CouponFormView mode=FormMode::Create /> }.into_any(),
        AppRoute::CouponList(filter) => view! { <CouponListView filter=filter /> }.into_any(),
        AppRoute::CouponEdit(id) => view! { <CouponFormView mode=FormMode::Edit(id) /> }.into_any(),
        AppRoute::Organization => view! { <OrganizationView /> }.into_any(),
        AppRoute::OutletCreate => view! { <OutletFormView mode=FormMode::Create /> }.into_any(),
        AppRoute::OutletList => view! { <OutletListView /> }.into_any(),
        AppRoute::OutletEdit(id) => view! { <OutletFormView mode=FormMode::Edit(id) /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundView /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 导航器同时供 401 处理与路由服务使用
    let history = HistoryNavigator::new();

    // 2. 组装控制台（会话从 localStorage 恢复）
    let console = ConsoleContext::new(history);
    provide_context(console);

    // 3. 路由服务：守卫与 API 共享同一会话
    provide_router(history, console.guard());

    view! { <RouterOutlet matcher=route_matcher /> }
}
