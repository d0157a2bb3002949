//! UI 组件层
//!
//! 组件只负责渲染与收集输入；加载、提交、错误处理都交给核心包的页面视图模型。

pub mod campaign;
pub mod coupon;
mod fields;
pub mod home;
mod layout;
pub mod listing;
pub mod login;
pub mod organization;
pub mod outlet;

pub use layout::NotFoundView;

use std::future::Future;
use std::rc::Rc;

use crate::web::FetchHttpClient;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vendor_console::pages::{
    CampaignPage, CouponPage, HomePage, ListingPage, LoginPage, OrganizationPage, OutletPage,
    PageStatus, RegisterPage,
};

/// 组件可以托管的页面视图模型
pub(crate) trait PageModel: 'static {
    fn status(&self) -> PageStatus;
    fn teardown(&self);
}

macro_rules! impl_page_model {
    ($($page:ident),* $(,)?) => {
        $(
            impl PageModel for $page<FetchHttpClient> {
                fn status(&self) -> PageStatus {
                    $page::status(self)
                }

                fn teardown(&self) {
                    $page::teardown(self)
                }
            }
        )*
    };
}

impl_page_model!(
    CampaignPage,
    CouponPage,
    HomePage,
    ListingPage,
    LoginPage,
    OrganizationPage,
    OutletPage,
    RegisterPage,
);

/// 视图模型句柄
///
/// 视图模型持有 `Rc`，以本地存储方式放进响应式系统；组件卸载时自动取消
/// 进行中的请求。
pub(crate) struct PageHandle<P: PageModel> {
    page: StoredValue<Rc<P>, LocalStorage>,
    status: RwSignal<PageStatus>,
}

impl<P: PageModel> Clone for PageHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PageModel> Copy for PageHandle<P> {}

impl<P: PageModel> PageHandle<P> {
    pub fn mount(page: P) -> Self {
        let page = StoredValue::new_local(Rc::new(page));
        on_cleanup(move || {
            page.try_with_value(|p| p.teardown());
        });
        Self {
            page,
            status: RwSignal::new(PageStatus::default()),
        }
    }

    pub fn status(&self) -> RwSignal<PageStatus> {
        self.status
    }

    pub fn loading(&self) -> Signal<bool> {
        let status = self.status;
        Signal::derive(move || status.get().loading)
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let status = self.status;
        Signal::derive(move || status.get().error)
    }

    /// 同步读取视图模型
    pub fn with<R>(&self, f: impl FnOnce(&P) -> R) -> Option<R> {
        self.page.try_with_value(|p| f(p))
    }

    /// 在本地任务中运行异步操作，结束后同步状态
    ///
    /// 组件已卸载时什么都不做。
    pub fn run<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<P>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(page) = self.page.try_get_value() else {
            return;
        };
        let status = self.status;
        status.update(|s| s.loading = true);
        spawn_local(async move {
            f(page.clone()).await;
            let _ = status.try_set(page.status());
        });
    }

    /// 同步操作后刷新状态
    pub fn sync(&self) {
        if let Some(status) = self.with(|p| p.status()) {
            let _ = self.status.try_set(status);
        }
    }
}

/// 错误提示条
#[component]
pub(crate) fn ErrorAlert(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{message}</span>
                </div>
            }
        })
    }
}

/// 加载中的占位
#[component]
pub(crate) fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center p-10">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
