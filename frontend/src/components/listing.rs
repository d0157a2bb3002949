//! 活动、优惠券、门店列表
//!
//! 过滤器来自 URL，切换过滤器即切换路由。

use super::fields::format_date;
use super::layout::Shell;
use super::{ErrorAlert, PageHandle};
use crate::auth::use_console;
use crate::web::FetchHttpClient;
use crate::web::router::Link;
use leptos::prelude::*;
use vendor_console::pages::ListingPage;
use vendor_console_shared::chrono::Utc;
use vendor_console_shared::{Campaign, Coupon, ListFilter, Outlet};

const FILTERS: [ListFilter; 4] = [
    ListFilter::All,
    ListFilter::Active,
    ListFilter::Inactive,
    ListFilter::Used,
];

/// 返回列表页句柄与“新建”按钮的禁用状态
fn mount_listing(filter: ListFilter) -> (PageHandle<ListingPage<FetchHttpClient>>, RwSignal<bool>) {
    let handle = PageHandle::mount(ListingPage::new(use_console().api(), filter));
    let disabled = RwSignal::new(true);
    (handle, disabled)
}

#[component]
fn FilterTabs(base: &'static str, current: ListFilter) -> impl IntoView {
    let tabs = FILTERS
        .iter()
        .map(|filter| {
            let class = if *filter == current { "tab tab-active" } else { "tab" };
            view! {
                <Link to=format!("{}/{}", base, filter) class=class>{filter.as_segment().to_string()}</Link>
            }
        })
        .collect_view();
    view! { <div role="tablist" class="tabs tabs-boxed mb-4">{tabs}</div> }
}

#[component]
fn ListHeader(title: &'static str, create: &'static str, disabled: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center mb-4">
            <h1 class="text-2xl font-bold">{title}</h1>
            {move || if disabled.get() {
                view! { <button class="btn btn-primary btn-sm" disabled=true>"Create"</button> }.into_any()
            } else {
                view! { <Link to=create class="btn btn-primary btn-sm">"Create"</Link> }.into_any()
            }}
        </div>
    }
}

fn status_badge(active: bool) -> impl IntoView {
    if active {
        view! { <span class="badge badge-success">"active"</span> }.into_any()
    } else {
        view! { <span class="badge badge-ghost">"inactive"</span> }.into_any()
    }
}

// ============================================================================
// 活动
// ============================================================================

#[component]
pub fn CampaignListView(filter: ListFilter) -> impl IntoView {
    let (handle, disabled) = mount_listing(filter.clone());
    let rows = RwSignal::new(Vec::<Campaign>::new());

    handle.run(move |page| async move {
        page.activate().await;
        let _ = rows.try_set(page.campaigns(Utc::now()));
        let _ = disabled.try_set(page.disabled());
    });

    view! {
        <Shell>
            <ListHeader title="Campaigns" create="/campaigns/create" disabled=disabled />
            <FilterTabs base="/campaigns/list" current=filter />
            <ErrorAlert error=handle.error() />
            <table class="table table-zebra w-full bg-base-100">
                <thead>
                    <tr><th>"Name"</th><th>"Start"</th><th>"End"</th><th>"Status"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|c| c.id
                        children=|c| view! {
                            <tr>
                                <td>{c.name.clone()}</td>
                                <td>{format_date(c.start)}</td>
                                <td>{format_date(c.end)}</td>
                                <td>{status_badge(c.active)}</td>
                                <td><Link to=format!("/campaigns/edit/{}", c.id) class="btn btn-ghost btn-xs">"Edit"</Link></td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </Shell>
    }
}

// ============================================================================
// 优惠券
// ============================================================================

#[component]
pub fn CouponListView(filter: ListFilter) -> impl IntoView {
    let (handle, disabled) = mount_listing(filter.clone());
    let rows = RwSignal::new(Vec::<Coupon>::new());

    handle.run(move |page| async move {
        page.activate().await;
        let _ = rows.try_set(page.coupons(Utc::now()));
        let _ = disabled.try_set(page.disabled());
    });

    view! {
        <Shell>
            <ListHeader title="Coupons" create="/coupons/create" disabled=disabled />
            <FilterTabs base="/coupons/list" current=filter />
            <ErrorAlert error=handle.error() />
            <table class="table table-zebra w-full bg-base-100">
                <thead>
                    <tr><th>"Name"</th><th>"Code"</th><th>"Amount"</th><th>"Ends"</th><th>"Status"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|c| c.id
                        children=|c| {
                            let amount = if c.is_unlimited() { "unlimited".to_string() } else { c.amount.to_string() };
                            view! {
                                <tr>
                                    <td>{c.name.clone()}</td>
                                    <td class="font-mono">{c.code.clone()}</td>
                                    <td>{amount}</td>
                                    <td>{format_date(c.end)}</td>
                                    <td>{status_badge(c.active)}</td>
                                    <td><Link to=format!("/coupons/edit/{}", c.id) class="btn btn-ghost btn-xs">"Edit"</Link></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Shell>
    }
}

// ============================================================================
// 门店
// ============================================================================

#[component]
pub fn OutletListView() -> impl IntoView {
    let (handle, disabled) = mount_listing(ListFilter::All);
    let rows = RwSignal::new(Vec::<Outlet>::new());

    handle.run(move |page| async move {
        page.activate().await;
        let _ = rows.try_set(page.outlets());
        let _ = disabled.try_set(page.disabled());
    });

    view! {
        <Shell>
            <ListHeader title="Outlets" create="/outlets/create" disabled=disabled />
            <ErrorAlert error=handle.error() />
            <table class="table table-zebra w-full bg-base-100">
                <thead>
                    <tr><th>"Name"</th><th>"Address"</th><th>"Location"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|o| o.id
                        children=|o| view! {
                            <tr>
                                <td>{o.name.clone()}</td>
                                <td>{o.address.clone()}</td>
                                <td class="font-mono text-xs">{format!("{:.5}, {:.5}", o.latitude, o.longitude)}</td>
                                <td><Link to=format!("/outlets/edit/{}", o.id) class="btn btn-ghost btn-xs">"Edit"</Link></td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </Shell>
    }
}
