use super::layout::Shell;
use super::{ErrorAlert, PageHandle, Spinner};
use crate::auth::use_console;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use vendor_console::CreatedKind;
use vendor_console::pages::{Alert, HomePage};

/// 首页：商户状态提示与快捷入口
#[component]
pub fn HomeView(created: Option<CreatedKind>) -> impl IntoView {
    let router = use_router();
    let handle = PageHandle::mount(HomePage::new(use_console().api(), created));
    let alerts = RwSignal::new(Vec::<Alert>::new());
    let enabled = RwSignal::new(false);
    let email_sent = RwSignal::new(false);

    handle.run(move |page| async move {
        page.activate().await;
        let _ = alerts.try_set(page.alerts());
        let _ = enabled.try_set(page.actions_enabled());
    });

    let on_resend = move |_| {
        handle.run(move |page| async move {
            page.resend_verification_email().await;
            let _ = email_sent.try_set(page.verification_sent());
        });
    };

    let on_logout = move |_| {
        if let Some(url) = handle.with(|p| p.logout()) {
            router.navigate(&url);
        }
    };

    let loading = handle.loading();

    view! {
        <Shell>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-bold">"Dashboard"</h1>
                <button class="btn btn-outline btn-sm" on:click=on_logout>"Log out"</button>
            </div>

            <ErrorAlert error=handle.error() />

            <div class="flex flex-col gap-2 mb-6">
                <For
                    each=move || alerts.get()
                    key=|alert| *alert
                    children=move |alert| {
                        let class = if alert.is_warning() { "alert alert-warning" } else { "alert alert-success" };
                        view! {
                            <div role="alert" class=class>
                                <span>{alert.message()}</span>
                                {(alert == Alert::EmailNotVerified).then(|| view! {
                                    <button class="btn btn-sm"
                                        disabled=move || email_sent.get() || loading.get()
                                        on:click=on_resend
                                    >
                                        {move || if email_sent.get() { "Email sent" } else { "Resend email" }}
                                    </button>
                                })}
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <QuickLink title="Campaigns" list="/campaigns/list/all" create="/campaigns/create" enabled=enabled />
                    <QuickLink title="Coupons" list="/coupons/list/all" create="/coupons/create" enabled=enabled />
                    <QuickLink title="Outlets" list="/outlets/list" create="/outlets/create" enabled=enabled />
                </div>
            </Show>
        </Shell>
    }
}

#[component]
fn QuickLink(
    title: &'static str,
    list: &'static str,
    create: &'static str,
    enabled: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                <div class="card-actions justify-end">
                    <Link to=list class="btn btn-ghost btn-sm">"View"</Link>
                    {move || if enabled.get() {
                        view! { <Link to=create class="btn btn-primary btn-sm">"Create"</Link> }.into_any()
                    } else {
                        view! { <button class="btn btn-primary btn-sm" disabled=true>"Create"</button> }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
