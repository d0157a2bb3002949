//! 页面框架：导航栏与 404

use crate::web::router::Link;
use leptos::prelude::*;

/// 已登录页面的公共框架
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm px-4">
                <div class="flex-1">
                    <Link to="/" class="btn btn-ghost text-xl">"Vendor Console"</Link>
                </div>
                <div class="flex-none gap-1">
                    <Link to="/campaigns/list/all" class="btn btn-ghost btn-sm">"Campaigns"</Link>
                    <Link to="/coupons/list/all" class="btn btn-ghost btn-sm">"Coupons"</Link>
                    <Link to="/outlets/list" class="btn btn-ghost btn-sm">"Outlets"</Link>
                    <Link to="/organization" class="btn btn-ghost btn-sm">"Organization"</Link>
                </div>
            </div>
            <main class="container mx-auto p-4 max-w-5xl">{children()}</main>
        </div>
    }
}

#[component]
pub fn NotFoundView() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <Link to="/" class="btn btn-primary mt-6">"Back to home"</Link>
            </div>
        </div>
    }
}
