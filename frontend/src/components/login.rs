use super::fields::TextField;
use super::{ErrorAlert, PageHandle};
use crate::auth::use_console;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use vendor_console::pages::{
    LoginForm, LoginPage, RegisterErrors, RegisterForm, RegisterPage, SubmitOutcome,
};

// ============================================================================
// 登录
// ============================================================================

#[component]
pub fn LoginView() -> impl IntoView {
    let router = use_router();
    let handle = PageHandle::mount(LoginPage::new(use_console().api()));
    let form = RwSignal::new(LoginForm::default());
    let failed = RwSignal::new(false);

    // 进入登录页即结束旧会话
    handle.with(|p| p.activate());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.run(move |page| async move {
            page.edit(|f| *f = form.get_untracked());
            let outcome = page.submit().await;
            let _ = failed.try_set(page.failed());
            if let Some(SubmitOutcome::Navigate(url)) = outcome {
                router.navigate(&url);
            }
        });
    };

    let loading = handle.loading();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Vendor Console"</h1>
                    <p class="text-base-content/70">"Sign in to manage your coupons"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || failed.get()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>"Login failed. Check your email and password."</span>
                            </div>
                        </Show>

                        <TextField
                            label="Email"
                            input_type="email"
                            required=true
                            value=Signal::derive(move || form.get().email)
                            on_input=move |v| form.update(|f| f.email = v)
                        />
                        <TextField
                            label="Password"
                            input_type="password"
                            required=true
                            value=Signal::derive(move || form.get().password)
                            on_input=move |v| form.update(|f| f.password = v)
                        />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || loading.get()>
                                {move || if loading.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "No account yet? "
                            <Link to="/register" class="link link-primary">"Register"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// 注册
// ============================================================================

#[component]
pub fn RegisterView() -> impl IntoView {
    let router = use_router();
    let handle = PageHandle::mount(RegisterPage::new(use_console().api()));
    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(RegisterErrors::default());

    handle.with(|p| p.activate());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.run(move |page| async move {
            page.edit(|f| *f = form.get_untracked());
            let outcome = page.submit().await;
            let _ = errors.try_set(page.errors());
            if let Some(SubmitOutcome::Navigate(url)) = outcome {
                router.navigate(&url);
            }
        });
    };

    let loading = handle.loading();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-4">"Create a vendor account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || errors.get().connection>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>"Could not reach the server. Try again."</span>
                            </div>
                        </Show>
                        <ErrorAlert error=Signal::derive(move || {
                            let e = errors.get();
                            if e.connection || e.username || e.email { None } else { handle.error().get() }
                        }) />

                        <TextField
                            label="Username"
                            required=true
                            value=Signal::derive(move || form.get().username)
                            on_input=move |v| form.update(|f| f.username = v)
                        />
                        <Show when=move || errors.get().username>
                            <span class="text-error text-sm">"This username is already taken."</span>
                        </Show>
                        <TextField
                            label="Email"
                            input_type="email"
                            required=true
                            value=Signal::derive(move || form.get().email)
                            on_input=move |v| form.update(|f| f.email = v)
                        />
                        <Show when=move || errors.get().email>
                            <span class="text-error text-sm">"This email is already registered."</span>
                        </Show>
                        <TextField
                            label="Password"
                            input_type="password"
                            required=true
                            value=Signal::derive(move || form.get().password)
                            on_input=move |v| form.update(|f| f.password = v)
                        />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || loading.get()>
                                "Register"
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            <Link to="/login" class="link link-primary">"Back to sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
