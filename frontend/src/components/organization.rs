use super::fields::TextField;
use super::layout::Shell;
use super::{ErrorAlert, PageHandle};
use crate::auth::use_console;
use crate::web::router::use_router;
use leptos::prelude::*;
use vendor_console::pages::{OrganizationForm, OrganizationPage, SubmitOutcome};

/// 组织资料：没有组织时创建，否则编辑
#[component]
pub fn OrganizationView() -> impl IntoView {
    let router = use_router();
    let handle = PageHandle::mount(OrganizationPage::new(use_console().api()));
    let form = RwSignal::new(OrganizationForm::default());
    let created = RwSignal::new(false);
    let verified = RwSignal::new(false);
    let saved = RwSignal::new(false);

    handle.run(move |page| async move {
        page.activate().await;
        let _ = form.try_set(page.form());
        let _ = created.try_set(page.is_created());
        let _ = verified.try_set(page.already_verified());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        saved.set(false);
        handle.run(move |page| async move {
            page.edit(|f| *f = form.get_untracked());
            match page.submit().await {
                Some(SubmitOutcome::Navigate(url)) => router.navigate(&url),
                Some(SubmitOutcome::Stay) => {
                    let _ = form.try_set(page.form());
                    let _ = saved.try_set(true);
                }
                None => {}
            }
        });
    };

    let loading = handle.loading();

    view! {
        <Shell>
            <h1 class="text-2xl font-bold mb-4">
                {move || if created.get() { "Edit organization" } else { "Create organization" }}
            </h1>
            <Show when=move || verified.get()>
                <div role="alert" class="alert alert-success mb-4">
                    <span>"Your organization is verified."</span>
                </div>
            </Show>
            <Show when=move || saved.get()>
                <div role="alert" class="alert alert-success mb-4">
                    <span>"Saved."</span>
                </div>
            </Show>
            <ErrorAlert error=handle.error() />

            <form class="card bg-base-100 shadow card-body" on:submit=on_submit>
                <TextField
                    label="Name"
                    required=true
                    value=Signal::derive(move || form.get().name)
                    on_input=move |v| form.update(|f| f.name = v)
                />
                <TextField
                    label="Address"
                    value=Signal::derive(move || form.get().address)
                    on_input=move |v| form.update(|f| f.address = v)
                />
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" disabled=move || loading.get()>"Save"</button>
                </div>
            </form>
        </Shell>
    }
}
