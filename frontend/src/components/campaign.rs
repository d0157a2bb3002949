use super::fields::{TextField, ToggleField, format_datetime_local, parse_datetime_local};
use super::layout::Shell;
use super::{ErrorAlert, PageHandle};
use crate::auth::use_console;
use crate::web::router::use_router;
use leptos::prelude::*;
use vendor_console::pages::{CampaignForm, CampaignPage, FormMode, SubmitOutcome};

#[component]
pub fn CampaignFormView(mode: FormMode) -> impl IntoView {
    let router = use_router();
    let handle = PageHandle::mount(CampaignPage::new(use_console().api(), mode));
    let form = RwSignal::new(CampaignForm::default());
    let enabled = RwSignal::new(false);
    let saved = RwSignal::new(false);

    handle.run(move |page| async move {
        page.activate().await;
        let _ = form.try_set(page.form());
        let _ = enabled.try_set(page.actions_enabled());
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
    let title = match mode {
        FormMode::Create => "Create campaign",
        FormMode::Edit(_) => "Edit campaign",
    };

    view! {
        <Shell>
            <h1 class="text-2xl font-bold mb-4">{title}</h1>
            <Show when=move || saved.get()>
                <div role="alert" class="alert alert-success mb-4"><span>"Campaign saved."</span></div>
            </Show>
            <ErrorAlert error=handle.error() />

            <form class="card bg-base-100 shadow card-body" on:submit=on_submit>
                <TextField
                    label="Name"
                    required=true
                    value=Signal::derive(move || form.get().name)
                    on_input=move |v| form.update(|f| f.name = v)
                />
                <div class="grid grid-cols-2 gap-4">
                    <TextField
                        label="Start"
                        input_type="datetime-local"
                        required=true
                        value=Signal::derive(move || format_datetime_local(form.get().start))
                        on_input=move |v| form.update(|f| f.start = parse_datetime_local(&v))
                    />
                    <TextField
                        label="End"
                        input_type="datetime-local"
                        required=true
                        value=Signal::derive(move || format_datetime_local(form.get().end))
                        on_input=move |v| form.update(|f| f.end = parse_datetime_local(&v))
                    />
                </div>
                <ToggleField
                    label="Active"
                    checked=Signal::derive(move || form.get().active)
                    on_change=move |v| form.update(|f| f.active = v)
                />
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" disabled=move || loading.get() || !enabled.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </Shell>
    }
}
