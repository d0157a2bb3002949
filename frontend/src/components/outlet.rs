use super::fields::TextField;
use super::layout::Shell;
use super::{ErrorAlert, PageHandle};
use crate::auth::use_console;
use crate::web::router::use_router;
use leptos::prelude::*;
use vendor_console::pages::{FormMode, OutletForm, OutletPage, SubmitOutcome};

/// 坐标输入：失焦时解析，格式错误时保持原值
#[component]
fn CoordinateField(
    label: &'static str,
    value: Signal<f64>,
    on_change: impl Fn(f64) + 'static,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input type="number" step="any" required
                class="input input-bordered w-full"
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                        on_change(v);
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn OutletFormView(mode: FormMode) -> impl IntoView {
    let router = use_router();
    let handle = PageHandle::mount(OutletPage::new(use_console().api(), mode));
    let form = RwSignal::new(OutletForm::default());
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
        FormMode::Create => "Create outlet",
        FormMode::Edit(_) => "Edit outlet",
    };

    view! {
        <Shell>
            <h1 class="text-2xl font-bold mb-4">{title}</h1>
            <Show when=move || saved.get()>
                <div role="alert" class="alert alert-success mb-4"><span>"Outlet saved."</span></div>
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
                    label="Description"
                    value=Signal::derive(move || form.get().description)
                    on_input=move |v| form.update(|f| f.description = v)
                />
                <TextField
                    label="Address"
                    value=Signal::derive(move || form.get().address)
                    on_input=move |v| form.update(|f| f.address = v)
                />
                <div class="grid grid-cols-2 gap-4">
                    <CoordinateField
                        label="Latitude"
                        value=Signal::derive(move || form.get().latitude)
                        on_change=move |v| form.update(|f| f.latitude = v)
                    />
                    <CoordinateField
                        label="Longitude"
                        value=Signal::derive(move || form.get().longitude)
                        on_change=move |v| form.update(|f| f.longitude = v)
                    />
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" disabled=move || loading.get() || !enabled.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </Shell>
    }
}
