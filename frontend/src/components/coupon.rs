//! 优惠券表单
//!
//! 优惠结构随类型切换；图片读入内存后交给视图模型校验大小。

use super::fields::{TextField, ToggleField, format_datetime_local, parse_datetime_local};
use super::layout::Shell;
use super::{ErrorAlert, PageHandle};
use crate::auth::use_console;
use crate::web::FetchHttpClient;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vendor_console::multipart::FilePart;
use vendor_console::pages::{CouponForm, CouponPage, DealFields, FormMode, SubmitOutcome};
use vendor_console_shared::{Campaign, Category, CouponType, DealKind, Interest, Outlet};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

type Handle = PageHandle<CouponPage<FetchHttpClient>>;

/// 下拉与多选框的数据源
#[derive(Clone, Default)]
struct Choices {
    campaigns: Vec<Campaign>,
    outlets: Vec<Outlet>,
    interests: Vec<Interest>,
    categories: Vec<Category>,
    types: Vec<CouponType>,
}

/// 把界面上的表单写回视图模型，执行操作后再读回
fn apply(handle: Handle, form: RwSignal<CouponForm>, op: impl FnOnce(&CouponPage<FetchHttpClient>)) {
    let updated = handle.with(|page| {
        page.edit(|f| *f = form.get_untracked());
        op(page);
        page.form()
    });
    if let Some(updated) = updated {
        form.set(updated);
    }
}

async fn read_file(file: web_sys::File) -> Result<FilePart, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FilePart::new(file.name(), file.type_(), bytes))
}

#[component]
pub fn CouponFormView(mode: FormMode) -> impl IntoView {
    let router = use_router();
    let handle: Handle = PageHandle::mount(CouponPage::new(use_console().api(), mode));
    let form = RwSignal::new(CouponForm::default());
    let choices = RwSignal::new(Choices::default());
    let enabled = RwSignal::new(false);
    let image_valid = RwSignal::new(true);
    let saved = RwSignal::new(false);

    handle.run(move |page| async move {
        page.activate().await;
        let _ = form.try_set(page.form());
        let _ = enabled.try_set(page.actions_enabled());
        let _ = choices.try_set(Choices {
            campaigns: page.campaigns(),
            outlets: page.outlets(),
            interests: page.interests(),
            categories: page.categories(),
            types: page.types(),
        });
    });

    let on_image = move |ev: leptos::ev::Event| {
        let Some(file) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        spawn_local(async move {
            match read_file(file).await {
                Ok(part) => {
                    let mut valid = true;
                    apply(handle, form, |page| valid = page.choose_image(part));
                    let _ = image_valid.try_set(valid);
                }
                Err(e) => tracing::warn!(error = %e, "failed to read selected image"),
            }
        });
    };

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
        FormMode::Create => "Create coupon",
        FormMode::Edit(_) => "Edit coupon",
    };

    view! {
        <Shell>
            <h1 class="text-2xl font-bold mb-4">{title}</h1>
            <Show when=move || saved.get()>
                <div role="alert" class="alert alert-success mb-4"><span>"Coupon saved."</span></div>
            </Show>
            <ErrorAlert error=handle.error() />

            <form class="card bg-base-100 shadow card-body gap-2" on:submit=on_submit>
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
                    label="Terms and conditions"
                    value=Signal::derive(move || form.get().terms)
                    on_input=move |v| form.update(|f| f.terms = v)
                />

                // 兑换码
                <div class="form-control">
                    <label class="label"><span class="label-text">"Code"</span></label>
                    <div class="join">
                        <input type="text" class="input input-bordered join-item w-full font-mono"
                            prop:value=move || form.get().code
                            on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                        />
                        <button type="button" class="btn join-item"
                            on:click=move |_| apply(handle, form, |page| page.generate_code())
                        >
                            "Generate"
                        </button>
                    </div>
                </div>

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

                // 数量
                <div class="grid grid-cols-2 gap-4 items-end">
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Amount"</span></label>
                        <input type="number" min="0"
                            class="input input-bordered w-full"
                            disabled=move || form.get().infinite
                            prop:value=move || form.get().amount.to_string()
                            on:input=move |ev| {
                                if let Ok(v) = event_target_value(&ev).parse::<i64>() {
                                    form.update(|f| f.amount = v);
                                }
                            }
                        />
                    </div>
                    <ToggleField
                        label="Unlimited"
                        checked=Signal::derive(move || form.get().infinite)
                        on_change=move |v| form.update(|f| f.infinite = v)
                    />
                </div>

                <div class="grid grid-cols-3 gap-4">
                    <TaxonomySelect
                        label="Type"
                        options=Signal::derive(move || choices.get().types.iter().map(|t| (t.id, t.name.clone())).collect())
                        selected=Signal::derive(move || Some(form.get().ctype))
                        on_select=move |id| form.update(|f| if let Some(id) = id { f.ctype = id })
                    />
                    <TaxonomySelect
                        label="Category"
                        options=Signal::derive(move || choices.get().categories.iter().map(|c| (c.id, c.name.clone())).collect())
                        selected=Signal::derive(move || form.get().category)
                        on_select=move |id| form.update(|f| f.category = id)
                    />
                    <TaxonomySelect
                        label="Campaign"
                        options=Signal::derive(move || choices.get().campaigns.iter().map(|c| (c.id, c.name.clone())).collect())
                        selected=Signal::derive(move || form.get().campaign)
                        on_select=move |id| form.update(|f| f.campaign = id)
                    />
                </div>

                <DealSection form=form />

                // 兴趣标签
                <fieldset class="form-control">
                    <legend class="label-text font-bold mb-1">"Interests"</legend>
                    <div class="flex flex-wrap gap-3">
                        <For
                            each=move || choices.get().interests
                            key=|i| i.id
                            children=move |interest| {
                                let id = interest.id;
                                view! {
                                    <label class="label cursor-pointer gap-2">
                                        <input type="checkbox" class="checkbox checkbox-sm"
                                            prop:checked=move || form.get().interests.contains(&id)
                                            on:change=move |_| form.update(|f| f.toggle_interest(id))
                                        />
                                        <span class="label-text">{interest.name.clone()}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                </fieldset>

                // 门店
                <fieldset class="form-control">
                    <legend class="label-text font-bold mb-1">"Outlets"</legend>
                    <div class="flex gap-2 mb-2">
                        <button type="button" class="btn btn-xs"
                            on:click=move |_| apply(handle, form, |page| page.select_all_outlets())
                        >
                            "Select all"
                        </button>
                        <button type="button" class="btn btn-xs"
                            on:click=move |_| apply(handle, form, |page| page.unselect_all_outlets())
                        >
                            "Clear"
                        </button>
                    </div>
                    <div class="flex flex-col gap-1">
                        <For
                            each=move || choices.get().outlets
                            key=|o| o.id
                            children=move |outlet| {
                                let id = outlet.id;
                                view! {
                                    <label class="label cursor-pointer justify-start gap-2">
                                        <input type="checkbox" class="checkbox checkbox-sm"
                                            prop:checked=move || form.get().outlets.contains(&id)
                                            on:change=move |_| form.update(|f| f.toggle_outlet(id))
                                        />
                                        <span class="label-text">{outlet.name.clone()}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                </fieldset>

                // 图片
                <div class="form-control">
                    <label class="label"><span class="label-text">"Image"</span></label>
                    {move || form.get().image_url.map(|url| view! {
                        <img src=url class="w-32 h-32 object-cover rounded mb-2" />
                    })}
                    <input type="file" accept="image/*"
                        class="file-input file-input-bordered w-full"
                        on:change=on_image
                    />
                    <Show when=move || !image_valid.get()>
                        <span class="text-error text-sm">"The selected image is too large."</span>
                    </Show>
                </div>

                <div class="grid grid-cols-3 gap-4">
                    <ToggleField
                        label="Active"
                        checked=Signal::derive(move || form.get().active)
                        on_change=move |v| form.update(|f| f.active = v)
                    />
                    <ToggleField
                        label="Published"
                        checked=Signal::derive(move || form.get().published)
                        on_change=move |v| form.update(|f| f.published = v)
                    />
                    <ToggleField
                        label="Advertisement"
                        checked=Signal::derive(move || form.get().advertisement)
                        on_change=move |v| form.update(|f| f.advertisement = v)
                    />
                </div>

                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary"
                        disabled=move || loading.get() || !enabled.get() || !image_valid.get()
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </Shell>
    }
}

/// 单选下拉，空值表示未选择
#[component]
fn TaxonomySelect(
    label: &'static str,
    options: Signal<Vec<(u64, String)>>,
    selected: Signal<Option<u64>>,
    on_select: impl Fn(Option<u64>) + 'static,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label"><span class="label-text">{label}</span></label>
            <select class="select select-bordered w-full"
                on:change=move |ev| on_select(event_target_value(&ev).parse().ok())
            >
                <option value="" selected=move || selected.get().is_none()>"-"</option>
                <For
                    each=move || options.get()
                    key=|(id, _)| *id
                    children=move |(id, name)| view! {
                        <option value=id.to_string() selected=move || selected.get() == Some(id)>{name}</option>
                    }
                />
            </select>
        </div>
    }
}

/// 随优惠券类型切换的优惠输入
#[component]
fn DealSection(form: RwSignal<CouponForm>) -> impl IntoView {
    let deal = move || form.get().deal;
    let set_deal = move |f: &dyn Fn(&mut DealFields)| form.update(|c| c.edit_deal(|d| f(d)));

    move || match DealKind::from_code(form.get().ctype) {
        Ok(DealKind::Sale) => view! {
            <div class="form-control">
                <label class="label"><span class="label-text">"Discount (%)"</span></label>
                <input type="number" min="0" max="100" class="input input-bordered w-full"
                    prop:value=move || deal().sale.to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                            set_deal(&|d| d.sale = v);
                        }
                    }
                />
            </div>
        }
        .into_any(),
        Ok(DealKind::BuyGetNext) => view! {
            <div class="grid grid-cols-2 gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">"Buy"</span></label>
                    <input type="number" min="0" class="input input-bordered w-full"
                        prop:value=move || deal().buy.to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                set_deal(&|d| d.buy = v);
                            }
                        }
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Get next"</span></label>
                    <input type="text" class="input input-bordered w-full"
                        prop:value=move || deal().next
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            set_deal(&|d| d.next = v.clone());
                        }
                    />
                </div>
            </div>
        }
        .into_any(),
        Ok(DealKind::Bundle) => view! {
            <div class="grid grid-cols-3 gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">"Items"</span></label>
                    <input type="number" min="0" class="input input-bordered w-full"
                        prop:value=move || deal().amount.to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                set_deal(&|d| d.amount = v);
                            }
                        }
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Cost"</span></label>
                    <input type="number" min="0" step="any" class="input input-bordered w-full"
                        prop:value=move || deal().cost.to_string()
                        on:change=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                set_deal(&|d| d.cost = v);
                            }
                        }
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Save"</span></label>
                    <input type="number" min="0" step="any" class="input input-bordered w-full"
                        prop:value=move || deal().save.to_string()
                        on:change=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                set_deal(&|d| d.save = v);
                            }
                        }
                    />
                </div>
            </div>
        }
        .into_any(),
        Err(_) => view! {
            <div role="alert" class="alert alert-warning">
                <span>"Unknown coupon type."</span>
            </div>
        }
        .into_any(),
    }
}
