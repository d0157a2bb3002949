//! 表单字段的转换与通用输入组件

use leptos::prelude::*;
use vendor_console_shared::chrono::{DateTime, NaiveDateTime, Utc};

/// `<input type="datetime-local">` 使用的格式
const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

/// 输入值按 UTC 解释；空值或格式错误返回 `None`
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_datetime_local(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format(DATETIME_LOCAL).to_string())
        .unwrap_or_default()
}

/// 列表中显示的日期
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// 带标签的文本输入
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                class="input input-bordered w-full"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

/// 带标签的开关
#[component]
pub fn ToggleField(
    #[prop(into)] label: String,
    checked: Signal<bool>,
    on_change: impl Fn(bool) + 'static,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label cursor-pointer">
                <span class="label-text">{label}</span>
                <input type="checkbox" class="toggle toggle-primary"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change(event_target_checked(&ev))
                />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendor_console_shared::chrono::TimeZone;

    #[test]
    fn test_datetime_local_parsing() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_datetime_local("2024-03-01T09:30"), Some(expected));
        assert_eq!(parse_datetime_local("2024-03-01T09:30:00"), Some(expected));
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("yesterday"), None);
    }

    #[test]
    fn test_datetime_local_formatting() {
        let value = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_datetime_local(Some(value)), "2024-03-01T09:30");
        assert_eq!(format_datetime_local(None), "");
    }
}
