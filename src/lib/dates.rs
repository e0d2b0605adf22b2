//! Human-friendly rendering of server timestamps. The API returns ISO 8601
//! strings; lists show them as relative time and fall back to the raw value
//! when a timestamp cannot be parsed.

use wasm_bindgen::JsValue;

/// Formats an ISO timestamp as "N minutes ago" style text.
pub(crate) fn format_from_now(iso: &str) -> String {
    let then_ms = js_sys::Date::new(&JsValue::from_str(iso)).get_time();
    if then_ms.is_nan() {
        return iso.to_string();
    }
    let elapsed = (js_sys::Date::now() - then_ms) / 1000.0;
    relative_label(elapsed as i64)
}

fn relative_label(seconds: i64) -> String {
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    plural(months / 12, "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::relative_label;

    #[test]
    fn relative_label_buckets_elapsed_time() {
        assert_eq!(relative_label(-5), "just now");
        assert_eq!(relative_label(30), "just now");
        assert_eq!(relative_label(60), "1 minute ago");
        assert_eq!(relative_label(180), "3 minutes ago");
        assert_eq!(relative_label(3 * 3600), "3 hours ago");
        assert_eq!(relative_label(26 * 3600), "1 day ago");
        assert_eq!(relative_label(45 * 86_400), "1 month ago");
        assert_eq!(relative_label(800 * 86_400), "2 years ago");
    }
}
