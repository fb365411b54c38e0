use contracts::shared::list_utils::Collator;
use std::cmp::Ordering;

/// `String.prototype.localeCompare` with the browser's default locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCollator;

impl Collator for BrowserCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        js_sys::JsString::from(a)
            .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
            .cmp(&0)
    }
}
