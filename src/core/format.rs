// File: src/core/format.rs
use crate::core::types::Locale;

/// Formats `n` with the locale's thousands grouping, e.g. `6000` -> `"6,000"`.
pub fn format_count(n: usize, locale: Locale) -> String {
    let digits = n.to_string();
    let sep = locale.thousands_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
