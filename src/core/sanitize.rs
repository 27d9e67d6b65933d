// src/core/sanitize.rs
// String cleanup plus the site's composite cell formats.

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Parse a number with optional comma grouping: `"1,234.5"` → 1234.5.
/// Empty strings and the site's `-` placeholder read as 0.
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() || t == "-" {
        return Some(0.0);
    }
    t.replace(',', "").parse::<f64>().ok()
}

/// Parse a percentage cell: `"97%"` → 97.0. Bare numbers pass through.
pub fn parse_percent(s: &str) -> Option<f64> {
    let t = s.trim();
    parse_number(t.strip_suffix('%').unwrap_or(t))
}

/// Split a fused amount cell `"123456$45.2%"` into (total, share-of-group %).
/// A missing share reads as 0 (single-player tables have none).
pub fn split_amount(s: &str) -> Option<(f64, f64)> {
    match s.split_once('$') {
        Some((amt, pct)) => Some((parse_number(amt)?, parse_percent(pct)?)),
        None => Some((parse_number(s)?, 0.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_with_grouping() {
        assert_eq!(parse_number("1,234"), Some(1234.0));
        assert_eq!(parse_number("12,345.67"), Some(12345.67));
        assert_eq!(parse_number("-"), Some(0.0));
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn percent_cells() {
        assert_eq!(parse_percent("97%"), Some(97.0));
        assert_eq!(parse_percent("12.5%"), Some(12.5));
        assert_eq!(parse_percent("88"), Some(88.0));
    }

    #[test]
    fn fused_amount_cells() {
        assert_eq!(split_amount("123456$45.2%"), Some((123456.0, 45.2)));
        assert_eq!(split_amount("9,876$3.1%"), Some((9876.0, 3.1)));
        assert_eq!(split_amount("500"), Some((500.0, 0.0)));
    }
}
