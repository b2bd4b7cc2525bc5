//! Compact display of large counts (stars, issues, totals).

/// Renders `count` with three significant figures and a `K`/`M` suffix.
///
/// Counts below one thousand are printed as is.
pub fn humanize_count(count: u64) -> String {
    if count >= 1_000_000 {
        return format!("{}M", significant(count as f64 / 1_000_000.0));
    }
    if count >= 1_000 {
        let thousands = significant(count as f64 / 1_000.0);
        // 999_950 and up round to 1000K
        if thousands == "1000" {
            return "1M".to_string();
        }
        return format!("{thousands}K");
    }
    count.to_string()
}

/// Three significant figures without trailing zeros, for values >= 1.
fn significant(value: f64) -> String {
    let decimals = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
