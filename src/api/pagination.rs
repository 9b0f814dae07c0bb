use serde::Serialize;

/// One slot of the page-button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageEntry {
    Page { value: i64 },
    Ellipsis,
}

/// Compute the page-button strip for `(current, total)`: the first and last
/// page always show, a one-page window around the current page, and
/// ellipsis markers where pages are collapsed. Short ranges show every
/// page.
pub fn page_strip(current: i64, total: i64) -> Vec<PageEntry> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= 7 {
        return (1..=total).map(|value| PageEntry::Page { value }).collect();
    }

    let window_start = (current - 1).max(2);
    let window_end = (current + 1).min(total - 1);

    let mut strip = vec![PageEntry::Page { value: 1 }];

    if window_start > 2 {
        strip.push(PageEntry::Ellipsis);
    }
    for value in window_start..=window_end {
        strip.push(PageEntry::Page { value });
    }
    if window_end < total - 1 {
        strip.push(PageEntry::Ellipsis);
    }

    strip.push(PageEntry::Page { value: total });
    strip
}
