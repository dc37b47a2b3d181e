use textwrap::core::display_width;

/// Lays out a list row with the title on the left and the subtitle flush
/// right, the way a two-column detail cell reads. Falls back to a single
/// space between the two when `width` is too narrow.
pub fn align_columns(title: &str, subtitle: &str, width: usize) -> String {
    let used = display_width(title) + display_width(subtitle);
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", title, " ".repeat(gap), subtitle)
}

pub fn format_reading_count(count: usize) -> String {
    match count {
        1 => "1 reading".to_string(),
        n => format!("{} readings", n),
    }
}
