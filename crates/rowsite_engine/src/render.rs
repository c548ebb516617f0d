use rowsite_core::{escape_html, timestamp_to_date, Row};

/// Renders rows into one `<article>` block each, in input order, joined by
/// newlines. Every field is escaped independently; the language is
/// upper-cased before escaping; the source link block is emitted only when
/// the link is non-empty after escaping.
pub fn render_rows(rows: &[Row]) -> String {
    rows.iter().map(render_row).collect::<Vec<_>>().join("\n")
}

fn render_row(row: &Row) -> String {
    let topic = escape_html(row.topic.as_deref().unwrap_or("(untitled)"));
    let lang = escape_html(&row.lang.as_deref().unwrap_or("").to_uppercase());
    let date = escape_html(&timestamp_to_date(row.date.as_ref()));
    let full_text = escape_html(row.full_text.as_deref().unwrap_or(""));
    let link = escape_html(row.link.as_deref().unwrap_or(""));

    let source = if link.is_empty() {
        String::new()
    } else {
        format!("\n  <div class=\"source\"><a href=\"{link}\">{link}</a></div>")
    };

    format!(
        "<article>\n  \
         <h2>{topic}</h2>\n  \
         <div class=\"badges\"><span class=\"chip\">{lang}</span> <span class=\"chip\">{date}</span></div>\n  \
         <p>{full_text}</p>{source}\n\
         </article>\n"
    )
}
