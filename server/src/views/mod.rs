//! Server-rendered HTML.
//!
//! Pages are assembled with `format!` into [`layout`]. Every value that came
//! from a user goes through [`escape`] first.

use axum::response::Html;
use chrono::{DateTime, Utc};

use crate::forms::FieldErrors;
use crate::utils::flash::{Flash, FlashKind};

pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

const STYLE: &str = r#"
    body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 0; background: #f6f6f8; color: #222; }
    nav { background: #1d1d28; padding: 12px 24px; }
    nav a { color: #fff; margin-right: 18px; text-decoration: none; font-weight: 600; }
    main { max-width: 960px; margin: 24px auto; padding: 0 16px; }
    .flash { padding: 10px 14px; border-radius: 4px; margin-bottom: 16px; }
    .flash-success { background: #e3f6e8; border: 1px solid #7bc48f; }
    .flash-error { background: #fbe4e4; border: 1px solid #d77; }
    .field { margin-bottom: 12px; }
    .field label { display: block; font-weight: 600; margin-bottom: 4px; }
    .field input[type=text], .field select { width: 100%; padding: 6px; box-sizing: border-box; }
    .field-error { color: #b22; font-size: 0.9em; }
    .card { background: #fff; border-radius: 6px; padding: 12px 16px; margin-bottom: 12px; }
    .card img { max-width: 120px; }
    .genres span { background: #eee; border-radius: 10px; padding: 2px 8px; margin-right: 4px; }
"#;

/// How a timestamp is spelled out on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Sat 05, 21, 2035 9:30PM`
    Medium,
    /// `Saturday May, 21, 2035 at 9:30PM`
    Full,
}

pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    match format {
        DateFormat::Medium => value.format("%a %m, %d, %Y %-I:%M%p").to_string(),
        DateFormat::Full => value.format("%A %B, %-d, %Y at %-I:%M%p").to_string(),
    }
}

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let notice = flash.map(render_flash).unwrap_or_default();
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title} | Gigbook</title>
    <style>{STYLE}</style>
</head>
<body>
    <nav>
        <a href="/">Gigbook</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
    </nav>
    <main>
        {notice}
        {body}
    </main>
</body>
</html>"#,
        title = escape(title),
    ))
}

fn render_flash(flash: &Flash) -> String {
    let class = match flash.kind {
        FlashKind::Success => "flash flash-success",
        FlashKind::Error => "flash flash-error",
    };
    format!(
        r#"<div class="{class}" role="alert">{}</div>"#,
        escape(&flash.message)
    )
}

pub(crate) fn search_box(action: &str, placeholder: &str, term: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="{action}">
            <input type="search" name="search_term" placeholder="{placeholder}" value="{}">
            <button type="submit">Search</button>
        </form>"#,
        escape(term)
    )
}

pub(crate) fn field_errors(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .iter()
        .map(|message| format!(r#"<div class="field-error">{}</div>"#, escape(message)))
        .collect()
}

pub(crate) fn text_field(
    errors: &FieldErrors,
    name: &str,
    label: &str,
    value: Option<&str>,
    attrs: &str,
) -> String {
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <input type="text" id="{name}" name="{name}" value="{value}" {attrs}>
            {errors}
        </div>"#,
        value = escape(value.unwrap_or_default()),
        errors = field_errors(errors, name),
    )
}

pub(crate) fn select_field(
    errors: &FieldErrors,
    name: &str,
    label: &str,
    choices: &[&str],
    selected: &str,
) -> String {
    let options: String = choices
        .iter()
        .map(|choice| {
            let marker = if *choice == selected { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(choice)
            )
        })
        .collect();
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <select id="{name}" name="{name}">
                <option value="">--</option>
                {options}
            </select>
            {errors}
        </div>"#,
        errors = field_errors(errors, name),
    )
}

pub(crate) fn multi_select_field(
    errors: &FieldErrors,
    name: &str,
    label: &str,
    choices: &[&str],
    selected: &[String],
) -> String {
    let options: String = choices
        .iter()
        .map(|choice| {
            let marker = if selected.iter().any(|s| s.as_str() == *choice) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(choice)
            )
        })
        .collect();
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <select id="{name}" name="{name}" multiple size="8">
                {options}
            </select>
            {errors}
        </div>"#,
        errors = field_errors(errors, name),
    )
}

pub(crate) fn checkbox_field(name: &str, label: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(
        r#"<div class="field">
            <label><input type="checkbox" name="{name}" value="y"{marker}> {label}</label>
        </div>"#
    )
}

pub(crate) fn genre_tags(genres: &[String]) -> String {
    let tags: String = genres
        .iter()
        .map(|genre| format!("<span>{}</span>", escape(genre)))
        .collect();
    format!(r#"<p class="genres">{tags}</p>"#)
}

pub(crate) fn optional_link(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            r#"<p>{label}: <a href="{href}" rel="noopener" target="_blank">{href}</a></p>"#,
            href = escape(href)
        ),
        None => String::new(),
    }
}

pub(crate) fn image(src: Option<&str>, alt: &str) -> String {
    match src {
        Some(src) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape(src),
            escape(alt)
        ),
        None => String::new(),
    }
}

/// Button that issues `DELETE action` and follows the response home.
pub(crate) fn delete_button(action: &str, label: &str) -> String {
    format!(
        r#"<button type="button" onclick="fetch('{action}', {{ method: 'DELETE', redirect: 'manual' }}).then(function () {{ window.location = '/'; }});">{label}</button>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"R&B" 'live'</b>"#),
            "&lt;b&gt;&quot;R&amp;B&quot; &#x27;live&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_format_datetime() {
        let start = Utc.with_ymd_and_hms(2035, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(
            format_datetime(&start, DateFormat::Medium),
            "Mon 05, 21, 2035 9:30PM"
        );
        assert_eq!(
            format_datetime(&start, DateFormat::Full),
            "Monday May, 21, 2035 at 9:30PM"
        );
    }

    #[test]
    fn test_layout_renders_flash() {
        let Html(page) = layout("Home", Some(&Flash::error("<oops>")), "<p>hi</p>");
        assert!(page.contains("flash-error"));
        assert!(page.contains("&lt;oops&gt;"));
        assert!(page.contains("<p>hi</p>"));
    }

    #[test]
    fn test_select_marks_selected() {
        let html = select_field(&FieldErrors::new(), "state", "State", &["CA", "NY"], "NY");
        assert!(html.contains(r#"<option value="NY" selected>"#));
        assert!(!html.contains(r#"<option value="CA" selected>"#));
    }
}
