//! Rubric page renderer
//!
//! Renders the grouped rubric as a self-contained HTML page.

use crate::domain::entities::{Criterion, DomainGroup};

/// Render the rubric page
pub fn render_rubric_page(groups: &[DomainGroup], demo_mode: bool) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<title>Rubric Grader</title>\n");
    buf.push_str("</head>\n<body>\n");
    buf.push_str("<h1>Rubric Grader</h1>\n");

    if demo_mode {
        buf.push_str(
            "<p class=\"banner\">Demo mode: grades are not sent to Canvas.</p>\n",
        );
    }

    if groups.is_empty() {
        buf.push_str("<p><em>No criteria configured. Activate a model to get started.</em></p>\n");
    }

    for group in groups {
        buf.push_str(&render_group(group));
    }

    buf.push_str("</body>\n</html>\n");
    buf
}

fn render_group(group: &DomainGroup) -> String {
    let mut buf = String::new();
    buf.push_str("<section class=\"domain\">\n");
    buf.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape(&group.domain)));
    for criterion in &group.criteria {
        buf.push_str(&render_criterion(criterion));
    }
    buf.push_str("</ul>\n</section>\n");
    buf
}

fn render_criterion(criterion: &Criterion) -> String {
    let mut line = format!(
        "<li data-id=\"{}\"><strong>{}</strong> (max {}",
        escape(&criterion.id),
        escape(&criterion.title),
        criterion.max_score
    );

    if criterion.weight != 1.0 {
        line.push_str(&format!(", weight {}", criterion.weight));
    }
    line.push(')');

    if !criterion.description.is_empty() {
        line.push_str(&format!(" - {}", escape(&criterion.description)));
    }

    format!("{}</li>\n", line)
}

/// Minimal HTML escaping for text and attribute values
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
