//! HTML worksheet generator.
//!
//! Produces a self-contained, printable page with all CSS inlined. Answers
//! sit in collapsed `<details>` blocks so the sheet can be handed out as is.

use studyquiz_core::model::Category;
use studyquiz_core::report::StudyDocument;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML worksheet from a study document.
pub fn generate_html(doc: &StudyDocument) -> String {
    let labels = doc.locale.labels();
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n",
        doc.locale
    ));
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>studyquiz</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    if doc.include.contains(Category::Discussion) && !doc.topics.is_empty() {
        html.push_str(&format!(
            "<section class=\"discussion\">\n<h2>{}</h2>\n<ol>\n",
            html_escape(labels.discussion)
        ));
        for topic in &doc.topics {
            html.push_str(&format!("<li>{}</li>\n", html_escape(topic)));
        }
        html.push_str("</ol>\n</section>\n");
    }

    if doc.include.contains(Category::TrueFalse) && !doc.quiz.tf.is_empty() {
        html.push_str(&format!(
            "<section class=\"true-false\">\n<h2>{}</h2>\n<ol>\n",
            html_escape(labels.true_false)
        ));
        for q in &doc.quiz.tf {
            let (class, verdict) = if q.answer {
                ("truthy", labels.truthy)
            } else {
                ("falsy", labels.falsy)
            };
            html.push_str(&format!(
                "<li>{}\n<details><summary>{}</summary>\n<p class=\"{}\">{}</p>\n<p class=\"explanation\">{}: {}</p>\n</details>\n</li>\n",
                html_escape(&q.statement),
                html_escape(labels.answer),
                class,
                html_escape(verdict),
                html_escape(labels.explanation),
                html_escape(&q.explanation),
            ));
        }
        html.push_str("</ol>\n</section>\n");
    }

    if doc.include.contains(Category::FillBlank) && !doc.quiz.blank.is_empty() {
        html.push_str(&format!(
            "<section class=\"fill-blank\">\n<h2>{}</h2>\n<ol>\n",
            html_escape(labels.fill_blank)
        ));
        for q in &doc.quiz.blank {
            html.push_str(&format!(
                "<li>{}\n<details><summary>{}</summary>\n<p>{}</p>\n</details>\n</li>\n",
                html_escape(&q.question),
                html_escape(labels.answer),
                html_escape(&q.answer),
            ));
        }
        html.push_str("</ol>\n</section>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --true: #dcfce7; --false: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --true: #064e3b; --false: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans KR', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h2 { margin-top: 2rem; border-bottom: 1px solid var(--border); }
li { margin: 0.75rem 0; line-height: 1.5; }
details { margin: 0.25rem 0 0 1rem; }
summary { cursor: pointer; color: #6b7280; }
.truthy { background: var(--true); display: inline-block; padding: 0 0.5rem; border-radius: 4px; }
.falsy { background: var(--false); display: inline-block; padding: 0 0.5rem; border-radius: 4px; }
.explanation { color: #6b7280; }
@media print { details { display: none; } }
"#;
