use polls_common::Question;

use crate::infrastructure::http::routes;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

pub fn index_page(questions: &[Question]) -> String {
    let body = if questions.is_empty() {
        format!("<p>{}</p>\n", NO_POLLS_MESSAGE)
    } else {
        let items = questions
            .iter()
            .map(|question| {
                format!(
                    "  <li><a href=\"{}\">{}</a></li>\n",
                    routes::detail_url(question.id),
                    escape(question.text.as_ref())
                )
            })
            .collect::<String>();
        format!("<ul>\n{}</ul>\n", items)
    };

    layout("Polls", &body)
}

pub fn detail_page(question: &Question) -> String {
    let text = escape(question.text.as_ref());
    let body = format!(
        "<h1>{}</h1>\n<p><a href=\"{}\">Back to polls</a></p>\n",
        text,
        routes::index_url()
    );
    layout(&text, &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        title, body
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}
