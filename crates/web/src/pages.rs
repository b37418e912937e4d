//! Static page rendering. Every outcome, success or failure, is an HTML
//! page served with status 200.

pub const INDEX: &str = include_str!("../templates/index.html");

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn success() -> String {
    page(
        "Registration Successful",
        "<h1>Success!</h1>\n<p>Your details have been registered.</p>\n<a href=\"/\">Go Back</a>",
    )
}

pub fn submission_error(detail: &str) -> String {
    page(
        "Registration Error",
        &format!(
            "<h1>Error During Submission</h1>\n<p>An error occurred: {}</p>\n<a href=\"/\">Try Again</a>",
            escape(detail)
        ),
    )
}

pub fn configuration_error(detail: &str) -> String {
    page(
        "Server Configuration Error",
        &format!(
            "<h1>Server Configuration Error</h1>\n<p>The server could not connect to the spreadsheet. Please contact the administrator.</p>\n<p><i>Detail: {}</i></p>",
            escape(detail)
        ),
    )
}

/// Minimal escaping for error text interpolated into markup.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn error_pages_embed_the_detail() {
        assert!(submission_error("quota exceeded").contains("quota exceeded"));
        assert!(configuration_error("no credentials").contains("no credentials"));
    }

    #[test]
    fn index_contains_the_form_fields() {
        for needle in ["name=\"mac\"", "name=\"apikey\"", "name=\"enddate\"", "/submit"] {
            assert!(INDEX.contains(needle), "form is missing {needle}");
        }
    }
}
