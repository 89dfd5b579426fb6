use super::domain::EligibilityResult;
use super::intake::{ProfileForm, ProfileFormError, HSS_CHOICES};

pub const PAGE_TITLE: &str = "Placement Eligibility Checker";
pub const NO_COMPANIES_NOTICE: &str = "No eligible companies found.";

/// What to show below the form.
#[derive(Debug, Clone, Copy)]
pub enum PageOutcome<'a> {
    Blank,
    Evaluated(&'a EligibilityResult),
    Rejected(&'a ProfileFormError),
}

/// Renders the eligibility form page, echoing back the submitted values.
pub fn render_page(form: &ProfileForm, notice: Option<&str>, outcome: PageOutcome<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str("<h1>Placement Eligibility Prediction System</h1>\n");

    if let Some(notice) = notice {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape(notice)));
    }

    html.push_str("<p>Enter your academic details below to check placement eligibility:</p>\n");
    html.push_str(&render_form(form));

    match outcome {
        PageOutcome::Blank => {}
        PageOutcome::Evaluated(result) => html.push_str(&render_results(result)),
        PageOutcome::Rejected(error) => {
            html.push_str(&format!(
                "<p class=\"error\">{}</p>\n",
                escape(&error.to_string())
            ));
        }
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_form(form: &ProfileForm) -> String {
    let mut html = String::from("<form method=\"post\" action=\"/check\">\n");
    html.push_str(&format!(
        "<label>Enter CGPA (0 - 10) <input type=\"number\" name=\"cgpa\" min=\"0\" max=\"10\" step=\"0.1\" value=\"{}\"></label>\n",
        escape(&form.cgpa)
    ));

    let has_internship = form.has_internship();
    html.push_str("<label>Internship <select name=\"internship\">");
    html.push_str(&format!(
        "<option value=\"0\"{}>No internship</option>",
        selected(!has_internship)
    ));
    html.push_str(&format!(
        "<option value=\"1\"{}>Has internship</option>",
        selected(has_internship)
    ));
    html.push_str("</select></label>\n");

    html.push_str(&format!(
        "<label>Known Programming Languages (comma-separated) <input type=\"text\" name=\"languages\" value=\"{}\"></label>\n",
        escape(&form.languages)
    ));

    html.push_str("<label>HSS Background <select name=\"hss\">");
    for choice in HSS_CHOICES {
        html.push_str(&format!(
            "<option value=\"{choice}\"{}>{choice}</option>",
            selected(form.hss.trim().eq_ignore_ascii_case(choice))
        ));
    }
    html.push_str("</select></label>\n");
    html.push_str("<button type=\"submit\">Check Eligibility</button>\n</form>\n");
    html
}

fn render_results(result: &EligibilityResult) -> String {
    let mut html = String::from("<section id=\"results\">\n<h2>Results:</h2>\n");
    html.push_str(&format!(
        "<p><strong>Eligibility Status:</strong> {}</p>\n",
        result.status_label()
    ));
    html.push_str(&format!(
        "<p><strong>Placement Probability:</strong> {}</p>\n",
        result.probability_label()
    ));

    if result.eligible_companies.is_empty() {
        html.push_str(&format!("<p class=\"info\">{NO_COMPANIES_NOTICE}</p>\n"));
    } else {
        html.push_str("<h3>Eligible Companies:</h3>\n");
        html.push_str(&render_list(&result.eligible_companies));
    }

    if !result.suggestions.is_empty() {
        html.push_str("<h3>Skill Enhancement Suggestions:</h3>\n");
        html.push_str(&render_list(&result.suggestions));
    }

    html.push_str("</section>\n");
    html
}

fn render_list(items: &[String]) -> String {
    let mut html = String::from("<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    html.push_str("</ul>\n");
    html
}

fn selected(flag: bool) -> &'static str {
    if flag {
        " selected"
    } else {
        ""
    }
}

pub(crate) fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
