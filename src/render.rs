use crate::config::Banner;
use crate::contact::ContactEcho;
use crate::designs::{common, contact, portfolio, shell};
use crate::models::profile::ProfileData;
use crate::view::{ViewState, Viewport};

/// Optional pieces of the page that come from configuration or the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageOptions<'a> {
    pub title: Option<&'a str>,
    pub banner: Option<&'a Banner>,
    pub contact: Option<&'a ContactEcho>,
}

/// A rendered document. Doubles as the viewport for section navigation:
/// ids resolve against the markup exactly as `getElementById` would see it.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    scroll_target: Option<String>,
}

impl RenderedPage {
    pub fn new(html: String) -> Self {
        RenderedPage {
            html,
            scroll_target: None,
        }
    }

    /// Last section a scroll was requested for.
    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl Viewport for RenderedPage {
    fn has_element(&self, id: &str) -> bool {
        let plain = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        plain && self.html.contains(&format!(" id=\"{}\"", id))
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scroll_target = Some(id.to_string());
    }
}

/// Renders the whole page for one view state.
pub fn render_page(profile: &ProfileData, state: &ViewState, options: &PageOptions<'_>) -> RenderedPage {
    let tokens = state.tokens();

    let mut body = String::new();
    body.push_str(&portfolio::render_navbar(profile, state));
    body.push_str("<main>");
    body.push_str(&portfolio::render_hero(profile));
    body.push_str(&portfolio::render_about(profile));
    body.push_str(&portfolio::render_skills(&profile.skills));
    body.push_str(&portfolio::render_experience(&profile.experience));
    body.push_str(&portfolio::render_projects(&profile.projects));
    body.push_str(&portfolio::render_education(
        &profile.education,
        &profile.certifications,
        tokens,
    ));
    body.push_str(&contact::render_section(state.theme, options.contact));
    body.push_str("</main>");
    body.push_str(&common::render_footer(profile));

    let default_title;
    let title = match options.title {
        Some(t) => t,
        None => {
            default_title = format!("{} | {}", profile.name, profile.role);
            &default_title
        }
    };

    RenderedPage::new(shell::render_document(
        title,
        state.theme,
        &portfolio::style::stylesheet(tokens),
        &body,
        &portfolio::script::client_script(),
        options.banner,
    ))
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Text content of an HTML fragment: tags, `<style>` and `<script>` bodies removed,
/// entities left as written.
pub fn text_content(html: &str) -> String {
    let mut out = String::with_capacity(html.len() / 2);
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let skip_to = if tail.starts_with("<style") {
            tail.find("</style>").map(|i| i + "</style>".len())
        } else if tail.starts_with("<script") {
            tail.find("</script>").map(|i| i + "</script>".len())
        } else {
            tail.find('>').map(|i| i + 1)
        };
        match skip_to {
            Some(n) => rest = &tail[n..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_text_content_strips_tags_and_blocks() {
        let html = "<div><style>p{color:red}</style><p>Hi <b>there</b></p><script>x()</script>!</div>";
        assert_eq!(text_content(html), "Hi there!");
    }

    #[test]
    fn test_viewport_resolves_ids_in_markup() {
        let mut page = RenderedPage::new("<section id=\"about\"></section>".to_string());
        assert!(page.has_element("about"));
        assert!(!page.has_element("abo"));
        assert!(!page.has_element("about\" x=\""));
        page.scroll_into_view("about");
        assert_eq!(page.scroll_target(), Some("about"));
    }
}
