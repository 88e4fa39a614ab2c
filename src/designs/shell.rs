//! Root shell: the HTML document around the portfolio, plus the banner block.

use crate::config::Banner;
use crate::render::html_escape;
use crate::theme::ThemeName;

pub fn render_document(
    title: &str,
    theme: ThemeName,
    stylesheet: &str,
    body: &str,
    script: &str,
    banner: Option<&Banner>,
) -> String {
    let banner_html = banner
        .filter(|b| b.enabled)
        .map(render_banner)
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\
\n<html lang=\"en\" data-theme=\"{theme}\">\
\n<head>\
\n<meta charset=\"utf-8\">\
\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
\n<title>{title}</title>\
\n<style>\n{stylesheet}\n</style>\
\n</head>\
\n<body>\
\n<div class=\"app\">\
\n{body}\
\n{banner_html}\
\n</div>\
\n<script>\n{script}\n</script>\
\n</body>\
\n</html>\n",
        theme = theme,
        title = html_escape(title),
        stylesheet = stylesheet,
        body = body,
        banner_html = banner_html,
        script = script,
    )
}

fn render_banner(banner: &Banner) -> String {
    format!(
        "<header class=\"app-header\">\
         <img src=\"{}\" class=\"app-logo\" alt=\"logo\">\
         <p>{}</p>\
         <a class=\"app-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\
         </header>",
        html_escape(&banner.logo),
        html_escape(&banner.caption),
        html_escape(&banner.link),
        html_escape(&banner.link_text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_follows_config() {
        let banner = Banner::default();
        let html = render_document("T", ThemeName::Dark, "", "<main></main>", "", Some(&banner));
        assert!(html.contains("<img src=\"/static/logo.svg\" class=\"app-logo\" alt=\"logo\">"));
        assert!(html.contains(">Learn Rocket</a>"));

        let hidden = Banner { enabled: false, ..Banner::default() };
        let html = render_document("T", ThemeName::Dark, "", "<main></main>", "", Some(&hidden));
        assert!(!html.contains("app-header"));
    }

    #[test]
    fn test_document_marks_theme() {
        let html = render_document("A & B", ThemeName::Light, "", "", "", None);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"light\">"));
        assert!(html.contains("<title>A &amp; B</title>"));
    }
}
