use crate::models::profile::ProfileData;
use crate::render::html_escape;

const GITHUB_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/></svg>"#;

const LINKEDIN_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/></svg>"#;

const LEETCODE_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M13.483 0a1.374 1.374 0 0 0-.961.438L7.116 6.226l-3.854 4.126a5.266 5.266 0 0 0-1.209 2.104 5.35 5.35 0 0 0-.125.513 5.527 5.527 0 0 0 .062 2.362 5.83 5.83 0 0 0 .349 1.017 5.938 5.938 0 0 0 1.271 1.818l4.277 4.193.039.038c2.248 2.165 5.852 2.133 8.063-.074l2.396-2.392c.54-.54.54-1.414.003-1.955a1.378 1.378 0 0 0-1.951-.003l-2.396 2.392a3.021 3.021 0 0 1-4.205.038l-.02-.019-4.276-4.193c-.652-.64-.972-1.469-.948-2.263a2.68 2.68 0 0 1 .066-.523 2.545 2.545 0 0 1 .619-1.164L9.13 8.114c1.058-1.134 3.204-1.27 4.43-.278l3.501 2.831c.593.48 1.461.387 1.94-.207a1.384 1.384 0 0 0-.207-1.943l-3.5-2.831c-.8-.647-1.766-1.045-2.774-1.202l2.015-2.158A1.384 1.384 0 0 0 13.483 0zm-2.866 12.815a1.38 1.38 0 0 0-1.38 1.382 1.38 1.38 0 0 0 1.38 1.382H20.79a1.38 1.38 0 0 0 1.38-1.382 1.38 1.38 0 0 0-1.38-1.382z"/></svg>"#;

const EMAIL_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M0 3v18h24v-18h-24zm6.623 7.929l-4.623 5.712v-9.458l4.623 3.746zm-4.141-5.929h19.035l-9.517 7.713-9.518-7.713zm5.694 7.188l3.824 3.099 3.83-3.104 5.612 6.817h-18.779l5.513-6.812zm9.208-1.264l4.616-3.741v9.348l-4.616-5.607z"/></svg>"#;

/// One footer link: platform label, target URL, icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
    pub icon: &'static str,
}

/// Footer links in display order. URLs are taken as-is; email becomes `mailto:`.
pub fn social_links(profile: &ProfileData) -> Vec<SocialLink> {
    vec![
        SocialLink { label: "GitHub", href: profile.github.clone(), icon: GITHUB_ICON },
        SocialLink { label: "LinkedIn", href: profile.linkedin.clone(), icon: LINKEDIN_ICON },
        SocialLink { label: "LeetCode", href: profile.leetcode.clone(), icon: LEETCODE_ICON },
        SocialLink { label: "Email", href: format!("mailto:{}", profile.email), icon: EMAIL_ICON },
    ]
}

pub fn render_social_links(links: &[SocialLink]) -> String {
    let mut html = String::from("<div class=\"social-links\">");
    for link in links {
        // mailto opens in place; profile links open a new tab
        let target = if link.href.starts_with("mailto:") {
            ""
        } else {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        };
        html.push_str(&format!(
            "<a class=\"social-link\" href=\"{}\"{} title=\"{}\">{}</a>",
            html_escape(&link.href),
            target,
            link.label,
            link.icon
        ));
    }
    html.push_str("</div>");
    html
}

pub fn render_footer(profile: &ProfileData) -> String {
    format!(
        "<footer class=\"footer\"><div class=\"container\">{}\
         <p class=\"copyright\">&copy; {} {}. Crafted with passion &amp; code.</p>\
         </div></footer>",
        render_social_links(&social_links(profile)),
        profile.footer_year(),
        html_escape(&profile.name)
    )
}

/// Extract initials from a name: "John Smith" → "JS", "Alice" → "A".
pub(crate) fn author_initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.len() {
        0 => "?".to_string(),
        1 => parts[0]
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string(),
        _ => {
            let first = parts[0].chars().next().unwrap_or('?');
            let last = parts[parts.len() - 1].chars().next().unwrap_or('?');
            format!("{}{}", first.to_uppercase(), last.to_uppercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(author_initials("Albin Reji"), "AR");
        assert_eq!(author_initials("alice"), "A");
        assert_eq!(author_initials("Jean Luc Picard"), "JP");
        assert_eq!(author_initials("   "), "?");
    }

    #[test]
    fn test_social_links_verbatim_and_mailto() {
        let mut profile = ProfileData::builtin();
        profile.github = "not a url".into();
        let links = social_links(&profile);
        let labels: Vec<&str> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["GitHub", "LinkedIn", "LeetCode", "Email"]);
        assert_eq!(links[0].href, "not a url");
        assert_eq!(links[3].href, "mailto:albinrejim30@gmail.com");

        let html = render_social_links(&links);
        assert!(html.contains("href=\"not a url\""));
        assert!(html.contains("href=\"mailto:albinrejim30@gmail.com\" title=\"Email\""));
    }

    #[test]
    fn test_footer_copyright_line() {
        let html = render_footer(&ProfileData::builtin());
        assert!(html.contains("&copy; 2025 Albin Reji. Crafted with passion &amp; code."));
    }
}
