//! Portfolio section renderers.
//! Each one projects a slice of the profile into markup and nothing else:
//! source order is kept, every element gets one visual unit, and an empty
//! list renders its empty container.

pub mod script;
pub mod style;

use crate::designs::common::author_initials;
use crate::models::profile::{
    Certification, Education, Experience, ProfileData, Project, SkillCategory, Stat,
};
use crate::render::html_escape;
use crate::theme::ThemeTokens;
use crate::view::ViewState;

/// Anchors the navigation scrolls to.
pub const SECTION_IDS: [&str; 6] = ["hero", "about", "skills", "experience", "projects", "contact"];

/// Navbar shadow once the page is scrolled past the threshold.
pub const SCROLLED_SHADOW: &str = "0 10px 30px rgba(0,0,0,0.3)";

const NAV_LINKS: [(&str, &str); 5] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const ABOUT_SECOND_PARAGRAPH: &str = "With a strong foundation in both frontend and backend development, I enjoy tackling complex problems \
and creating solutions that make a real impact. My expertise spans from building secure REST APIs \
to crafting responsive user interfaces.";

/// Link that scrolls smoothly with the client script and falls back to `/section/<id>`.
fn section_link(class: &str, id: &str, label: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"/section/{}\" data-section=\"{}\">{}</a>",
        class, id, id, label
    )
}

fn external_link(class: &str, href: &str, label: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        class,
        html_escape(href),
        label
    )
}

// ── Navbar ─────────────────────────────────────────────

pub fn render_navbar(profile: &ProfileData, state: &ViewState) -> String {
    let shadow = if state.scrolled { SCROLLED_SHADOW } else { "none" };
    let next = state.theme.toggled();

    let mut links = String::new();
    for (id, label) in NAV_LINKS {
        links.push_str(&section_link("nav-link", id, label));
    }

    format!(
        "<nav id=\"navbar\" class=\"navbar\" style=\"box-shadow: {shadow}\">\
         <div class=\"container\">{logo}\
         <div class=\"nav-links\">{links}\
         <a class=\"theme-toggle\" href=\"/?theme={next}\" title=\"Switch to {next} theme\">{glyph}</a>\
         </div></div></nav>",
        shadow = shadow,
        logo = section_link("logo", "hero", &html_escape(&author_initials(&profile.name))),
        links = links,
        next = next,
        glyph = state.theme.toggle_glyph(),
    )
}

// ── Hero ───────────────────────────────────────────────

pub fn render_hero(profile: &ProfileData) -> String {
    format!(
        "<section id=\"hero\" class=\"hero\"><div class=\"container\"><div class=\"hero-content\">\
         <h1 class=\"hero-title\">{}</h1>\
         <h2 class=\"hero-subtitle\">{}</h2>\
         <p class=\"hero-description\">{}</p>\
         <div class=\"button-group\">{}{}</div>\
         </div></div></section>",
        html_escape(&profile.name),
        html_escape(&profile.role),
        html_escape(&profile.summary),
        section_link("button button-primary", "contact", "Get In Touch"),
        external_link("button", &profile.github, "View GitHub"),
    )
}

// ── About ──────────────────────────────────────────────

pub fn render_about(profile: &ProfileData) -> String {
    format!(
        "<section id=\"about\" class=\"section\"><div class=\"container\">\
         <h2 class=\"section-title\">About Me</h2>\
         <div class=\"about-grid\"><div class=\"about-text\">\
         <h3>Hello! I'm {first}</h3>\
         <p>A passionate {role} based in {location}. I specialize in building \
         high-performance, scalable web applications with a focus on clean architecture and modern technologies.</p>\
         <p>{second}</p>\
         </div>{stats}</div></div></section>",
        first = html_escape(profile.first_name()),
        role = html_escape(&profile.role),
        location = html_escape(&profile.location),
        second = ABOUT_SECOND_PARAGRAPH,
        stats = render_stats(&profile.stats),
    )
}

pub fn render_stats(stats: &[Stat]) -> String {
    let mut html = String::from("<div class=\"about-stats\">");
    for stat in stats {
        html.push_str(&format!(
            "<div class=\"stat-card\"><h4>{}</h4><p>{}</p></div>",
            html_escape(&stat.value),
            html_escape(&stat.label)
        ));
    }
    html.push_str("</div>");
    html
}

// ── Skills ─────────────────────────────────────────────

pub fn render_skills(categories: &[SkillCategory]) -> String {
    let mut html = String::from(
        "<section id=\"skills\" class=\"section\"><div class=\"container\">\
         <h2 class=\"section-title\">Skills &amp; Technologies</h2>\
         <div class=\"skills-grid\">",
    );
    for category in categories {
        html.push_str(&format!(
            "<div class=\"skill-category\"><h3>{}</h3>{}</div>",
            html_escape(&category.category),
            render_skill_tags(&category.skills)
        ));
    }
    html.push_str("</div></div></section>");
    html
}

pub fn render_skill_tags(skills: &[String]) -> String {
    let mut html = String::from("<div class=\"skill-tags\">");
    for skill in skills {
        html.push_str(&format!("<span class=\"skill-tag\">{}</span>", html_escape(skill)));
    }
    html.push_str("</div>");
    html
}

// ── Experience ─────────────────────────────────────────

pub fn render_experience(entries: &[Experience]) -> String {
    let mut html = String::from(
        "<section id=\"experience\" class=\"section\"><div class=\"container\">\
         <h2 class=\"section-title\">Professional Experience</h2>\
         <div class=\"timeline\">",
    );
    for exp in entries {
        html.push_str(&format!(
            "<div class=\"timeline-item\"><div class=\"timeline-card\">\
             <h3>{}</h3><h4>{}</h4><div class=\"period\">{} \u{2022} {}</div>{}\
             </div></div>",
            html_escape(&exp.title),
            html_escape(&exp.company),
            html_escape(&exp.period),
            html_escape(&exp.location),
            render_achievements(&exp.achievements)
        ));
    }
    html.push_str("</div></div></section>");
    html
}

pub fn render_achievements(achievements: &[String]) -> String {
    let mut html = String::from("<ul>");
    for achievement in achievements {
        html.push_str(&format!("<li>{}</li>", html_escape(achievement)));
    }
    html.push_str("</ul>");
    html
}

// ── Projects ───────────────────────────────────────────

pub fn render_projects(projects: &[Project]) -> String {
    let mut html = String::from(
        "<section id=\"projects\" class=\"section\"><div class=\"container\">\
         <h2 class=\"section-title\">Featured Projects</h2>\
         <div class=\"projects-grid\">",
    );
    for project in projects {
        html.push_str(&format!(
            "<div class=\"project-card\"><h3>{}</h3><p>{}</p>{}\
             <div class=\"project-links\">{}</div></div>",
            html_escape(&project.title),
            html_escape(&project.description),
            render_tech_stack(&project.tech),
            external_link("project-link", &project.link, "View Project \u{2192}")
        ));
    }
    html.push_str("</div></div></section>");
    html
}

pub fn render_tech_stack(tech: &[String]) -> String {
    let mut html = String::from("<div class=\"tech-stack\">");
    for t in tech {
        html.push_str(&format!("<span class=\"tech-badge\">{}</span>", html_escape(t)));
    }
    html.push_str("</div>");
    html
}

// ── Education & certifications ─────────────────────────

pub fn render_education(
    education: &Education,
    certifications: &[Certification],
    tokens: &ThemeTokens,
) -> String {
    let mut html = format!(
        "<section class=\"section\"><div class=\"container\">\
         <h2 class=\"section-title\">Education &amp; Certifications</h2>\
         <div class=\"timeline\">\
         <div class=\"timeline-item\"><div class=\"timeline-card\">\
         <h3>{}</h3><h4>{}</h4><div class=\"period\">{}</div>\
         <p class=\"cgpa\" style=\"margin-top: 10px; color: {}\">CGPA: {}</p>\
         </div></div>",
        html_escape(&education.degree),
        html_escape(&education.institution),
        html_escape(&education.period),
        tokens.accent,
        html_escape(&education.cgpa),
    );
    for cert in certifications {
        html.push_str(&format!(
            "<div class=\"timeline-item certification\"><div class=\"timeline-card\">\
             <h3>{}</h3><h4>{}</h4><div class=\"project-links\">{}</div>\
             </div></div>",
            html_escape(&cert.name),
            html_escape(&cert.issuer),
            external_link("project-link", &cert.link, "View Certificate \u{2192}")
        ));
    }
    html.push_str("</div></div></section>");
    html
}
