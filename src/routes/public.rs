use std::sync::Arc;

use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;

use crate::config::SiteConfig;
use crate::contact::{ContactEcho, ContactFields};
use crate::events::ScrollSignal;
use crate::models::profile::ProfileData;
use crate::render::PageOptions;
use crate::theme::ThemeName;
use crate::view::PortfolioView;

/// Parse the `theme` query value. Absent means the view's initial theme.
fn requested_theme(theme: Option<&str>) -> Result<ThemeName, Status> {
    match theme {
        None => Ok(ThemeName::default()),
        Some(raw) => raw.parse().map_err(|e| {
            log::warn!("{}", e);
            Status::BadRequest
        }),
    }
}

/// Mount a view and bring it to `theme` through the toggle handler.
fn mount_view(profile: &Arc<ProfileData>, scroll: &ScrollSignal, theme: ThemeName) -> PortfolioView {
    let mut view = PortfolioView::mount(Arc::clone(profile), scroll);
    if view.state().theme != theme {
        view.toggle_theme();
    }
    view
}

fn page_options<'a>(config: &'a SiteConfig) -> PageOptions<'a> {
    PageOptions {
        title: config.title.as_deref(),
        banner: Some(&config.banner),
        contact: None,
    }
}

// ── Homepage ───────────────────────────────────────────

/// `y` replays a scroll offset before rendering, so the navbar comes out
/// as it would look at that position.
#[get("/?<theme>&<y>")]
pub fn homepage(
    profile: &State<Arc<ProfileData>>,
    config: &State<SiteConfig>,
    theme: Option<&str>,
    y: Option<f64>,
) -> Result<RawHtml<String>, Status> {
    let theme = requested_theme(theme)?;
    let scroll = ScrollSignal::new();
    let view = mount_view(profile, &scroll, theme);
    if let Some(offset) = y {
        scroll.emit(offset);
    }
    let page = view.render(&page_options(config));
    view.unmount();
    Ok(RawHtml(page.into_html()))
}

// ── Section navigation (no-script fallback) ────────────

#[get("/section/<id>")]
pub fn section(profile: &State<Arc<ProfileData>>, config: &State<SiteConfig>, id: &str) -> Redirect {
    let scroll = ScrollSignal::new();
    let view = mount_view(profile, &scroll, ThemeName::default());
    let mut page = view.render(&page_options(config));
    view.scroll_to_section(id, &mut page);
    match page.scroll_target() {
        Some(target) => Redirect::to(format!("/#{}", target)),
        None => Redirect::to("/"),
    }
}

// ── Contact (no-script fallback) ───────────────────────

/// Empty fields never reach this handler: the form guard answers 422 first.
#[post("/contact?<theme>", data = "<form>")]
pub fn contact_submit(
    profile: &State<Arc<ProfileData>>,
    config: &State<SiteConfig>,
    theme: Option<&str>,
    form: Form<ContactFields>,
) -> Result<RawHtml<String>, Status> {
    let theme = requested_theme(theme)?;
    let scroll = ScrollSignal::new();
    let mut view = mount_view(profile, &scroll, theme);

    let fields = form.into_inner();
    let acknowledgement = view.submit_contact(&fields).map_err(|e| {
        log::warn!("Contact form blocked: {}", e);
        Status::UnprocessableEntity
    })?;

    let echo = ContactEcho {
        fields,
        acknowledgement: Some(acknowledgement),
    };
    let options = PageOptions {
        contact: Some(&echo),
        ..page_options(config)
    };
    let page = view.render(&options);
    view.unmount();
    Ok(RawHtml(page.into_html()))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, section, contact_submit]
}
