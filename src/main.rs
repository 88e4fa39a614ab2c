#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::figment::Figment;
use rocket::fs::{FileServer, Options};
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};

mod boot;
mod config;
mod contact;
mod designs;
mod error;
mod events;
mod models;
mod render;
mod routes;
mod theme;
mod view;


use config::SiteConfig;
use models::profile::ProfileData;

fn error_page(code: u16, message: &str) -> RawHtml<String> {
    RawHtml(format!(
        "<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>{}</h1><p>{}</p><a href='/'>← Home</a></body></html>",
        code, message
    ))
}

#[catch(400)]
fn bad_request() -> RawHtml<String> {
    error_page(400, "Bad request.")
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    error_page(404, "Page not found.")
}

#[catch(422)]
fn unprocessable() -> RawHtml<String> {
    error_page(422, "Please fill in every field.")
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    error_page(500, "Internal server error.")
}

/// Assemble the server from a configuration source.
pub(crate) fn build_rocket(figment: Figment) -> Rocket<Build> {
    let config = SiteConfig::from_figment(&figment);
    let profile = Arc::new(ProfileData::load_or_builtin(config.profile.as_deref()));
    let static_dir = config.static_dir.clone();

    rocket::custom(figment)
        .manage(profile)
        .manage(config)
        .mount("/static", FileServer::new(static_dir, Options::Index | Options::Missing))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![bad_request, not_found, unprocessable, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let figment = rocket::Config::figment();
    // Boot check: verify directories and assets before serving
    boot::run(&SiteConfig::from_figment(&figment));

    build_rocket(figment)
}
