use std::sync::Arc;

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::models::profile::ProfileData;
use crate::theme::{self, ThemeTokens};

// ── Theme tokens ───────────────────────────────────────

#[get("/theme/<name>")]
pub fn theme_tokens(name: &str) -> Result<Json<&'static ThemeTokens>, Custom<Json<Value>>> {
    theme::resolve(name).map(Json).map_err(|e| {
        Custom(
            Status::BadRequest,
            Json(json!({ "error": e.to_string() })),
        )
    })
}

// ── Profile ────────────────────────────────────────────

#[get("/profile")]
pub fn profile(profile: &State<Arc<ProfileData>>) -> Json<ProfileData> {
    Json(ProfileData::clone(profile))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![theme_tokens, profile]
}
