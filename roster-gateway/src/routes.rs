//! Axum route handlers for the Roster API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use roster_core::{
    Description, HeroDetail, HeroId, HeroPowerDetail, HeroSummary, PowerId, PowerView, Strength,
};
use roster_store::Repository;

use crate::error::GatewayError;

// ── Request bodies ────────────────────────────────────────────────────────────

/// Body for `PATCH /powers/{id}`. Only the description may change.
#[derive(Debug, Deserialize)]
pub struct UpdatePowerBody {
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for `POST /hero_powers`.
///
/// Fields are optional at the type level so each missing one can be named
/// in the validation response instead of failing at deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateHeroPowerBody {
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub hero_id: Option<i64>,
    #[serde(default)]
    pub power_id: Option<i64>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given repository.
pub fn create_router(repository: Repository) -> Router {
    Router::new()
        .route("/heroes", get(list_heroes))
        .route("/heroes/{id}", get(get_hero))
        .route("/powers", get(list_powers))
        .route("/powers/{id}", get(get_power).patch(update_power))
        .route("/hero_powers", post(create_hero_power))
        .route("/health", get(health))
        .with_state(repository)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /heroes` — list all heroes, shallow (no association collections).
///
/// # Errors
/// Returns [`GatewayError::Store`] if the store fails.
pub async fn list_heroes(
    State(repo): State<Repository>,
) -> Result<impl IntoResponse, GatewayError> {
    let heroes = repo.list_heroes().await?;
    let summaries: Vec<HeroSummary> = heroes.into_iter().map(HeroSummary::from).collect();
    Ok(Json(summaries))
}

/// `GET /heroes/{id}` — one hero, deep (with its hero-powers).
///
/// # Errors
/// Returns [`GatewayError::HeroNotFound`] if the id has no row.
pub async fn get_hero(
    State(repo): State<Repository>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, GatewayError> {
    let (hero, associations) = repo
        .get_hero_detail(HeroId(id))
        .await?
        .ok_or(GatewayError::HeroNotFound)?;
    Ok(Json(HeroDetail::new(hero, associations)))
}

/// `GET /powers` — list all powers.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the store fails.
pub async fn list_powers(
    State(repo): State<Repository>,
) -> Result<impl IntoResponse, GatewayError> {
    let powers = repo.list_powers().await?;
    let views: Vec<PowerView> = powers.into_iter().map(PowerView::from).collect();
    Ok(Json(views))
}

/// `GET /powers/{id}` — one power.
///
/// # Errors
/// Returns [`GatewayError::PowerNotFound`] if the id has no row.
pub async fn get_power(
    State(repo): State<Repository>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, GatewayError> {
    let power = repo
        .get_power(PowerId(id))
        .await?
        .ok_or(GatewayError::PowerNotFound)?;
    Ok(Json(PowerView::from(power)))
}

/// `PATCH /powers/{id}` — update the description, nothing else.
///
/// An unknown id is reported as 404 before the body is examined; a missing,
/// mistyped, or too-short `description` is rejected with 400 and nothing is
/// written.
///
/// # Errors
/// Returns [`GatewayError::PowerNotFound`] or [`GatewayError::Validation`].
pub async fn update_power(
    State(repo): State<Repository>,
    Path(id): Path<i64>,
    body: Result<Json<UpdatePowerBody>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    if repo.get_power(PowerId(id)).await?.is_none() {
        return Err(GatewayError::PowerNotFound);
    }

    let Json(body) = body.map_err(reject_body)?;
    let description = body
        .description
        .ok_or_else(|| GatewayError::Validation(vec!["description is required".to_owned()]))?;
    let description = Description::new(description)
        .map_err(|e| GatewayError::Validation(vec![e.to_string()]))?;

    let power = repo
        .update_power_description(PowerId(id), &description)
        .await?
        .ok_or(GatewayError::PowerNotFound)?;
    Ok(Json(PowerView::from(power)))
}

/// `POST /hero_powers` — associate a hero with a power at a strength.
///
/// All three fields are required; the referenced rows must exist. Replies
/// 200 (not 201; the documented contract for this endpoint) with the new
/// association, hero and power nested one level deep.
///
/// # Errors
/// Returns [`GatewayError::Validation`] listing every missing or invalid
/// field, or a broken-reference [`GatewayError::Store`].
pub async fn create_hero_power(
    State(repo): State<Repository>,
    body: Result<Json<CreateHeroPowerBody>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(body) = body.map_err(reject_body)?;

    let mut errors = Vec::new();
    let strength = match body.strength.as_deref() {
        None => {
            errors.push("strength is required".to_owned());
            None
        }
        Some(raw) => match raw.parse::<Strength>() {
            Ok(strength) => Some(strength),
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        },
    };
    if body.hero_id.is_none() {
        errors.push("hero_id is required".to_owned());
    }
    if body.power_id.is_none() {
        errors.push("power_id is required".to_owned());
    }

    let (Some(strength), Some(hero_id), Some(power_id)) =
        (strength, body.hero_id, body.power_id)
    else {
        return Err(GatewayError::Validation(errors));
    };

    let created = repo
        .create_hero_power(strength, HeroId(hero_id), PowerId(power_id))
        .await?;
    Ok((StatusCode::OK, Json(HeroPowerDetail::from(created))))
}

// ── Body rejection ────────────────────────────────────────────────────────────

/// Malformed or mistyped JSON surfaces as a validation failure, not as the
/// framework's default rejection page.
fn reject_body(rejection: JsonRejection) -> GatewayError {
    GatewayError::Validation(vec![rejection.body_text()])
}
