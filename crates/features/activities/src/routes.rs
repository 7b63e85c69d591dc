use crate::Activities;
use crate::error::{ActivityError, ErrorDetail};
use axum::Json;
use axum::extract::{Path, Query, State};
use mhs_domain::activity::Activity;
use mhs_domain::constants::ACTIVITIES_TAG;
use mhs_kernel::server::ApiState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes owned by the activities slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_activities))
        .routes(routes!(signup_for_activity))
}

#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = OK, description = "All activities with their rosters", body = BTreeMap<String, Activity>),
    ),
    tag = ACTIVITIES_TAG,
)]
async fn list_activities(
    State(state): State<ApiState>,
) -> Result<Json<BTreeMap<String, Activity>>, ActivityError> {
    let activities = state.try_get_slice::<Activities>()?;
    Ok(Json(activities.list()))
}

#[derive(Debug, Deserialize, IntoParams)]
struct SignupParams {
    /// Student email address.
    email: String,
}

/// Signup confirmation.
#[derive(Debug, Serialize, ToSchema)]
struct SignupResponse {
    /// Confirmation referencing the activity and email.
    message: String,
}

#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    params(
        ("activity_name" = String, Path, description = "Activity to sign up for"),
        SignupParams,
    ),
    responses(
        (status = OK, description = "Student enrolled", body = SignupResponse),
        (status = BAD_REQUEST, description = "Duplicate signup, full activity, or bad email", body = ErrorDetail),
        (status = NOT_FOUND, description = "Unknown activity", body = ErrorDetail),
    ),
    tag = ACTIVITIES_TAG,
)]
async fn signup_for_activity(
    State(state): State<ApiState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<SignupResponse>, ActivityError> {
    let activities = state.try_get_slice::<Activities>()?;
    let message = activities.signup(&activity_name, &params.email)?;
    Ok(Json(SignupResponse { message }))
}
