//! Route table and handlers.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use campus_service::student::StudentQuery;
use campus_service::view::{GroupView, StudentDetails, StudentInfo};
use serde::Serialize;
use surrealdb::Connection;

use crate::dto::{GroupCreateBody, StudentCreateBody, StudentUpdateBody};
use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

/// Body of a successful creation: `{ "id": "..." }`.
#[derive(Debug, Serialize)]
struct Created {
    id: String,
}

pub fn router<C: Connection + Clone>(state: AppState<C>) -> Router {
    Router::new()
        .route("/api/groups", get(list_groups::<C>).post(create_group::<C>))
        .route("/api/students", post(create_student::<C>))
        .route(
            "/api/students/{id}",
            get(get_student::<C>)
                .patch(update_student::<C>)
                .delete(remove_student::<C>),
        )
        .route(
            "/api/students/groupId/{groupId}",
            get(list_students_by_group::<C>),
        )
        .route("/api/students/_search", post(search_students::<C>))
        .with_state(state)
}

async fn list_groups<C: Connection + Clone>(
    State(state): State<AppState<C>>,
) -> Result<axum::Json<Vec<GroupView>>, ApiError> {
    Ok(axum::Json(state.groups.list().await?))
}

async fn create_group<C: Connection + Clone>(
    State(state): State<AppState<C>>,
    Json(body): Json<GroupCreateBody>,
) -> Result<(StatusCode, axum::Json<Created>), ApiError> {
    let id = state.groups.create(body.into_domain()?).await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(Created { id: id.to_string() }),
    ))
}

async fn get_student<C: Connection + Clone>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<axum::Json<StudentDetails>, ApiError> {
    Ok(axum::Json(state.students.get(&id).await?))
}

async fn create_student<C: Connection + Clone>(
    State(state): State<AppState<C>>,
    Json(body): Json<StudentCreateBody>,
) -> Result<(StatusCode, axum::Json<Created>), ApiError> {
    let id = state.students.create(body.into_domain()?).await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(Created { id: id.to_string() }),
    ))
}

async fn update_student<C: Connection + Clone>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
    Json(body): Json<StudentUpdateBody>,
) -> Result<StatusCode, ApiError> {
    state.students.update(&id, body.into_domain()?).await?;
    Ok(StatusCode::OK)
}

async fn list_students_by_group<C: Connection + Clone>(
    State(state): State<AppState<C>>,
    Path(group_id): Path<String>,
) -> Result<axum::Json<Vec<StudentInfo>>, ApiError> {
    Ok(axum::Json(state.students.list_by_group(&group_id).await?))
}

async fn search_students<C: Connection + Clone>(
    State(state): State<AppState<C>>,
    Json(query): Json<StudentQuery>,
) -> Result<axum::Json<Vec<StudentInfo>>, ApiError> {
    Ok(axum::Json(state.students.search(query).await?))
}

async fn remove_student<C: Connection + Clone>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.students.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
