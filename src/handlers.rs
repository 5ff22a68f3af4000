use crate::errors::{AppError, AppResult};
use crate::export::{students_csv, EXPORT_FILENAME};
use crate::models::StudentInput;
use crate::state::AppState;
use crate::stats::phone_length_report;
use crate::ui::{render_add_form, render_home, render_update_form};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form,
};

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let students = state.store.list_all().await?;
    Ok(Html(render_home(&students)))
}

pub async fn add_form() -> Html<String> {
    Html(render_add_form())
}

pub async fn add_student(
    State(state): State<AppState>,
    Form(input): Form<StudentInput>,
) -> AppResult<Redirect> {
    state.store.create(&input).await?;
    Ok(Redirect::to("/"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let student = state.store.get(parse_id(&id)?).await?;
    Ok(Html(render_update_form(&student)))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<StudentInput>,
) -> AppResult<Redirect> {
    state.store.update(parse_id(&id)?, &input).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_id(&id)?;
    state.store.get(id).await?;
    state.store.delete(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn export_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = state.store.list_all().await?;
    let body = students_csv(&students)?;
    let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

pub async fn phone_length_stats(State(state): State<AppState>) -> AppResult<String> {
    let students = state.store.list_all().await?;
    Ok(phone_length_report(&students))
}

// Paths whose id segment is not an integer name no record.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("student {raw} not found")))
}
