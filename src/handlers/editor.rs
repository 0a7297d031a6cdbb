// src/handlers/editor.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    api::{ApiError, SharedApi},
    error::AppError,
    extract::{PageForm, PagePath},
    models::{
        form::{FormErrors, PostForm},
        post::Status,
    },
    views::pages::{self, EditorMode},
};

/// Empty form for a new post.
pub async fn new_post() -> Html<String> {
    pages::post_editor(EditorMode::Create, &PostForm::default(), &FormErrors::default())
}

/// Creates a post with the status of the pressed button.
///
/// Invalid input never reaches the API: the form comes back with its field
/// errors and the user's input intact.
pub async fn create_post(
    State(api): State<SharedApi>,
    PageForm(form): PageForm<PostForm>,
) -> Response {
    let form = form.normalized();
    let mode = EditorMode::Create;

    if let Err(errors) = form.check() {
        return rerender(mode, &form, errors, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let status = form.submitted_status();
    match api.create_post(&form.to_input(status)).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, %status, "Post created");
            Redirect::to("/").into_response()
        }
        Err(e) => write_failed(mode, &form, e, "Failed to create post"),
    }
}

/// Loads a post into the editor.
pub async fn edit_post(
    State(api): State<SharedApi>,
    PagePath(id): PagePath<i64>,
) -> Result<Html<String>, AppError> {
    let post = api.get_post(id).await?;
    let form = PostForm::from(&post);

    Ok(pages::post_editor(
        EditorMode::Edit {
            id,
            original_status: post.status,
        },
        &form,
        &FormErrors::default(),
    ))
}

/// Saves an edited post with the status of the pressed button.
pub async fn update_post(
    State(api): State<SharedApi>,
    PagePath(id): PagePath<i64>,
    PageForm(form): PageForm<PostForm>,
) -> Response {
    let form = form.normalized();
    let mode = EditorMode::Edit {
        id,
        // Only used for the Cancel link.
        original_status: form.original_status.unwrap_or(Status::Publish),
    };

    if let Err(errors) = form.check() {
        return rerender(mode, &form, errors, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let status = form.submitted_status();
    match api.update_post(id, &form.to_input(status)).await {
        Ok(_) => {
            tracing::info!(post_id = id, %status, "Post updated");
            Redirect::to("/").into_response()
        }
        Err(ApiError::NotFound) => AppError::NotFound("Post not found".to_string()).into_response(),
        Err(e) => write_failed(mode, &form, e, "Failed to update post"),
    }
}

fn rerender(mode: EditorMode, form: &PostForm, errors: FormErrors, status: StatusCode) -> Response {
    (status, pages::post_editor(mode, form, &errors)).into_response()
}

/// Puts the form back in front of the user after the API refused or failed a write.
fn write_failed(mode: EditorMode, form: &PostForm, err: ApiError, notice: &str) -> Response {
    match err {
        ApiError::Rejected { message, fields } => {
            tracing::warn!("Article API rejected the post: {:?} {:?}", message, fields);
            let mut errors = FormErrors::default();
            errors.merge_remote(message.as_deref(), &fields);
            if errors.is_empty() {
                errors.set_notice(notice);
            }
            rerender(mode, form, errors, StatusCode::UNPROCESSABLE_ENTITY)
        }
        other => {
            tracing::error!("{}: {}", notice, other);
            rerender(mode, form, FormErrors::with_notice(notice), StatusCode::BAD_GATEWAY)
        }
    }
}
