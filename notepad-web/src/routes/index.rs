use super::session_error_handler;
use crate::render;
use crate::SessionData;
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse};
use notepad::errors::SessionError;
use notepad::{NoteID, TodoSession};
use serde::Deserialize;
use std::time::Instant;

#[derive(Deserialize)]
struct ContentForm {
    content: String,
}

#[derive(Deserialize)]
struct AnswerForm {
    confirmed: bool,
}

fn see_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn render_page(session: &mut TodoSession, status: StatusCode, alert: Option<&str>) -> HttpResponse {
    session.dismiss_expired_notification(Instant::now());
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render::page(session, alert))
}

/// Redirect back to the page, or re-render it with the blocking message when the
/// submitted text was blank.
fn form_result<T>(session: &mut TodoSession, result: Result<T, SessionError>) -> HttpResponse {
    match result {
        Ok(_) => see_index(),
        Err(SessionError::Validation(e)) => render_page(
            session,
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(&e.to_string()),
        ),
        Err(e) => session_error_handler(&e),
    }
}

#[get("/health_check")]
#[instrument]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[get("/")]
#[instrument(skip(session))]
async fn index(session: web::Data<SessionData>) -> HttpResponse {
    let mut session = session.lock().await;
    render_page(&mut session, StatusCode::OK, None)
}

#[post("/todos")]
#[instrument(skip(session, form))]
async fn new_todo(
    session: web::Data<SessionData>,
    form: web::Form<ContentForm>,
) -> HttpResponse {
    let mut session = session.lock().await;
    let result = session.submit_new(&form.content);
    form_result(&mut session, result)
}

#[post("/todos/{note_id}/options")]
#[instrument(
    skip(session, params),
    fields(
        note_id = %params.0
    )
)]
async fn open_options(
    session: web::Data<SessionData>,
    params: web::Path<(u64,)>,
) -> HttpResponse {
    let (note_id,) = params.into_inner();
    session.lock().await.open_options(NoteID::new(note_id));
    see_index()
}

#[post("/drawer/close")]
#[instrument(skip(session))]
async fn close_drawer(session: web::Data<SessionData>) -> HttpResponse {
    session.lock().await.close_options();
    see_index()
}

#[post("/drawer/edit")]
#[instrument(skip(session))]
async fn open_edit(session: web::Data<SessionData>) -> HttpResponse {
    let mut session = session.lock().await;
    let result = session.open_edit();
    form_result(&mut session, result)
}

#[post("/drawer/edit/close")]
#[instrument(skip(session))]
async fn close_edit(session: web::Data<SessionData>) -> HttpResponse {
    session.lock().await.close_edit();
    see_index()
}

#[post("/drawer/edit/submit")]
#[instrument(skip(session, form))]
async fn submit_edit(
    session: web::Data<SessionData>,
    form: web::Form<ContentForm>,
) -> HttpResponse {
    let mut session = session.lock().await;
    let result = session.submit_edit(&form.content);
    form_result(&mut session, result)
}

#[post("/drawer/delete")]
#[instrument(skip(session))]
async fn request_delete(session: web::Data<SessionData>) -> HttpResponse {
    let mut session = session.lock().await;
    let result = session.request_delete();
    form_result(&mut session, result)
}

#[post("/drawer/delete/answer")]
#[instrument(skip(session, form))]
async fn answer_delete(
    session: web::Data<SessionData>,
    form: web::Form<AnswerForm>,
) -> HttpResponse {
    let mut session = session.lock().await;
    let result = session.answer_delete(form.confirmed);
    form_result(&mut session, result)
}

#[post("/notification/close")]
#[instrument(skip(session))]
async fn close_notification(session: web::Data<SessionData>) -> HttpResponse {
    session.lock().await.close_notification();
    see_index()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(index)
        .service(new_todo)
        .service(open_options)
        .service(close_drawer)
        .service(open_edit)
        .service(close_edit)
        .service(submit_edit)
        .service(request_delete)
        .service(answer_delete)
        .service(close_notification);
}
