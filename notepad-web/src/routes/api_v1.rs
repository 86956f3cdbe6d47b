use super::session_error_handler;
use crate::SessionData;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use notepad::errors::SessionError;
use notepad::validation::normalize_submission;
use notepad::{NoteID, Severity};
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;

#[derive(Deserialize)]
struct NotePostData {
    content: String,
}

#[derive(Deserialize)]
struct NotificationPostData {
    message: String,
    severity: Option<Severity>,
    /// Missing falls back to the configured default; 0 disables auto-hide.
    auto_hide_duration_ms: Option<u64>,
}

#[derive(Deserialize)]
struct SelectionPostData {
    id: NoteID,
}

#[derive(Deserialize)]
struct AnswerPostData {
    confirmed: bool,
}

#[get("/todos")]
#[instrument(skip(session))]
async fn get_todos(session: web::Data<SessionData>) -> impl Responder {
    let session = session.lock().await;
    HttpResponse::Ok().json(session.store().notes())
}

#[post("/todos")]
#[instrument(skip(session, note))]
async fn new_todo(
    session: web::Data<SessionData>,
    note: web::Json<NotePostData>,
) -> impl Responder {
    let res = session.lock().await.submit_new(&note.content);
    match res {
        Ok(id) => HttpResponse::Ok().json(json!({ "id": id })),
        Err(e) => session_error_handler(&e),
    }
}

#[get("/todos/{note_id}")]
#[instrument(
    skip(session, params),
    fields(
        note_id = %params.0
    )
)]
async fn get_todo(
    session: web::Data<SessionData>,
    params: web::Path<(u64,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id = NoteID::new(note_id);
    let session = session.lock().await;
    match session.store().find_by_id(id) {
        Some(note) => HttpResponse::Ok().json(note),
        None => session_error_handler(&SessionError::NoteNotExist(id)),
    }
}

#[put("/todos/{note_id}")]
#[instrument(
    skip(session, params, note),
    fields(
        note_id = %params.0
    )
)]
async fn modify_todo(
    session: web::Data<SessionData>,
    params: web::Path<(u64,)>,
    note: web::Json<NotePostData>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id = NoteID::new(note_id);
    let content = match normalize_submission(&note.content) {
        Ok(content) => content,
        Err(e) => return session_error_handler(&SessionError::from(e)),
    };
    let mut session = session.lock().await;
    let modified = session.store_mut().modify_by_id(id, content).is_some();
    HttpResponse::Ok().json(json!({ "id": id, "modified": modified }))
}

#[delete("/todos/{note_id}")]
#[instrument(
    skip(session, params),
    fields(
        note_id = %params.0
    )
)]
async fn remove_todo(
    session: web::Data<SessionData>,
    params: web::Path<(u64,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id = NoteID::new(note_id);
    let removed = session.lock().await.store_mut().remove_by_id(id).is_some();
    HttpResponse::Ok().json(json!({ "id": id, "removed": removed }))
}

#[get("/notification")]
#[instrument(skip(session))]
async fn get_notification(session: web::Data<SessionData>) -> impl Responder {
    let mut session = session.lock().await;
    session.dismiss_expired_notification(Instant::now());
    let center = session.notification();
    HttpResponse::Ok().json(json!({
        "visible": center.is_visible(),
        "notification": center.current(),
    }))
}

#[post("/notification")]
#[instrument(skip(session, notification))]
async fn open_notification(
    session: web::Data<SessionData>,
    notification: web::Json<NotificationPostData>,
) -> impl Responder {
    let NotificationPostData {
        message,
        severity,
        auto_hide_duration_ms,
    } = notification.into_inner();
    let mut session = session.lock().await;
    let center = session.notification_mut();
    let duration = auto_hide_duration_ms.or(center.default_auto_hide_duration_ms());
    center.open_with(message, severity.unwrap_or_default(), duration);
    HttpResponse::Ok().json(center.current())
}

#[delete("/notification")]
#[instrument(skip(session))]
async fn close_notification(session: web::Data<SessionData>) -> impl Responder {
    session.lock().await.close_notification();
    HttpResponse::Ok().finish()
}

#[get("/selection")]
#[instrument(skip(session))]
async fn get_selection(session: web::Data<SessionData>) -> impl Responder {
    let session = session.lock().await;
    HttpResponse::Ok().json(json!({
        "selection": session.selection(),
        "note": session.selected_note(),
        "pending_deletion": session.pending_deletion(),
    }))
}

#[post("/selection")]
#[instrument(skip(session, selection))]
async fn open_selection(
    session: web::Data<SessionData>,
    selection: web::Json<SelectionPostData>,
) -> impl Responder {
    let mut session = session.lock().await;
    session.open_options(selection.id);
    HttpResponse::Ok().json(session.selection())
}

#[delete("/selection")]
#[instrument(skip(session))]
async fn close_selection(session: web::Data<SessionData>) -> impl Responder {
    session.lock().await.close_options();
    HttpResponse::Ok().finish()
}

#[post("/selection/edit")]
#[instrument(skip(session))]
async fn open_edit(session: web::Data<SessionData>) -> impl Responder {
    let mut session = session.lock().await;
    match session.open_edit() {
        Ok(()) => HttpResponse::Ok().json(json!({ "draft": session.edit_draft() })),
        Err(e) => session_error_handler(&e),
    }
}

#[delete("/selection/edit")]
#[instrument(skip(session))]
async fn close_edit(session: web::Data<SessionData>) -> impl Responder {
    session.lock().await.close_edit();
    HttpResponse::Ok().finish()
}

#[post("/selection/edit/submit")]
#[instrument(skip(session, note))]
async fn submit_edit(
    session: web::Data<SessionData>,
    note: web::Json<NotePostData>,
) -> impl Responder {
    let res = session.lock().await.submit_edit(&note.content);
    match res {
        Ok(id) => HttpResponse::Ok().json(json!({ "id": id })),
        Err(e) => session_error_handler(&e),
    }
}

#[post("/selection/delete")]
#[instrument(skip(session))]
async fn request_delete(session: web::Data<SessionData>) -> impl Responder {
    let res = session.lock().await.request_delete();
    match res {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => session_error_handler(&e),
    }
}

#[post("/selection/delete/answer")]
#[instrument(skip(session, answer))]
async fn answer_delete(
    session: web::Data<SessionData>,
    answer: web::Json<AnswerPostData>,
) -> impl Responder {
    let res = session.lock().await.answer_delete(answer.confirmed);
    match res {
        Ok(removed) => HttpResponse::Ok().json(json!({ "removed": removed })),
        Err(e) => session_error_handler(&e),
    }
}

#[get("/state")]
#[instrument(skip(session))]
async fn get_state(session: web::Data<SessionData>) -> impl Responder {
    let mut session = session.lock().await;
    session.dismiss_expired_notification(Instant::now());
    HttpResponse::Ok().json(session.snapshot())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(get_todos)
        .service(new_todo)
        .service(get_todo)
        .service(modify_todo)
        .service(remove_todo)
        .service(get_notification)
        .service(open_notification)
        .service(close_notification)
        .service(get_selection)
        .service(open_selection)
        .service(close_selection)
        .service(open_edit)
        .service(close_edit)
        .service(submit_edit)
        .service(request_delete)
        .service(answer_delete)
        .service(get_state);
}
