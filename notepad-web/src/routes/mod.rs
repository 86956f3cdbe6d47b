mod api_v1;
mod index;

pub use api_v1::config as api_v1_config;
pub use index::config as index_config;

use actix_web::HttpResponse;
use notepad::errors::SessionError;

fn session_error_handler(e: &SessionError) -> HttpResponse {
    match e {
        SessionError::Validation(_) => HttpResponse::UnprocessableEntity().body(e.to_string()),
        SessionError::NoteNotExist(_) => HttpResponse::NotFound().body(e.to_string()),
        SessionError::NothingSelected => HttpResponse::Conflict().body(e.to_string()),
        SessionError::EditNotOpen => HttpResponse::Conflict().body(e.to_string()),
        SessionError::NoPendingDeletion => HttpResponse::Conflict().body(e.to_string()),
    }
}
