use crate::routes::*;
use crate::SessionData;
use actix_files::Files;
use actix_web::dev::Server;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use notepad::TodoSession;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, session: TodoSession) -> Result<Server, std::io::Error> {
    let session: Data<SessionData> = Data::new(SessionData::new(session));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .service(web::scope("/api/v1").configure(api_v1_config))
            .service(Files::new("/static", "./static/"))
            .configure(index_config)
            .app_data(session.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
