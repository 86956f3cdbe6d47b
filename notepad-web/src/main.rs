use notepad_web::configuration::CONFIGURATION;
use notepad_web::startup::run;
use notepad_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(&*CONFIGURATION, std::io::stdout);
    init_tracing(subscriber);

    let address = format!("{}:{}", CONFIGURATION.host, CONFIGURATION.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!(%address, "listening");
    run(listener, CONFIGURATION.get_session())?.await
}
