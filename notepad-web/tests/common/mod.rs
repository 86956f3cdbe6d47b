use lazy_static::lazy_static;
use notepad::TodoSession;
use notepad_web::configuration::CONFIGURATION;
use notepad_web::startup::run;
use notepad_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;

lazy_static! {
    static ref TRACING: () = {
        let subscriber = get_subscriber(&*CONFIGURATION, tracing_subscriber::fmt::TestWriter::new);
        init_tracing(subscriber);
    };
}

pub struct TestApp {
    pub address: String,
}

/// Serve a freshly seeded session on a random port.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(TodoSession::with_seed_data()).await
}

pub async fn spawn_app_with(session: TodoSession) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // We retrieve the port assigned to us by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    lazy_static::initialize(&TRACING);

    let server = run(listener, session).expect("Failed to bind address");
    let _ = tokio::spawn(server);
    TestApp { address }
}
