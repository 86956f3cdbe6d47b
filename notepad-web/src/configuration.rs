use notepad::notification::NotificationCenter;
use notepad::{InMemoryStore, TodoSession};

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    populateseeddata: bool,
    autohidedurationms: u64,
}

impl Settings {
    /// A fresh session for the page, seeded unless configured otherwise.
    pub fn get_session(&self) -> TodoSession {
        let notification = NotificationCenter::with_default_duration(Some(self.autohidedurationms));
        let mut session = TodoSession::new(Box::new(InMemoryStore::new()), notification);
        if self.populateseeddata {
            session.populate_seed_data();
        }
        session
    }
}

lazy_static! {
    pub static ref CONFIGURATION: Settings =
        get_configuration().expect("Failed to read configuration.yml.");
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "localhost")?
        .set_default("port", 8000)?
        .set_default("populateseeddata", true)?
        .set_default(
            "autohidedurationms",
            notepad::notification::DEFAULT_AUTO_HIDE_DURATION_MS as i64,
        )?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("notepad")
                .separator("_"),
        )
        .build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = get_configuration().unwrap();
        assert_eq!(settings.port, 8000);
        let session = settings.get_session();
        assert_eq!(
            session.notification().default_auto_hide_duration_ms(),
            Some(6000)
        );
    }
}
