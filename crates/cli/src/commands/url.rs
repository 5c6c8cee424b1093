//! Print one derived connection string or endpoint.

use anyhow::Result;
use erp_config::{ModuleId, Settings};

use crate::args::Subsystem;

pub fn run(
    settings: &Settings,
    module: ModuleId,
    subsystem: Subsystem,
    purpose: Option<&str>,
) -> Result<()> {
    println!("{}", derive(settings, module, subsystem, purpose));
    Ok(())
}

/// Without a purpose, PostgreSQL uses the module's own database and the
/// other keyed subsystems use their fallback entry.
fn derive(
    settings: &Settings,
    module: ModuleId,
    subsystem: Subsystem,
    purpose: Option<&str>,
) -> String {
    match subsystem {
        Subsystem::Postgres => {
            let pg = &settings.database.postgresql;
            match purpose {
                Some(key) => pg.connection_string(key),
                None => pg.connection_string_for(module.database_purpose()),
            }
        }
        Subsystem::Mongodb => settings
            .database
            .mongodb
            .connection_string(purpose.unwrap_or("analytics")),
        Subsystem::Redis => settings
            .cache
            .redis
            .connection_string(purpose.unwrap_or("default")),
        Subsystem::Kafka => settings.message_broker.kafka.broker_list(),
        Subsystem::Qdrant => settings.vector_database.qdrant.http_url(),
        Subsystem::Elasticsearch => settings.search.elasticsearch.url(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let mut settings = Settings::default();
        let pg = &mut settings.database.postgresql;
        pg.host = "db".to_string();
        pg.port = 5432;
        pg.username = "u".to_string();
        pg.ssl_mode = "disable".to_string();
        pg.databases.auth = "auth_db".to_string();
        pg.databases.finance = "finance_db".to_string();
        settings.cache.redis.host = "cache".to_string();
        settings.cache.redis.port = 6379;
        settings.cache.redis.databases.sessions = 2;
        settings
    }

    #[test]
    fn test_postgres_defaults_to_module_database() {
        let url = derive(&settings(), ModuleId::Finance, Subsystem::Postgres, None);
        assert_eq!(url, "postgresql://u:@db:5432/finance_db?sslmode=disable");
    }

    #[test]
    fn test_explicit_purpose_wins() {
        let url = derive(&settings(), ModuleId::Finance, Subsystem::Postgres, Some("auth"));
        assert!(url.ends_with("/auth_db?sslmode=disable"));

        let url = derive(&settings(), ModuleId::Auth, Subsystem::Redis, Some("sessions"));
        assert_eq!(url, "redis://cache:6379/2");
    }

    #[test]
    fn test_kafka_without_brokers_uses_localhost() {
        let url = derive(&settings(), ModuleId::Auth, Subsystem::Kafka, None);
        assert_eq!(url, "localhost:9092");
    }
}
