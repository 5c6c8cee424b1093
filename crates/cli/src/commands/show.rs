//! Print the resolved settings tree.
//!
//! Credentials are replaced with a fixed marker unless `--reveal-secrets` is passed.
//! Empty credentials stay empty so an unset value remains visible as unset.

use anyhow::{Context, Result};
use erp_config::constants::REDACTED;
use erp_config::{Secret, Settings};

use crate::args::ShowFormat;

pub fn run(settings: &Settings, format: ShowFormat, reveal_secrets: bool) -> Result<()> {
    let output = if reveal_secrets {
        render(settings, format)?
    } else {
        render(&redacted(settings), format)?
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn render(settings: &Settings, format: ShowFormat) -> Result<String> {
    match format {
        ShowFormat::Yaml => serde_yaml::to_string(settings).context("Failed to serialize YAML"),
        ShowFormat::Json => {
            serde_json::to_string_pretty(settings).context("Failed to serialize JSON")
        }
    }
}

fn redacted(settings: &Settings) -> Settings {
    let mut copy = settings.clone();
    for secret in [
        &mut copy.database.postgresql.password,
        &mut copy.database.mongodb.password,
        &mut copy.cache.redis.password,
        &mut copy.message_broker.kafka.sasl_password,
        &mut copy.vector_database.qdrant.api_key,
        &mut copy.search.elasticsearch.password,
        &mut copy.monitoring.grafana.password,
        &mut copy.security.jwt.secret,
        &mut copy.security.encryption.key,
    ] {
        if !secret.is_empty() {
            *secret = Secret::new(REDACTED);
        }
    }
    copy
}
