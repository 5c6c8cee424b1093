//! Shared test utilities for erp-env integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear every override variable so host settings never leak into a test.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Returns a hermetic `erp-env` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent `.env` contamination.
/// - Override, discovery, and log-filter variables are cleared.
pub fn erp_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("erp-env");

    cmd.env("DOTENV_DISABLED", "1");

    for var in erp_config::override_vars() {
        cmd.env_remove(var);
    }
    cmd.env_remove("ERP_CONFIG_PATH").env_remove("RUST_LOG");

    cmd
}

/// Write `body` to `<dir>/<relative>`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, body: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

/// A small but complete settings document.
#[allow(dead_code)]
pub const CONFIG: &str = "\
environment:
  current: development
database:
  postgresql:
    host: localhost
    port: 5432
    username: erp
    password: pg-secret
    ssl_mode: disable
    databases:
      auth: erp_auth
      crm: erp_crm
      finance: erp_finance
cache:
  redis:
    host: localhost
    port: 6379
    databases:
      default: 0
      cache: 3
message_broker:
  kafka:
    brokers: [localhost:9092]
    consumer_groups:
      auth_service: auth-group
      crm_service: crm-group
services:
  crm_service:
    host: crm
    grpc_port: 50052
    http_port: 8082
";
