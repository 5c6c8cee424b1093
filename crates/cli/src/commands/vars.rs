//! List the whitelisted override variables.

use anyhow::Result;

pub fn run() -> Result<()> {
    for var in erp_config::override_vars() {
        println!("{var}");
    }
    Ok(())
}
