//! Module identity for the service suite.
//!
//! Responsibilities:
//! - Name the fixed set of modules that receive generated configuration.
//! - Map a module to the per-module keys it selects (database, service registry entry).
//!
//! Invariants:
//! - Parsing never fails: unrecognized names become `ModuleId::Unknown`.
//! - `Unknown` selects the `auth` module's values everywhere (`effective()`).

use std::fmt;

use crate::providers::DatabasePurpose;

/// One of the modules in the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Auth,
    Crm,
    Hrm,
    Finance,
    Inventory,
    Projects,
    Ai,
    Frontend,
    Unknown,
}

impl ModuleId {
    /// Every recognized module, excluding `Unknown`.
    pub const ALL: [ModuleId; 8] = [
        ModuleId::Auth,
        ModuleId::Crm,
        ModuleId::Hrm,
        ModuleId::Finance,
        ModuleId::Inventory,
        ModuleId::Projects,
        ModuleId::Ai,
        ModuleId::Frontend,
    ];

    /// Parse a module name. Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "auth" => ModuleId::Auth,
            "crm" => ModuleId::Crm,
            "hrm" => ModuleId::Hrm,
            "finance" => ModuleId::Finance,
            "inventory" => ModuleId::Inventory,
            "projects" => ModuleId::Projects,
            "ai" => ModuleId::Ai,
            "frontend" => ModuleId::Frontend,
            _ => ModuleId::Unknown,
        }
    }

    /// The module whose values a lookup should use.
    pub fn effective(self) -> Self {
        match self {
            ModuleId::Unknown => ModuleId::Auth,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::Auth => "auth",
            ModuleId::Crm => "crm",
            ModuleId::Hrm => "hrm",
            ModuleId::Finance => "finance",
            ModuleId::Inventory => "inventory",
            ModuleId::Projects => "projects",
            ModuleId::Ai => "ai",
            ModuleId::Frontend => "frontend",
            ModuleId::Unknown => "unknown",
        }
    }

    /// Key of this module's entry in the `services` registry.
    pub fn service_key(self) -> &'static str {
        match self.effective() {
            ModuleId::Crm => "crm_service",
            ModuleId::Hrm => "hrm_service",
            ModuleId::Finance => "finance_service",
            ModuleId::Inventory => "inventory_service",
            ModuleId::Projects => "projects_service",
            ModuleId::Ai => "ai_service",
            ModuleId::Frontend => "frontend",
            ModuleId::Auth | ModuleId::Unknown => "auth_service",
        }
    }

    /// Relational database this module connects to.
    ///
    /// Modules without their own database (`ai`, `frontend`) use the auth database.
    pub fn database_purpose(self) -> DatabasePurpose {
        match self.effective() {
            ModuleId::Crm => DatabasePurpose::Crm,
            ModuleId::Hrm => DatabasePurpose::Hrm,
            ModuleId::Finance => DatabasePurpose::Finance,
            ModuleId::Inventory => DatabasePurpose::Inventory,
            ModuleId::Projects => DatabasePurpose::Projects,
            ModuleId::Auth | ModuleId::Ai | ModuleId::Frontend | ModuleId::Unknown => {
                DatabasePurpose::Auth
            }
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modules_round_trip() {
        for module in ModuleId::ALL {
            assert_eq!(ModuleId::parse(module.as_str()), module);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ModuleId::parse(" CRM "), ModuleId::Crm);
    }

    #[test]
    fn test_unknown_module_resolves_to_auth() {
        let module = ModuleId::parse("payroll");
        assert_eq!(module, ModuleId::Unknown);
        assert_eq!(module.effective(), ModuleId::Auth);
        assert_eq!(module.service_key(), "auth_service");
        assert_eq!(module.database_purpose(), DatabasePurpose::Auth);
    }

    #[test]
    fn test_modules_without_database_use_auth() {
        assert_eq!(ModuleId::Ai.database_purpose(), DatabasePurpose::Auth);
        assert_eq!(ModuleId::Frontend.database_purpose(), DatabasePurpose::Auth);
        assert_eq!(ModuleId::Ai.service_key(), "ai_service");
        assert_eq!(ModuleId::Frontend.service_key(), "frontend");
    }
}
