use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::Path;
use ticket_catalog::TicketPricing;

use crate::rules::PurchaseRules;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BusinessRules {
    pub max_tickets: u32,
    pub adult_price: u32,
    pub child_price: u32,
    pub infant_price: u32,
}

impl BusinessRules {
    pub fn pricing(&self) -> TicketPricing {
        TicketPricing {
            adult_price: self.adult_price,
            child_price: self.child_price,
            infant_price: self.infant_price,
        }
    }

    pub fn purchase_rules(&self) -> PurchaseRules {
        PurchaseRules::new(self.max_tickets)
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layer the files found in `dir` and the environment over the defaults
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        Self::defaults()?
            .add_source(file("default"))
            .add_source(file(&run_mode))
            // Not checked in
            .add_source(file("local"))
            // e.g. `TICKETS__BUSINESS_RULES__MAX_TICKETS=10`
            .add_source(config::Environment::with_prefix("TICKETS").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Parse a TOML document layered over the built-in defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let pricing = TicketPricing::default();
        let rules = PurchaseRules::default();

        config::Config::builder()
            .set_default("business_rules.max_tickets", i64::from(rules.max_tickets))?
            .set_default("business_rules.adult_price", i64::from(pricing.adult_price))?
            .set_default("business_rules.child_price", i64::from(pricing.child_price))?
            .set_default("business_rules.infant_price", i64::from(pricing.infant_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.business_rules.pricing(), TicketPricing::default());
        assert_eq!(config.business_rules.purchase_rules(), PurchaseRules::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            [business_rules]
            max_tickets = 8
            child_price = 12
            "#,
        )
        .unwrap();

        let rules = config.business_rules;
        assert_eq!(rules.max_tickets, 8);
        assert_eq!(rules.child_price, 12);
        assert_eq!(rules.adult_price, 20);
        assert_eq!(rules.infant_price, 0);
    }

    #[test]
    fn test_load_layers_files_and_environment() {
        let dir = env::temp_dir().join(format!("ticket-order-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("default.toml"),
            "[business_rules]\nmax_tickets = 5\nadult_price = 25\n",
        )
        .unwrap();
        std::fs::write(dir.join("local.toml"), "[business_rules]\nchild_price = 12\n").unwrap();

        // The only test in the crate that reads the process environment
        env::set_var("TICKETS__BUSINESS_RULES__MAX_TICKETS", "10");
        let loaded = Config::load_from(&dir);
        env::remove_var("TICKETS__BUSINESS_RULES__MAX_TICKETS");
        std::fs::remove_dir_all(&dir).unwrap();

        let rules = loaded.unwrap().business_rules;
        assert_eq!(rules.max_tickets, 10);
        assert_eq!(rules.adult_price, 25);
        assert_eq!(rules.child_price, 12);
        assert_eq!(rules.infant_price, 0);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = env::temp_dir().join("ticket-order-config-missing");
        let rules = Config::load_from(&dir).unwrap().business_rules;

        assert_eq!(rules.pricing(), TicketPricing::default());
    }

    #[test]
    fn test_invalid_value() {
        assert!(Config::from_toml_str("[business_rules]\nmax_tickets = \"many\"\n").is_err());
    }
}
