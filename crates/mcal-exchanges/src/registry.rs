//! Alias → descriptor registry.
//!
//! The catalog is built explicitly at startup — descriptors do not
//! self-register — so initialization order is deterministic and each
//! registry can be assembled in isolation for tests.

use std::collections::HashMap;
use std::sync::Arc;

use mcal_core::{fail, Error, Result};

use crate::descriptor::ExchangeCalendar;
use crate::exchanges;

/// Maps alias strings to shared descriptor instances.
///
/// Every alias of a registered descriptor resolves to the same
/// `Arc<ExchangeCalendar>`.
#[derive(Debug, Default)]
pub struct CalendarRegistry {
    by_alias: HashMap<&'static str, Arc<ExchangeCalendar>>,
}

impl CalendarRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register `calendar` under all of its aliases.
    ///
    /// A duplicate alias rejects this descriptor and leaves the registry
    /// unchanged — other registered exchanges stay usable. Aliases are
    /// checked before any insertion so there is no partial registration.
    pub fn register(&mut self, calendar: ExchangeCalendar) -> Result<()> {
        calendar.validate()?;
        for alias in calendar.aliases() {
            if self.by_alias.contains_key(alias) {
                fail!(
                    "alias '{alias}' of descriptor '{}' is already registered",
                    calendar.name()
                );
            }
        }
        let shared = Arc::new(calendar);
        for &alias in shared.aliases() {
            self.by_alias.insert(alias, Arc::clone(&shared));
        }
        Ok(())
    }

    /// Look up a descriptor by alias (case-sensitive).
    pub fn get(&self, alias: &str) -> Result<Arc<ExchangeCalendar>> {
        self.by_alias
            .get(alias)
            .cloned()
            .ok_or_else(|| Error::Lookup(alias.to_string()))
    }

    /// All registered aliases, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_alias.keys().copied()
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

/// Build a registry holding every exchange definition shipped with this
/// crate.
pub fn default_catalog() -> Result<CalendarRegistry> {
    let mut registry = CalendarRegistry::new();
    registry.register(exchanges::cme_agriculture::calendar()?)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use chrono_tz::America::Chicago;

    fn minimal(name: &'static str, aliases: &[&'static str]) -> ExchangeCalendar {
        ExchangeCalendar::builder(name, Chicago)
            .aliases(aliases)
            .open_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .close_time(NaiveTime::from_hms_opt(16, 0, 0).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn all_aliases_resolve_to_same_instance() {
        let mut registry = CalendarRegistry::new();
        registry.register(minimal("A", &["A", "A_ALT"])).unwrap();
        let a = registry.get("A").unwrap();
        let alt = registry.get("A_ALT").unwrap();
        assert!(Arc::ptr_eq(&a, &alt));
    }

    #[test]
    fn unknown_alias_is_lookup_error() {
        let registry = CalendarRegistry::new();
        assert_eq!(
            registry.get("NOPE"),
            Err(Error::Lookup("NOPE".to_string()))
        );
    }

    #[test]
    fn duplicate_alias_rejects_descriptor_only() {
        let mut registry = CalendarRegistry::new();
        registry.register(minimal("A", &["A"])).unwrap();
        // "B" collides on one of its two aliases; neither is inserted.
        let result = registry.register(minimal("B", &["B", "A"]));
        assert!(result.is_err());
        assert!(registry.get("B").is_err());
        assert_eq!(registry.get("A").unwrap().name(), "A");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn default_catalog_builds() {
        let registry = default_catalog().unwrap();
        assert!(registry.get("CME_Agriculture").is_ok());
    }
}
