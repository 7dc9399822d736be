//! Plan Catalog
//!
//! Immutable table of plans loaded once at startup. The standard table ships
//! as `catalog.json` next to this crate's manifest.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{BillingError, Result};
use crate::plan::Plan;

const STANDARD_CATALOG: &str = include_str!("../catalog.json");

/// Wire form of the catalog table
#[derive(Deserialize)]
struct CatalogTable {
    plans: Vec<Plan>,
    enterprise: Plan,
}

/// Validated set of standard plans plus the enterprise plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    plans: Vec<Plan>,
    enterprise: Plan,
}

impl Catalog {
    /// Build a catalog, rejecting invalid or duplicate plans
    pub fn new(plans: Vec<Plan>, enterprise: Plan) -> Result<Self> {
        let mut seen = HashSet::new();

        for plan in plans.iter().chain(std::iter::once(&enterprise)) {
            plan.validate()?;
            if !seen.insert(plan.name.as_str()) {
                return Err(BillingError::DuplicatePlan(plan.name.clone()));
            }
        }

        let catalog = Self { plans, enterprise };

        let popular: Vec<_> = catalog.most_popular().map(|p| p.name.as_str()).collect();
        if popular.len() > 1 {
            tracing::warn!(plans = ?popular, "More than one plan flagged as most popular");
        }

        tracing::debug!(
            plans = catalog.plans.len(),
            enterprise = %catalog.enterprise.name,
            "Loaded plan catalog"
        );

        Ok(catalog)
    }

    /// Parse and validate a catalog table from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let table: CatalogTable = serde_json::from_str(json)?;
        Self::new(table.plans, table.enterprise)
    }

    /// The bundled catalog
    pub fn standard() -> Result<Self> {
        Self::from_json(STANDARD_CATALOG)
    }

    /// Standard plans in display order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn enterprise(&self) -> &Plan {
        &self.enterprise
    }

    /// Plans flagged as most popular
    pub fn most_popular(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter().filter(|p| p.most_popular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::PlanPrice;
    use rust_decimal_macros::dec;

    fn enterprise() -> Plan {
        Plan::new("Enterprise", "Talk to us.", PlanPrice::ContactUs, PlanPrice::ContactUs)
    }

    fn priced(name: &str) -> Plan {
        Plan::new(name, "", PlanPrice::Amount(dec!(10)), PlanPrice::Amount(dec!(8)))
    }

    #[test]
    fn test_standard_catalog_loads() {
        let catalog = Catalog::standard().unwrap();
        let names: Vec<_> = catalog.plans().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Developer", "Startup", "Team"]);
        assert_eq!(catalog.enterprise().name, "Enterprise");
        assert!(catalog.enterprise().price.is_contact_us());

        let popular: Vec<_> = catalog.most_popular().map(|p| p.name.as_str()).collect();
        assert_eq!(popular, ["Startup"]);
    }

    #[test]
    fn test_standard_prices() {
        let catalog = Catalog::standard().unwrap();
        let team = &catalog.plans()[2];
        assert_eq!(team.name, "Team");
        assert_eq!(team.price, PlanPrice::Amount(dec!(500)));
        assert_eq!(team.price_annual, PlanPrice::Amount(dec!(400)));
        assert_eq!(team.features.len(), 8);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::new(vec![priced("Team"), priced("Team")], enterprise());
        assert_eq!(result, Err(BillingError::DuplicatePlan("Team".into())));

        let result = Catalog::new(vec![priced("Enterprise")], enterprise());
        assert!(matches!(result, Err(BillingError::DuplicatePlan(_))));
    }

    #[test]
    fn test_multiple_popular_allowed() {
        let plans = vec![priced("A").most_popular(), priced("B").most_popular()];
        let catalog = Catalog::new(plans, enterprise()).unwrap();
        assert_eq!(catalog.most_popular().count(), 2);
    }

    #[test]
    fn test_invalid_price_rejected_at_load() {
        let json = r#"{
            "plans": [{ "name": "Cheap", "description": "", "price": "Free", "price_annual": 0 }],
            "enterprise": { "name": "Enterprise", "description": "", "price": "Contact Us", "price_annual": "Contact Us" }
        }"#;
        assert!(matches!(Catalog::from_json(json), Err(BillingError::Catalog(_))));
    }

    #[test]
    fn test_string_amounts_rejected_at_load() {
        let json = r#"{
            "plans": [{ "name": "Developer", "description": "", "price": "20", "price_annual": "15" }],
            "enterprise": { "name": "Enterprise", "description": "", "price": "Contact Us", "price_annual": "Contact Us" }
        }"#;
        assert!(matches!(Catalog::from_json(json), Err(BillingError::Catalog(_))));
    }

    #[test]
    fn test_negative_amount_rejected_at_load() {
        let json = r#"{
            "plans": [{ "name": "Refund", "description": "", "price": -5, "price_annual": 0 }],
            "enterprise": { "name": "Enterprise", "description": "", "price": "Contact Us", "price_annual": "Contact Us" }
        }"#;
        assert!(matches!(Catalog::from_json(json), Err(BillingError::Catalog(_))));
    }

    #[test]
    fn test_mixed_sentinel_rejected_at_load() {
        let json = r#"{
            "plans": [],
            "enterprise": { "name": "Enterprise", "description": "", "price": "Contact Us", "price_annual": 99 }
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(BillingError::InvalidPlan { .. })
        ));
    }
}
