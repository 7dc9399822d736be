//! Subscription Plans

use serde::Deserialize;

use crate::error::{BillingError, Result};
use crate::interval::BillingInterval;
use crate::price::PlanPrice;

/// A subscription tier as shown on the billing page
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Plan {
    /// Display name, unique within a catalog
    pub name: String,

    /// Short pitch under the price
    pub description: String,

    /// Price per month when billed monthly
    pub price: PlanPrice,

    /// Price per month when billed annually
    pub price_annual: PlanPrice,

    /// Gets the "Most popular" treatment
    #[serde(default)]
    pub most_popular: bool,

    /// Opaque checkout reference for the monthly price
    #[serde(default)]
    pub price_ref_month: String,

    /// Opaque checkout reference for the annual price
    #[serde(default)]
    pub price_ref_year: String,

    /// Feature bullets, rendered in order
    #[serde(default)]
    pub features: Vec<String>,
}

impl Plan {
    /// Price that applies to the given interval
    pub fn price_for(&self, interval: BillingInterval) -> &PlanPrice {
        match interval {
            BillingInterval::Month => &self.price,
            BillingInterval::Year => &self.price_annual,
        }
    }

    /// Checkout reference for the given interval (`None` when unset)
    pub fn price_ref_for(&self, interval: BillingInterval) -> Option<&str> {
        let price_ref = match interval {
            BillingInterval::Month => &self.price_ref_month,
            BillingInterval::Year => &self.price_ref_year,
        };
        (!price_ref.is_empty()).then_some(price_ref.as_str())
    }

    /// Check the per-plan invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BillingError::InvalidPlan {
                plan: self.name.clone(),
                reason: "name is empty".into(),
            });
        }

        if self.price.is_contact_us() != self.price_annual.is_contact_us() {
            return Err(BillingError::InvalidPlan {
                plan: self.name.clone(),
                reason: "monthly and annual prices must both be listed or both be \"Contact Us\""
                    .into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
impl Plan {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: PlanPrice,
        price_annual: PlanPrice,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            price_annual,
            most_popular: false,
            price_ref_month: String::new(),
            price_ref_year: String::new(),
            features: Vec::new(),
        }
    }

    pub(crate) fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn with_price_refs(mut self, month: impl Into<String>, year: impl Into<String>) -> Self {
        self.price_ref_month = month.into();
        self.price_ref_year = year.into();
        self
    }

    pub(crate) fn most_popular(mut self) -> Self {
        self.most_popular = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn developer() -> Plan {
        Plan::new(
            "Developer",
            "Perfect for small projects.",
            PlanPrice::Amount(dec!(20)),
            PlanPrice::Amount(dec!(15)),
        )
        .with_price_refs("price_month", "price_year")
    }

    #[test]
    fn test_price_for_interval() {
        let plan = developer();
        assert_eq!(plan.price_for(BillingInterval::Month), &PlanPrice::Amount(dec!(20)));
        assert_eq!(plan.price_for(BillingInterval::Year), &PlanPrice::Amount(dec!(15)));
    }

    #[test]
    fn test_price_ref_for_interval() {
        let plan = developer();
        assert_eq!(plan.price_ref_for(BillingInterval::Month), Some("price_month"));
        assert_eq!(plan.price_ref_for(BillingInterval::Year), Some("price_year"));

        let bare = Plan::new("Enterprise", "", PlanPrice::ContactUs, PlanPrice::ContactUs);
        assert_eq!(bare.price_ref_for(BillingInterval::Month), None);
    }

    #[test]
    fn test_mixed_sentinel_rejected() {
        let plan = Plan::new(
            "Odd",
            "",
            PlanPrice::ContactUs,
            PlanPrice::Amount(dec!(10)),
        );
        assert!(matches!(plan.validate(), Err(BillingError::InvalidPlan { .. })));
    }

    #[test]
    fn test_empty_name_rejected() {
        let plan = Plan::new(" ", "", PlanPrice::ContactUs, PlanPrice::ContactUs);
        assert!(plan.validate().is_err());
        assert!(developer().validate().is_ok());
    }
}
