//! Plan Cards
//!
//! Display-ready view of each plan for the active billing interval. The web
//! frontend renders these as-is, so everything a card shows is decided here.

use crate::account::AccountStatus;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutRequest, CheckoutTrigger};
use crate::interval::BillingInterval;
use crate::plan::Plan;
use crate::price::CONTACT_US;

/// Suffix shown after listed prices
pub const PER_MONTH: &str = "/mo";

/// Button label for plans with a listed price
pub const CHOOSE_PLAN: &str = "Choose Plan";

/// Formatted price plus its optional suffix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceLabel {
    pub amount: String,
    pub suffix: Option<&'static str>,
}

impl std::fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.suffix.unwrap_or_default())
    }
}

/// One rendered plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanCard {
    pub name: String,
    pub description: String,
    pub price: PriceLabel,
    pub cta_label: &'static str,
    /// "Most popular" treatment
    pub highlighted: bool,
    pub features: Vec<String>,
    checkout: CheckoutRequest,
}

impl PlanCard {
    pub fn new(plan: &Plan, interval: BillingInterval) -> Self {
        let price = plan.price_for(interval);
        let contact_us = price.is_contact_us();

        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: PriceLabel {
                amount: price.display_text(),
                suffix: (!contact_us).then_some(PER_MONTH),
            },
            cta_label: if contact_us { CONTACT_US } else { CHOOSE_PLAN },
            highlighted: plan.most_popular,
            features: plan.features.clone(),
            checkout: CheckoutRequest::for_plan(plan, interval),
        }
    }

    /// Handle one button press
    pub fn activate(&self, trigger: &dyn CheckoutTrigger) {
        trigger.checkout(&self.checkout);
    }
}

/// Cards for the standard plans, in catalog order
pub fn plan_cards(catalog: &Catalog, interval: BillingInterval) -> Vec<PlanCard> {
    catalog
        .plans()
        .iter()
        .map(|plan| PlanCard::new(plan, interval))
        .collect()
}

/// Card for the enterprise plan
pub fn enterprise_card(catalog: &Catalog, interval: BillingInterval) -> PlanCard {
    PlanCard::new(catalog.enterprise(), interval)
}

/// Everything the billing page shows once the account has loaded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillingCards {
    pub plans: Vec<PlanCard>,
    pub enterprise: PlanCard,
}

/// Cards to render, or `None` while the account is still loading
pub fn visible_cards(
    status: &AccountStatus,
    catalog: &Catalog,
    interval: BillingInterval,
) -> Option<BillingCards> {
    if status.is_pending() {
        return None;
    }

    Some(BillingCards {
        plans: plan_cards(catalog, interval),
        enterprise: enterprise_card(catalog, interval),
    })
}
