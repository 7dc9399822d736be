//! Checkout Seam
//!
//! The billing page never talks to a payment provider directly. It is handed
//! a [`CheckoutHandle`] and calls it when a plan's button is pressed; the
//! default handle does nothing.

use std::sync::Arc;

use crate::interval::BillingInterval;
use crate::plan::Plan;
use crate::price::PlanPrice;

/// What the user picked when they pressed a plan's button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Plan display name
    pub plan: String,

    /// Price active for the selected interval
    pub price: PlanPrice,

    /// Interval the price applies to
    pub interval: BillingInterval,

    /// Opaque provider reference for this plan and interval
    pub price_ref: Option<String>,
}

impl CheckoutRequest {
    pub fn for_plan(plan: &Plan, interval: BillingInterval) -> Self {
        Self {
            plan: plan.name.clone(),
            price: plan.price_for(interval).clone(),
            interval,
            price_ref: plan.price_ref_for(interval).map(str::to_string),
        }
    }
}

/// Starts a purchase flow for a chosen plan
pub trait CheckoutTrigger: Send + Sync {
    fn checkout(&self, request: &CheckoutRequest);
}

/// Trigger that ignores every request
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCheckout;

impl CheckoutTrigger for NoopCheckout {
    fn checkout(&self, _request: &CheckoutRequest) {}
}

/// Shared, cloneable checkout capability
#[derive(Clone)]
pub struct CheckoutHandle(Arc<dyn CheckoutTrigger>);

impl CheckoutHandle {
    pub fn new(trigger: impl CheckoutTrigger + 'static) -> Self {
        Self(Arc::new(trigger))
    }

    pub fn noop() -> Self {
        Self::new(NoopCheckout)
    }
}

impl CheckoutTrigger for CheckoutHandle {
    fn checkout(&self, request: &CheckoutRequest) {
        self.0.checkout(request);
    }
}

impl Default for CheckoutHandle {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for CheckoutHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutHandle").finish_non_exhaustive()
    }
}

impl<T: CheckoutTrigger + ?Sized> CheckoutTrigger for Arc<T> {
    fn checkout(&self, request: &CheckoutRequest) {
        (**self).checkout(request);
    }
}
