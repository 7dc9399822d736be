//! # billing-core
//!
//! Plan catalog and display logic for the billing settings page.
//!
//! ## Flow
//!
//! ```text
//! ┌───────────────┐   ┌──────────────────┐   ┌──────────────┐
//! │    Catalog    │──▶│  plan_cards(     │──▶│  PlanCard    │──▶ CheckoutTrigger
//! │ (catalog.json)│   │   interval)      │   │  (rendered)  │    (injected)
//! └───────────────┘   └──────────────────┘   └──────────────┘
//!                             ▲
//!                    BillingInterval (Month | Year)
//! ```
//!
//! Cards are recomputed whenever the interval changes. Nothing here talks to
//! a payment provider: pressing a card's button hands a [`CheckoutRequest`]
//! to whatever [`CheckoutTrigger`] the caller injected.
//!
//! ## Usage
//!
//! ```rust
//! use billing_core::{plan_cards, BillingInterval, Catalog};
//!
//! let catalog = Catalog::standard()?;
//! let cards = plan_cards(&catalog, BillingInterval::Month);
//! assert_eq!(cards[0].price.to_string(), "$20/mo");
//! # Ok::<(), billing_core::BillingError>(())
//! ```

mod account;
mod card;
mod catalog;
mod checkout;
mod error;
mod interval;
mod plan;
mod price;

pub use account::{
    load_account, Account, AccountSource, AccountStatus, AccountUser, SharedAccountSource,
};
pub use card::{
    enterprise_card, plan_cards, visible_cards, BillingCards, PlanCard, PriceLabel, CHOOSE_PLAN,
    PER_MONTH,
};
pub use catalog::Catalog;
pub use checkout::{CheckoutHandle, CheckoutRequest, CheckoutTrigger, NoopCheckout};
pub use error::{BillingError, Result};
pub use interval::BillingInterval;
pub use plan::Plan;
pub use price::{format_usd, PlanPrice, CONTACT_US};
