//! Page Components

mod billing;

pub use billing::BillingPage;
