//! Plan Prices
//!
//! A plan price is either a whole-dollar amount or the "Contact Us" sentinel.
//! Uses `rust_decimal` for amounts - never use f64 for money!

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

use crate::error::BillingError;

/// Sentinel shown in place of a price for plans sold by conversation
pub const CONTACT_US: &str = "Contact Us";

/// Price of a plan for one billing interval
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanPrice {
    /// Non-negative amount in whole USD
    Amount(Decimal),
    /// No fixed price
    ContactUs,
}

impl PlanPrice {
    /// Create an amount price, rejecting negative values
    pub fn amount(value: Decimal) -> Result<Self, BillingError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(BillingError::InvalidPrice(format!(
                "{value} is negative"
            )));
        }
        Ok(PlanPrice::Amount(value))
    }

    pub fn is_contact_us(&self) -> bool {
        matches!(self, PlanPrice::ContactUs)
    }

    /// Display text without any interval suffix
    pub fn display_text(&self) -> String {
        match self {
            PlanPrice::Amount(value) => format_usd(*value),
            PlanPrice::ContactUs => CONTACT_US.to_string(),
        }
    }
}

impl std::fmt::Display for PlanPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Accepts a JSON number or the exact sentinel string, nothing else
struct PlanPriceVisitor;

impl PlanPriceVisitor {
    fn amount<E: de::Error>(value: Decimal) -> Result<PlanPrice, E> {
        PlanPrice::amount(value).map_err(E::custom)
    }
}

impl Visitor<'_> for PlanPriceVisitor {
    type Value = PlanPrice;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a non-negative number or \"{CONTACT_US}\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PlanPrice, E> {
        Self::amount(Decimal::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PlanPrice, E> {
        Self::amount(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<PlanPrice, E> {
        let value = Decimal::try_from(v)
            .map_err(|_| E::invalid_value(Unexpected::Float(v), &self))?;
        Self::amount(value)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PlanPrice, E> {
        if v == CONTACT_US {
            Ok(PlanPrice::ContactUs)
        } else {
            Err(E::invalid_value(Unexpected::Str(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for PlanPrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PlanPriceVisitor)
    }
}

/// Format an amount as en-US whole-dollar currency ("$1,234")
///
/// Rounds half away from zero, the same rule `Intl.NumberFormat` applies
/// with zero fraction digits. Amounts are non-negative; see
/// [`PlanPrice::amount`].
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    format!("${}", group_thousands(&rounded.to_string()))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
