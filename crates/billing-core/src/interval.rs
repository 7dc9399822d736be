//! Billing Interval
//!
//! The one piece of mutable UI state on the billing page. Backed by a
//! checkbox switch where `checked` means annual billing.

/// Billing cadence used to pick which price a card shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BillingInterval {
    #[default]
    Month,
    Year,
}

impl BillingInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingInterval::Month => "month",
            BillingInterval::Year => "year",
        }
    }

    /// Map the switch state to an interval
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            BillingInterval::Year
        } else {
            BillingInterval::Month
        }
    }

    /// Whether the switch should render as checked
    pub fn is_annual(&self) -> bool {
        matches!(self, BillingInterval::Year)
    }

    /// The other interval
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            BillingInterval::Month => BillingInterval::Year,
            BillingInterval::Year => BillingInterval::Month,
        }
    }
}

impl std::fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
