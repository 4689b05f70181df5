//! Package Pricing
//!
//! The configurator on the pricing page: a fixed base package plus
//! optional add-on modules, summed into a one-time setup quote.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One-time setup price for the base chatbot package (kr)
pub const PACKAGE_PRICE: Decimal = dec!(14900);

/// Optional modules on top of the base package
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    MultiLanguage,
    CrmIntegration,
    BookingIntegration,
    SmsNotifications,
}

impl AddOn {
    /// Every add-on, in the order the configurator lists them
    pub const ALL: [AddOn; 4] = [
        AddOn::MultiLanguage,
        AddOn::CrmIntegration,
        AddOn::BookingIntegration,
        AddOn::SmsNotifications,
    ];

    /// One-time price on top of the base package (kr)
    pub fn price(&self) -> Decimal {
        match self {
            AddOn::MultiLanguage => dec!(3900),
            AddOn::CrmIntegration => dec!(4900),
            AddOn::BookingIntegration => dec!(2900),
            AddOn::SmsNotifications => dec!(1900),
        }
    }

    /// Label shown next to the checkbox
    pub fn label(&self) -> &'static str {
        match self {
            AddOn::MultiLanguage => "Flerspråklig støtte",
            AddOn::CrmIntegration => "CRM-integrasjon",
            AddOn::BookingIntegration => "Booking-integrasjon",
            AddOn::SmsNotifications => "SMS-varsling",
        }
    }
}

/// A configurable package quote
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Base package price (kr)
    pub base_price: Decimal,

    /// Currently selected add-ons
    pub add_ons: HashSet<AddOn>,
}

impl Quote {
    pub fn new(base_price: Decimal) -> Self {
        Self {
            base_price,
            add_ons: HashSet::new(),
        }
    }

    /// Quote starting from the standard package
    pub fn standard() -> Self {
        Self::new(PACKAGE_PRICE)
    }

    /// Flip one add-on in or out of the quote
    pub fn toggle(&mut self, add_on: AddOn) {
        if !self.add_ons.remove(&add_on) {
            self.add_ons.insert(add_on);
        }
    }

    /// Set one add-on to a known state (checkbox semantics)
    pub fn set(&mut self, add_on: AddOn, selected: bool) {
        if selected {
            self.add_ons.insert(add_on);
        } else {
            self.add_ons.remove(&add_on);
        }
    }

    pub fn is_selected(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }

    /// Base price plus every selected add-on
    pub fn total(&self) -> Decimal {
        let add_on_total: Decimal = self.add_ons.iter().map(|a| a.price()).sum();
        self.base_price + add_on_total
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_quote_is_base_price() {
        assert_eq!(Quote::standard().total(), dec!(14900));
    }

    #[test]
    fn test_add_ons_sum_on_top() {
        let mut quote = Quote::standard();
        quote.toggle(AddOn::CrmIntegration);
        assert_eq!(quote.total(), dec!(19800));

        quote.toggle(AddOn::SmsNotifications);
        assert_eq!(quote.total(), dec!(21700));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut quote = Quote::standard();
        quote.toggle(AddOn::MultiLanguage);
        quote.toggle(AddOn::MultiLanguage);
        assert_eq!(quote.total(), dec!(14900));
        assert!(!quote.is_selected(AddOn::MultiLanguage));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut quote = Quote::standard();
        quote.set(AddOn::BookingIntegration, true);
        quote.set(AddOn::BookingIntegration, true);
        assert_eq!(quote.total(), dec!(17800));

        quote.set(AddOn::BookingIntegration, false);
        quote.set(AddOn::BookingIntegration, false);
        assert_eq!(quote.total(), dec!(14900));
    }
}
