//! Option catalog
//!
//! Fixed enumerated domains offered by the form's choice widgets. The
//! store uses the set-valued domains as its validity boundary for toggles.

use crate::state::{ScalarField, SetField};

pub const PLATFORMS: &[&str] = &[
    "Shopify",
    "WooCommerce",
    "Magento",
    "Amazon",
    "Walmart",
    "eBay",
    "BigCommerce",
    "Custom Platform",
];

pub const INTERESTS: &[&str] = &[
    "Warehousing",
    "Retail Fulfillment",
    "eCommerce Fulfillment",
    "Value-Added Services",
    "FTZ Services",
    "International Shipping",
];

pub const SHIPPING_METHODS: &[&str] = &[
    "Standard Ground",
    "Express",
    "International",
    "Freight",
    "Same-Day",
    "Custom Routing",
];

pub const BUSINESS_TYPES: &[&str] = &[
    "B2C eCommerce",
    "B2B/Wholesale",
    "Retail Distribution",
    "Marketplace Seller",
    "Direct-to-Consumer Brand",
];

pub const ORDER_VOLUMES: &[&str] = &["0-100", "101-500", "501-1000", "1001-5000", "5000+"];

pub const INVENTORY_SIZES: &[&str] = &["1-100 SKUs", "101-500 SKUs", "501-1000 SKUs", "1000+ SKUs"];

/// Scalar fields whose value is picked from a catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceField {
    BusinessType,
    MonthlyOrders,
    InventorySize,
}

impl ChoiceField {
    /// The record field the chosen token is written to
    pub fn scalar(self) -> ScalarField {
        match self {
            ChoiceField::BusinessType => ScalarField::BusinessType,
            ChoiceField::MonthlyOrders => ScalarField::MonthlyOrders,
            ChoiceField::InventorySize => ScalarField::InventorySize,
        }
    }

    /// Label shown for a stored token
    pub fn display(self, token: &str) -> String {
        match self {
            ChoiceField::MonthlyOrders => format!("{token} orders/month"),
            _ => token.to_string(),
        }
    }

    /// Placeholder shown while nothing is selected
    pub fn placeholder(self) -> &'static str {
        match self {
            ChoiceField::BusinessType => "Select business type",
            ChoiceField::MonthlyOrders => "Select monthly volume",
            ChoiceField::InventorySize => "Select inventory size",
        }
    }
}

/// Domain of a set-valued field
pub fn domain_of(field: SetField) -> &'static [&'static str] {
    match field {
        SetField::Interests => INTERESTS,
        SetField::Platforms => PLATFORMS,
        SetField::ShippingMethods => SHIPPING_METHODS,
    }
}

/// Choices of a single-select field
pub fn choices_of(field: ChoiceField) -> &'static [&'static str] {
    match field {
        ChoiceField::BusinessType => BUSINESS_TYPES,
        ChoiceField::MonthlyOrders => ORDER_VOLUMES,
        ChoiceField::InventorySize => INVENTORY_SIZES,
    }
}

/// Whether `token` belongs to the domain of `field`
pub fn contains(field: SetField, token: &str) -> bool {
    domain_of(field).contains(&token)
}
