//! Lead record value objects

use serde::Serialize;
use std::str::FromStr;

/// Error returned when a field name does not match any known field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// Single-valued string fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Name,
    Email,
    Company,
    Website,
    Phone,
    BusinessType,
    MonthlyOrders,
    Location,
    CurrentProvider,
    InventorySize,
    SpecialRequirements,
}

impl ScalarField {
    pub const ALL: [ScalarField; 11] = [
        ScalarField::Name,
        ScalarField::Email,
        ScalarField::Company,
        ScalarField::Website,
        ScalarField::Phone,
        ScalarField::BusinessType,
        ScalarField::MonthlyOrders,
        ScalarField::Location,
        ScalarField::CurrentProvider,
        ScalarField::InventorySize,
        ScalarField::SpecialRequirements,
    ];

    /// Key used for this field in the outbound document
    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Email => "email",
            ScalarField::Company => "company",
            ScalarField::Website => "website",
            ScalarField::Phone => "phone",
            ScalarField::BusinessType => "businessType",
            ScalarField::MonthlyOrders => "monthlyOrders",
            ScalarField::Location => "location",
            ScalarField::CurrentProvider => "currentProvider",
            ScalarField::InventorySize => "inventorySize",
            ScalarField::SpecialRequirements => "specialRequirements",
        }
    }
}

impl FromStr for ScalarField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Checkbox-group fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetField {
    Interests,
    Platforms,
    ShippingMethods,
}

impl SetField {
    pub const ALL: [SetField; 3] = [
        SetField::Interests,
        SetField::Platforms,
        SetField::ShippingMethods,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SetField::Interests => "interests",
            SetField::Platforms => "platforms",
            SetField::ShippingMethods => "shippingMethods",
        }
    }
}

impl FromStr for SetField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// All field values for one form session.
///
/// `Default` is the canonical empty record: every scalar is an empty string
/// and every set is an empty sequence. Keys are never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub phone: String,
    pub monthly_orders: String,
    pub interests: Vec<String>,
    pub platforms: Vec<String>,
    pub shipping_methods: Vec<String>,
    pub business_type: String,
    pub location: String,
    pub current_provider: String,
    pub inventory_size: String,
    pub special_requirements: String,
}

impl FormRecord {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Email => &self.email,
            ScalarField::Company => &self.company,
            ScalarField::Website => &self.website,
            ScalarField::Phone => &self.phone,
            ScalarField::BusinessType => &self.business_type,
            ScalarField::MonthlyOrders => &self.monthly_orders,
            ScalarField::Location => &self.location,
            ScalarField::CurrentProvider => &self.current_provider,
            ScalarField::InventorySize => &self.inventory_size,
            ScalarField::SpecialRequirements => &self.special_requirements,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Email => &mut self.email,
            ScalarField::Company => &mut self.company,
            ScalarField::Website => &mut self.website,
            ScalarField::Phone => &mut self.phone,
            ScalarField::BusinessType => &mut self.business_type,
            ScalarField::MonthlyOrders => &mut self.monthly_orders,
            ScalarField::Location => &mut self.location,
            ScalarField::CurrentProvider => &mut self.current_provider,
            ScalarField::InventorySize => &mut self.inventory_size,
            ScalarField::SpecialRequirements => &mut self.special_requirements,
        }
    }

    pub fn set(&self, field: SetField) -> &[String] {
        match field {
            SetField::Interests => &self.interests,
            SetField::Platforms => &self.platforms,
            SetField::ShippingMethods => &self.shipping_methods,
        }
    }

    fn set_mut(&mut self, field: SetField) -> &mut Vec<String> {
        match field {
            SetField::Interests => &mut self.interests,
            SetField::Platforms => &mut self.platforms,
            SetField::ShippingMethods => &mut self.shipping_methods,
        }
    }

    /// Whether `token` is currently selected in `field`
    pub fn is_selected(&self, field: SetField, token: &str) -> bool {
        self.set(field).iter().any(|t| t == token)
    }

    /// Remove `token` if present, otherwise append it.
    ///
    /// Removal keeps the relative order of the remaining tokens. Two
    /// consecutive toggles restore membership; a selected token that was not
    /// last comes back at the end.
    pub fn toggle(&mut self, field: SetField, token: &str) {
        let values = self.set_mut(field);
        if let Some(pos) = values.iter().position(|t| t == token) {
            values.remove(pos);
        } else {
            values.push(token.to_string());
        }
    }

    /// True when the record equals the canonical empty record
    pub fn is_empty(&self) -> bool {
        *self == FormRecord::default()
    }
}
