//! Form values and field validation for the add-food dialog.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::Category;
use super::messages::Messages;

/// Value emitted by a numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// Input is empty. Distinct from zero.
    Empty,
    /// Input holds text that is not a finite number.
    Invalid,
    Number(f64),
}

impl NumberValue {
    /// Parse raw input text the way a numeric input reports it.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::Empty;
        }
        match f64::from_str(text) {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Invalid,
        }
    }

    /// The number, if the value is one.
    #[must_use]
    pub const fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Empty | Self::Invalid => None,
        }
    }

    /// Truncate toward zero, leaving `Empty` and `Invalid` untouched.
    #[must_use]
    pub fn truncated(self) -> Self {
        match self {
            Self::Number(value) => Self::Number(value.trunc()),
            other => other,
        }
    }

    fn is_positive(self) -> bool {
        self.as_number().is_some_and(|value| value > 0.0)
    }

    fn exceeds(self, max: f64) -> bool {
        self.as_number().is_some_and(|value| value > max)
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Invalid
        }
    }
}

/// Fields of the add-food form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Price,
    Quantity,
    Category,
}

/// Why a field's value cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    PriceNotPositive,
    QuantityBelowOne,
    QuantityTooLarge,
    MissingCategory,
}

/// Validation result for a whole form. An absent field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    #[cfg(test)]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Localized message for `field`, if it failed validation.
    #[must_use]
    pub fn message(&self, field: Field, messages: &Messages) -> Option<&'static str> {
        self.get(field).map(|error| messages.validation(error))
    }

    /// Every failing field with its localized message.
    #[must_use]
    #[cfg(test)]
    pub fn messages(&self, messages: &Messages) -> BTreeMap<Field, &'static str> {
        self.errors
            .iter()
            .map(|(field, error)| (*field, messages.validation(*error)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

/// Transient values of the add-food form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub name: String,
    pub price: NumberValue,
    pub quantity: NumberValue,
    pub category: Option<Category>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: NumberValue::Number(0.0),
            quantity: NumberValue::Number(0.0),
            category: None,
        }
    }
}

/// Largest quantity a submitted item can carry (`u32::MAX`).
pub const MAX_QUANTITY: f64 = 4_294_967_295.0;

/// Check every field of `form`, reporting all failures at once.
#[must_use]
pub fn validate(form: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationError::MissingName);
    }
    if !form.price.is_positive() {
        errors.insert(Field::Price, ValidationError::PriceNotPositive);
    }
    if !form.quantity.is_positive() {
        errors.insert(Field::Quantity, ValidationError::QuantityBelowOne);
    } else if form.quantity.exceeds(MAX_QUANTITY) {
        errors.insert(Field::Quantity, ValidationError::QuantityTooLarge);
    }
    if form.category.is_none() {
        errors.insert(Field::Category, ValidationError::MissingCategory);
    }
    errors
}
