use serde::{Deserialize, Serialize};

use super::form::ValidationError;

/// Language of the dialog's labels and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

/// Display strings for the add-food dialog.
///
/// Validation logic only produces [`ValidationError`] kinds; the text shown
/// to the user is looked up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub trigger: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub price_label: &'static str,
    pub price_placeholder: &'static str,
    pub quantity_label: &'static str,
    pub quantity_placeholder: &'static str,
    pub category_label: &'static str,
    pub category_placeholder: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub missing_name: &'static str,
    pub price_not_positive: &'static str,
    pub quantity_below_one: &'static str,
    pub quantity_too_large: &'static str,
    pub missing_category: &'static str,
}

impl Messages {
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::Th => Self::thai(),
        }
    }

    #[must_use]
    pub const fn english() -> Self {
        Self {
            title: "add food item",
            trigger: "add food item",
            name_label: "Food name",
            name_placeholder: "e.g. chicken rice",
            price_label: "Price (baht)",
            price_placeholder: "e.g. 50",
            quantity_label: "Quantity",
            quantity_placeholder: "e.g. 1",
            category_label: "Category",
            category_placeholder: "Select a category",
            cancel: "Cancel",
            save: "Save",
            missing_name: "enter a food name",
            price_not_positive: "enter a price greater than 0",
            quantity_below_one: "enter a quantity of at least 1",
            quantity_too_large: "enter a smaller quantity",
            missing_category: "select a category",
        }
    }

    #[must_use]
    pub const fn thai() -> Self {
        Self {
            title: "เพิ่มรายการอาหาร",
            trigger: "เพิ่มรายการอาหาร",
            name_label: "ชื่ออาหาร",
            name_placeholder: "เช่น ข้าวมันไก่",
            price_label: "ราคา (บาท)",
            price_placeholder: "เช่น 50",
            quantity_label: "จำนวนที่สั่ง",
            quantity_placeholder: "เช่น 1",
            category_label: "หมวดหมู่",
            category_placeholder: "เลือกหมวดหมู่",
            cancel: "ยกเลิก",
            save: "บันทึก",
            missing_name: "กรุณากรอกชื่ออาหาร",
            price_not_positive: "กรุณากรอกราคาที่มากกว่า 0",
            quantity_below_one: "กรุณากรอกจำนวนอย่างน้อย 1",
            quantity_too_large: "กรุณากรอกจำนวนที่น้อยกว่านี้",
            missing_category: "กรุณาเลือกหมวดหมู่",
        }
    }

    #[must_use]
    pub const fn validation(&self, error: ValidationError) -> &'static str {
        match error {
            ValidationError::MissingName => self.missing_name,
            ValidationError::PriceNotPositive => self.price_not_positive,
            ValidationError::QuantityBelowOne => self.quantity_below_one,
            ValidationError::QuantityTooLarge => self.quantity_too_large,
            ValidationError::MissingCategory => self.missing_category,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_selects_catalog() {
        assert_eq!(Messages::for_locale(Locale::En), Messages::english());
        assert_eq!(Messages::for_locale(Locale::Th), Messages::thai());
    }

    #[test]
    fn test_validation_lookup() {
        let thai = Messages::thai();
        assert_eq!(thai.validation(ValidationError::MissingCategory), "กรุณาเลือกหมวดหมู่");
        let english = Messages::english();
        assert_eq!(
            english.validation(ValidationError::QuantityBelowOne),
            "enter a quantity of at least 1"
        );
    }

    #[test]
    fn test_locale_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let parsed: Wrapper = toml::from_str("locale = \"th\"").unwrap();
        assert_eq!(parsed.locale, Locale::Th);
    }
}
