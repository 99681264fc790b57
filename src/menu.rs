//! Food item entry: form model, validation messages and the dialog controller.
//!
//! - [`FormState`] - transient values of the add-food form
//! - [`Messages`] - localized labels and validation messages
//! - [`AddFoodController`] - visibility, validation and submission

pub mod controller;
pub mod form;
pub mod messages;

use std::fmt;

use uuid::Uuid;

pub use controller::{AddFoodController, ModalEvent, ModalHost, ModalState, SubmitOutcome, Visibility};
pub use form::{Field, FormState, NumberValue};
pub use messages::{Locale, Messages};

/// Menu category a food item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MainCourse,
    Drink,
    Dessert,
}

impl Category {
    /// All categories, in the order the dialog offers them.
    pub const ALL: [Self; 3] = [Self::MainCourse, Self::Drink, Self::Dessert];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MainCourse => "Main Course",
            Self::Drink => "Drink",
            Self::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated food item handed to the host on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedItem {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: Category,
}

impl SubmittedItem {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
