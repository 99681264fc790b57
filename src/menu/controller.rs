//! State owner for the add-food dialog.
//!
//! The controller holds the form, the last validation result and the dialog
//! visibility. Hosts receive results through [`ModalHost`].

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::form::{FieldErrors, FormState, NumberValue, validate};
use super::{Category, SubmittedItem};

/// Callbacks the dialog invokes on its host.
pub trait ModalHost {
    /// A valid item was submitted.
    fn on_add(&mut self, item: SubmittedItem);

    /// The dialog closed itself (submit, cancel or dismissal).
    fn on_close(&mut self) {}
}

/// Notification emitted by the dialog, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent {
    Added(SubmittedItem),
    Closed,
}

impl ModalEvent {
    /// Replay the notification as a callback on `host`.
    pub fn deliver(self, host: &mut impl ModalHost) {
        match self {
            Self::Added(item) => host.on_add(item),
            Self::Closed => host.on_close(),
        }
    }
}

/// Collects notifications so they can be handed to a parent as events.
impl ModalHost for Vec<ModalEvent> {
    fn on_add(&mut self, item: SubmittedItem) {
        self.push(ModalEvent::Added(item));
    }

    fn on_close(&mut self) {
        self.push(ModalEvent::Closed);
    }
}

/// Who owns the open/closed flag. Chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The host supplies the flag; the controller only reports closes.
    Controlled { opened: bool },
    /// The controller owns the flag.
    Uncontrolled { opened: bool },
}

impl Visibility {
    /// Controlled when the host supplies a flag, uncontrolled otherwise.
    #[must_use]
    pub const fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(opened) => Self::Controlled { opened },
            None => Self::Uncontrolled { opened: false },
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        match self {
            Self::Controlled { opened } | Self::Uncontrolled { opened } => opened,
        }
    }

    #[must_use]
    pub const fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    OpenClean,
    OpenWithErrors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The item was handed to the host and the dialog closed.
    Added(Uuid),
    /// Validation failed; errors are available from [`AddFoodController::errors`].
    Rejected,
}

pub struct AddFoodController {
    form: FormState,
    errors: FieldErrors,
    visibility: Visibility,
}

impl AddFoodController {
    #[must_use]
    pub fn new(visibility: Visibility) -> Self {
        Self {
            form: FormState::default(),
            errors: FieldErrors::default(),
            visibility,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn uncontrolled() -> Self {
        Self::new(Visibility::Uncontrolled { opened: false })
    }

    #[cfg(test)]
    #[must_use]
    pub fn controlled(opened: bool) -> Self {
        Self::new(Visibility::Controlled { opened })
    }

    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        if !self.is_open() {
            ModalState::Closed
        } else if self.errors.is_empty() {
            ModalState::OpenClean
        } else {
            ModalState::OpenWithErrors
        }
    }

    /// Handle the trigger action. Returns whether visibility changed.
    ///
    /// In controlled mode this never changes visibility; the host decides.
    pub fn open(&mut self) -> bool {
        match &mut self.visibility {
            Visibility::Uncontrolled { opened } if !*opened => {
                *opened = true;
                debug!("Add food dialog opened");
                true
            }
            Visibility::Uncontrolled { .. } => false,
            Visibility::Controlled { .. } => {
                debug!("Open requested on host-controlled dialog");
                false
            }
        }
    }

    /// Apply the host's visibility flag. Ignored in uncontrolled mode.
    pub fn sync_opened(&mut self, flag: bool) {
        match &mut self.visibility {
            Visibility::Controlled { opened } => *opened = flag,
            Visibility::Uncontrolled { .. } => {
                warn!("Ignoring host visibility flag on self-managed dialog");
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub const fn set_price(&mut self, price: NumberValue) {
        self.form.price = price;
    }

    /// Numbers are truncated toward zero; quantities are whole.
    pub fn set_quantity(&mut self, quantity: NumberValue) {
        self.form.quantity = quantity.truncated();
    }

    pub const fn set_category(&mut self, category: Option<Category>) {
        self.form.category = category;
    }

    /// Validate the current form, replacing any previous errors.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.form);
        self.errors.is_empty()
    }

    /// Submit the form.
    ///
    /// Only a form that passes validation reaches the host. On success the
    /// form is reset and the dialog closes.
    pub fn submit(&mut self, host: &mut impl ModalHost) -> SubmitOutcome {
        if !self.validate() {
            debug!(errors = self.errors.len(), "Add food submission rejected");
            return SubmitOutcome::Rejected;
        }

        let Some(item) = self.submitted_item() else {
            // Unreachable for a validated form; keep the dialog open.
            return SubmitOutcome::Rejected;
        };
        let id = item.id;
        info!(%id, name = %item.name, category = %item.category, "Food item added");
        host.on_add(item);
        self.close(host);
        SubmitOutcome::Added(id)
    }

    /// Discard entered values and close.
    pub fn cancel(&mut self, host: &mut impl ModalHost) {
        debug!("Add food dialog cancelled");
        self.close(host);
    }

    /// Close through a dismissal gesture. Same effect as [`Self::cancel`].
    pub fn dismiss(&mut self, host: &mut impl ModalHost) {
        debug!("Add food dialog dismissed");
        self.close(host);
    }

    fn close(&mut self, host: &mut impl ModalHost) {
        self.reset();
        if let Visibility::Uncontrolled { opened } = &mut self.visibility {
            *opened = false;
        }
        host.on_close();
    }

    fn reset(&mut self) {
        self.form = FormState::default();
        self.errors = FieldErrors::default();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn submitted_item(&self) -> Option<SubmittedItem> {
        let price = self.form.price.as_number()?;
        // Validated as a whole number in 1..=MAX_QUANTITY.
        let quantity = self.form.quantity.as_number()?.trunc() as u32;
        Some(SubmittedItem {
            id: Uuid::new_v4(),
            name: self.form.name.clone(),
            price,
            quantity,
            category: self.form.category?,
        })
    }
}
