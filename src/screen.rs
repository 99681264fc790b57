//! Full-page screens and the dialogs they host.

mod add_food;
mod order;

pub use order::{HostingMode, OrderEvent, OrderScreen};
