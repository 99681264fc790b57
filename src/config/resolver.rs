use crate::config::actions::*;
use crate::config::keybindings::KeybindingsConfig;
use crossterm::event::KeyEvent;
use std::sync::Arc;

pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(Arc::new(KeybindingsConfig::default()))
    }
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    // Global actions
    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.matches(event),
            GlobalAction::AddItem => kb.add_item.matches(event),
        }
    }

    pub fn display_global(&self, action: GlobalAction) -> String {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.display(),
            GlobalAction::AddItem => kb.add_item.display(),
        }
    }

    // Form actions
    pub fn matches_form(&self, event: &KeyEvent, action: FormAction) -> bool {
        let kb = &self.keybindings.form;
        match action {
            FormAction::NextField => kb.next_field.matches(event),
            FormAction::PrevField => kb.prev_field.matches(event),
            FormAction::Submit => kb.submit.matches(event),
            FormAction::Dismiss => kb.dismiss.matches(event),
            FormAction::Activate => kb.activate.matches(event),
        }
    }

    pub fn display_form(&self, action: FormAction) -> String {
        let kb = &self.keybindings.form;
        match action {
            FormAction::NextField => kb.next_field.display(),
            FormAction::PrevField => kb.prev_field.display(),
            FormAction::Submit => kb.submit.display(),
            FormAction::Dismiss => kb.dismiss.display(),
            FormAction::Activate => kb.activate.display(),
        }
    }

    // Select actions
    pub fn matches_select(&self, event: &KeyEvent, action: SelectAction) -> bool {
        let kb = &self.keybindings.select;
        match action {
            SelectAction::NextOption => kb.next_option.matches(event),
            SelectAction::PrevOption => kb.prev_option.matches(event),
            SelectAction::Clear => kb.clear.matches(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_default_form_bindings() {
        let resolver = KeyResolver::default();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let plain_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);

        assert!(resolver.matches_form(&tab, FormAction::NextField));
        assert!(resolver.matches_form(&back_tab, FormAction::PrevField));
        assert!(resolver.matches_form(&ctrl_s, FormAction::Submit));
        assert!(!resolver.matches_form(&plain_s, FormAction::Submit));
        assert_eq!(resolver.display_form(FormAction::Submit), "ctrl+s");
    }

    #[test]
    fn test_default_global_bindings() {
        let resolver = KeyResolver::default();
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(resolver.matches_global(&a, GlobalAction::AddItem));
        assert!(!resolver.matches_global(&a, GlobalAction::Quit));
    }
}
