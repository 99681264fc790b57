pub mod actions;
mod defaults;
pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

pub use actions::*;
use keybindings::KeybindingsConfig;
pub use loader::load;
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

use crate::menu::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub locale: Locale,
    /// Host the add-food dialog with screen-owned visibility.
    #[serde(default)]
    pub controlled: bool,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.theme.name, "Catppuccin Mocha");
        assert_eq!(config.locale, Locale::En);
        assert!(!config.controlled);
    }

    #[test]
    fn test_partial_keybindings_keep_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            locale = "th"
            controlled = true

            [keybindings.global]
            add_item = "n"
            "#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::Th);
        assert!(config.controlled);

        let n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(config.keybindings.global.add_item.matches(&n));
        assert!(config.keybindings.global.quit.matches(&q));
        assert_eq!(config.keybindings.form.submit.display(), "ctrl+s");
    }
}
