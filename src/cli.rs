use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::menu::Locale;

#[derive(Parser, Debug)]
#[command(name = "lazymenu", version, about = "Take food orders in the terminal")]
pub struct Args {
    /// Let the order screen own the dialog's visibility
    #[arg(long)]
    pub controlled: bool,

    /// Language for labels and validation messages
    #[arg(short, long, value_enum)]
    pub locale: Option<Locale>,

    /// Theme name, full or short (e.g., "Catppuccin Latte" or "latte")
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Apply flags on top of the loaded config.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if self.controlled {
            config.controlled = true;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(theme) = &self.theme {
            config.theme.name.clone_from(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["lazymenu", "--controlled", "--locale", "th", "-t", "Catppuccin Latte"]);
        let mut config = AppConfig::default();
        args.apply_to(&mut config);
        assert!(config.controlled);
        assert_eq!(config.locale, Locale::Th);
        assert_eq!(config.theme.name, "Catppuccin Latte");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["lazymenu"]);
        let mut config = AppConfig {
            locale: Locale::Th,
            ..AppConfig::default()
        };
        args.apply_to(&mut config);
        assert!(!config.controlled);
        assert_eq!(config.locale, Locale::Th);
    }
}
