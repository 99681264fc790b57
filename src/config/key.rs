use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        // For character keys, compare case-insensitively when shift is involved
        match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                // Check if the characters match (considering case)
                let chars_match = a == b
                    || (a.is_ascii_alphabetic()
                        && b.is_ascii_alphabetic()
                        && a.to_ascii_lowercase() == b.to_ascii_lowercase());

                // Handle shift modifier for uppercase characters
                let expected_mods = if a.is_ascii_uppercase() {
                    self.modifiers | KeyModifiers::SHIFT
                } else {
                    self.modifiers
                };

                let actual_mods = if b.is_ascii_uppercase() {
                    event.modifiers | KeyModifiers::SHIFT
                } else {
                    event.modifiers
                };

                chars_match && (expected_mods & !KeyModifiers::SHIFT) == (actual_mods & !KeyModifiers::SHIFT)
            }
            // Terminals report BackTab with SHIFT held
            (KeyCode::BackTab, KeyCode::BackTab) => {
                (self.modifiers & !KeyModifiers::SHIFT) == (event.modifiers & !KeyModifiers::SHIFT)
            }
            _ => self.code == event.code && self.modifiers == event.modifiers,
        }
    }

    pub fn display(&self) -> String {
        let mut label = String::new();
        for (modifier, name) in MODIFIER_NAMES {
            if self.modifiers.contains(*modifier) {
                label.push_str(name);
                label.push('+');
            }
        }
        match self.code {
            KeyCode::Char(' ') => label.push_str("Space"),
            KeyCode::Char(c) => label.push(c),
            KeyCode::F(n) => label.push_str(&format!("F{n}")),
            code => label.push_str(
                NAMED_KEYS
                    .iter()
                    .find(|(_, named)| *named == code)
                    .map_or("?", |(name, _)| *name),
            ),
        }
        label
    }
}

/// Modifier prefixes in the order they are written.
const MODIFIER_NAMES: &[(KeyModifiers, &str)] = &[
    (KeyModifiers::CONTROL, "ctrl"),
    (KeyModifiers::ALT, "alt"),
    (KeyModifiers::SHIFT, "shift"),
];

/// Non-character keys by their config name. The first name for a code is
/// the one shown in hints.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Enter", KeyCode::Enter),
    ("Return", KeyCode::Enter),
    ("Esc", KeyCode::Esc),
    ("Escape", KeyCode::Esc),
    ("Tab", KeyCode::Tab),
    ("BackTab", KeyCode::BackTab),
    ("Backspace", KeyCode::Backspace),
    ("Delete", KeyCode::Delete),
    ("Del", KeyCode::Delete),
    ("Insert", KeyCode::Insert),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Space", KeyCode::Char(' ')),
];

fn parse_modifier(name: &str) -> Option<KeyModifiers> {
    if name.eq_ignore_ascii_case("control") {
        return Some(KeyModifiers::CONTROL);
    }
    MODIFIER_NAMES
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(name))
        .map(|(modifier, _)| *modifier)
}

fn parse_code(name: &str) -> Option<KeyCode> {
    let named = NAMED_KEYS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name));
    if let Some((_, code)) = named {
        return Some(*code);
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        // Single chars keep the case they were written with
        (Some(c), None) => Some(KeyCode::Char(c)),
        (Some('f' | 'F'), Some(_)) => name[1..].parse().ok().map(KeyCode::F),
        _ => None,
    }
}

impl FromStr for Key {
    type Err = String;

    /// Parse `"q"`, `"Enter"`, `"F2"` or modifier chains like `"ctrl+s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // A lone "+" is the plus key, not a separator.
        let (prefix, key_part) = match s.rsplit_once('+') {
            Some((prefix, key)) if !key.is_empty() => (Some(prefix), key),
            _ => (None, s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.into_iter().flat_map(|p| p.split('+')) {
            modifiers |= parse_modifier(part).ok_or_else(|| format!("Unknown modifier: {part}"))?;
        }
        let code = parse_code(key_part).ok_or_else(|| format!("Unknown key: {key_part}"))?;

        Ok(Self { code, modifiers })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.display())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Key::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyBinding {
    Single(Key),
    Multiple(Vec<Key>),
}

impl KeyBinding {
    pub fn multiple(keys: Vec<Key>) -> Self {
        KeyBinding::Multiple(keys)
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        match self {
            KeyBinding::Single(key) => key.matches(event),
            KeyBinding::Multiple(keys) => keys.iter().any(|k| k.matches(event)),
        }
    }

    pub fn display(&self) -> String {
        match self {
            KeyBinding::Single(key) => key.display(),
            KeyBinding::Multiple(keys) => {
                keys.iter()
                    .map(|k| k.display())
                    .collect::<Vec<_>>()
                    .join("/")
            }
        }
    }
}

impl From<Key> for KeyBinding {
    fn from(key: Key) -> Self {
        KeyBinding::Single(key)
    }
}

impl From<Vec<Key>> for KeyBinding {
    fn from(keys: Vec<Key>) -> Self {
        KeyBinding::Multiple(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from_str("q").unwrap(), Key::new(KeyCode::Char('q')));
        assert_eq!(Key::from_str("Enter").unwrap(), Key::new(KeyCode::Enter));
        assert_eq!(Key::from_str("Esc").unwrap(), Key::new(KeyCode::Esc));
        assert_eq!(
            Key::from_str("ctrl+c").unwrap(),
            Key::with_ctrl(KeyCode::Char('c'))
        );
        assert_eq!(Key::from_str("F1").unwrap(), Key::new(KeyCode::F(1)));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::new(KeyCode::Char('q')).display(), "q");
        assert_eq!(Key::new(KeyCode::Enter).display(), "Enter");
        assert_eq!(Key::with_ctrl(KeyCode::Char('c')).display(), "ctrl+c");
    }

    #[test]
    fn test_key_matches() {
        let key = Key::new(KeyCode::Char('q'));
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(key.matches(&event));
    }

    #[test]
    fn test_back_tab_ignores_shift() {
        let key = Key::from_str("BackTab").unwrap();
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(key.matches(&event));
        assert_eq!(key.display(), "BackTab");
    }

    #[test]
    fn test_binding_from_toml_list() {
        #[derive(Deserialize)]
        struct Wrapper {
            binding: KeyBinding,
        }
        let parsed: Wrapper = toml::from_str(r#"binding = ["Tab", "ctrl+n"]"#).unwrap();
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(parsed.binding.matches(&ctrl_n));
        assert_eq!(parsed.binding.display(), "Tab/ctrl+n");
    }

    #[test]
    fn test_named_keys_round_trip_through_display() {
        for text in ["ctrl+s", "Esc", "BackTab", "Space", "alt+Backspace", "F2"] {
            let key = Key::from_str(text).unwrap();
            assert_eq!(key.display(), text);
        }
        assert_eq!(Key::from_str("escape").unwrap().display(), "Esc");
        assert_eq!(Key::from_str("Control+x").unwrap(), Key::with_ctrl(KeyCode::Char('x')));
    }

    #[test]
    fn test_invalid_keys_are_rejected() {
        assert!(Key::from_str("hyper+q").is_err());
        assert!(Key::from_str("Fx").is_err());
        assert!(Key::from_str("").is_err());
        assert_eq!(Key::from_str("+").unwrap(), Key::new(KeyCode::Char('+')));
    }

    #[test]
    fn test_uppercase_key() {
        let key = Key::new(KeyCode::Char('G'));
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(key.matches(&event));
    }
}
