use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use tracing::{debug, error};

use crate::Theme;
use crate::config::{AppConfig, GlobalAction, KeyResolver};
use crate::menu::Messages;
use crate::screen::{HostingMode, OrderEvent, OrderScreen};
use crate::tui::{Event, Tui};
use crate::ui::{Component, EventResult, Screen, StatusBar, Toast, ToastManager};

const FRAME_RATE: f64 = 30.0;
const TICK_RATE: f64 = 4.0;

pub struct App {
    screen: OrderScreen,
    status_bar: StatusBar,
    toasts: ToastManager,
    theme: Theme,
    resolver: Arc<KeyResolver>,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(config: &AppConfig, resolver: Arc<KeyResolver>, theme: Theme) -> Self {
        let mode = if config.controlled {
            HostingMode::Controlled
        } else {
            HostingMode::Uncontrolled
        };
        let messages = Messages::for_locale(config.locale);
        Self {
            screen: OrderScreen::new(mode, messages, Arc::clone(&resolver)),
            status_bar: StatusBar::new(Arc::clone(&resolver)),
            toasts: ToastManager::new(),
            theme,
            resolver,
            should_quit: false,
            should_suspend: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        loop {
            let Some(event) = tui.next_event().await else {
                break;
            };

            match event {
                Event::Render => self.render(&mut tui)?,
                Event::Resize(width, height) => {
                    tui.resize(Rect::new(0, 0, width, height))?;
                    self.render(&mut tui)?;
                }
                other => self.handle_event(other),
            }

            if self.should_suspend {
                tui.suspend()?;
                self.should_suspend = false;
                tui.enter()?;
                tui.clear()?;
            }
            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.should_quit = true,
            Event::Tick => self.toasts.handle_tick(),
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.screen.handle_paste(&text),
            Event::Error(message) => error!("Terminal event error: {message}"),
            Event::Init | Event::Render | Event::Resize(..) => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen.handle_key(key) {
            Ok(EventResult::Event(event)) => self.handle_order_event(event),
            Ok(EventResult::Consumed) => {}
            Ok(EventResult::Ignored) => {
                if self.resolver.matches_global(&key, GlobalAction::Quit) {
                    self.should_quit = true;
                } else if key.code == KeyCode::Char('z')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    self.should_suspend = true;
                }
            }
            Err(e) => error!("Error handling key: {e}"),
        }
    }

    fn handle_order_event(&mut self, event: OrderEvent) {
        match event {
            OrderEvent::Added(item) => {
                self.toasts.show(Toast::success(format!(
                    "{} × {} added",
                    item.quantity, item.name
                )));
            }
            OrderEvent::Discarded => {
                debug!("Add food dialog closed without saving");
                self.toasts.show(Toast::info("Entry discarded"));
            }
        }
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let keybindings = self.screen.keybindings();
        tui.draw(|frame| {
            let [main, status] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
            self.screen.render(frame, main, &self.theme);
            self.status_bar
                .render_with_keybindings(frame, status, &self.theme, &keybindings);
            self.toasts.render(frame, main, &self.theme);
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(
            &AppConfig::default(),
            Arc::new(KeyResolver::default()),
            Theme::default(),
        )
    }

    #[test]
    fn test_quit_key_quits_when_dialog_closed() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_key_is_text_while_dialog_open() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('a')));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert!(app.screen.dialog_open());
    }

    #[test]
    fn test_discarded_entry_shows_toast() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('a')));
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.screen.dialog_open());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn test_added_item_shows_toast() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('a')));
        app.handle_event(Event::Paste("Fried Rice".to_string()));
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(Event::Paste("50".to_string()));
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(Event::Paste("2".to_string()));
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Right));
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL,
        )));

        assert!(!app.screen.dialog_open());
        assert_eq!(app.screen.lines().len(), 1);
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn test_ctrl_z_requests_suspend() {
        let mut app = app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('z'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_suspend);
    }

    #[test]
    fn test_controlled_config_hosts_dialog() {
        let config = AppConfig {
            controlled: true,
            ..AppConfig::default()
        };
        let mut app = App::new(&config, Arc::new(KeyResolver::default()), Theme::default());
        app.handle_event(key(KeyCode::Char('a')));
        assert!(app.screen.dialog_open());
        app.handle_event(Event::Paste("Khao soi".to_string()));
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.screen.dialog_open());
        assert!(app.screen.lines().is_empty());
    }
}
