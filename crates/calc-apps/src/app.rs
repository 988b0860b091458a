//! Calculator Application
//!
//! Owns one engine per session, feeds it commands decoded from UI input,
//! and renders a [`CalculatorState`] after every input.

use crate::app_protocol::{CalculatorState, InputEvent};
use crate::config::CalculatorConfig;
use crate::error::AppError;
use crate::format::{truncate, DisplayFormatter};
use crate::keymap::command_for_event;
use alloc::string::String;
use alloc::vec::Vec;
use calc_engine::{CalculatorEngine, Command};

/// Calculator session: engine plus presentation rules.
#[derive(Clone, Debug)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    formatter: DisplayFormatter,
    config: CalculatorConfig,
}

impl CalculatorApp {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            formatter: DisplayFormatter::new(&config),
            config,
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Apply one command and render the result.
    pub fn handle_command(&mut self, command: Command) -> CalculatorState {
        self.engine.apply(command);
        let state = self.render();
        tracing::debug!(
            %command,
            display = %state.display,
            history = %state.history,
            "Handled command"
        );
        state
    }

    /// Handle a UI input event. Unmapped events leave the engine untouched
    /// and re-render the current view.
    pub fn handle_input(&mut self, event: &InputEvent) -> CalculatorState {
        match command_for_event(event) {
            Some(command) => self.handle_command(command),
            None => {
                tracing::trace!(?event, "Ignored input");
                self.render()
            }
        }
    }

    /// Decode an input frame, handle it and encode the resulting view.
    pub fn on_message(&mut self, data: &[u8]) -> Result<Vec<u8>, AppError> {
        let event = InputEvent::from_bytes(data).map_err(|e| {
            tracing::warn!(error = %e, len = data.len(), "Dropping malformed input frame");
            e
        })?;
        let state = self.handle_input(&event);
        Ok(state.to_bytes()?)
    }

    /// Current view. A recovered computation error replaces the main line
    /// until the next command.
    pub fn render(&self) -> CalculatorState {
        let (display, has_error) = match self.engine.error() {
            Some(error) => (
                truncate(self.config.error_text_for(error), self.config.max_display_len),
                true,
            ),
            None => (self.formatter.main_line(self.engine.display_value()), false),
        };

        let history = match (self.engine.previous_operand(), self.engine.pending_operation()) {
            (Some(previous), Some(op)) => self.formatter.history_line(previous.as_str(), op),
            _ => String::new(),
        };

        CalculatorState {
            display,
            history,
            pending_op: self.engine.pending_operation().map(|op| op.symbol()),
            has_error,
        }
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_protocol::Key;

    fn type_keys(app: &mut CalculatorApp, keys: &str) -> CalculatorState {
        let mut state = app.render();
        for c in keys.chars() {
            state = app.handle_input(&InputEvent::key(Key::from_char(c)));
        }
        state
    }

    #[test]
    fn test_initial_render() {
        let app = CalculatorApp::default();
        assert_eq!(app.render(), CalculatorState::initial());
    }

    #[test]
    fn test_history_line_while_pending() {
        let mut app = CalculatorApp::default();
        let state = type_keys(&mut app, "1200*");
        assert_eq!(state.display, "1,200");
        assert_eq!(state.history, "1,200 ×");
        assert_eq!(state.pending_op, Some('×'));

        let state = type_keys(&mut app, "3\r");
        assert_eq!(state.display, "3,600");
        assert_eq!(state.history, "");
        assert_eq!(state.pending_op, None);
    }

    #[test]
    fn test_error_overlay_shown_once() {
        let mut app = CalculatorApp::default();
        let state = type_keys(&mut app, "5/0=");
        assert!(state.has_error);
        assert_eq!(state.display, "Error: Div by 0");
        assert_eq!(app.engine().display_value(), "0");

        // Ignored keys do not consume the overlay
        let state = type_keys(&mut app, "q");
        assert!(state.has_error);

        let state = type_keys(&mut app, "4");
        assert!(!state.has_error);
        assert_eq!(state.display, "4");
    }

    #[test]
    fn test_custom_error_text_is_truncated() {
        let config = CalculatorConfig {
            max_display_len: 5,
            divide_by_zero_text: String::from("Cannot divide"),
            ..CalculatorConfig::default()
        };
        let mut app = CalculatorApp::new(config);
        let state = type_keys(&mut app, "1/0=");
        assert_eq!(state.display, "Canno");
    }

    #[test]
    fn test_buttons_and_keys_agree() {
        let mut by_button = CalculatorApp::default();
        for label in ["1", "2", "+", "3", "=", "%"] {
            by_button.handle_input(&InputEvent::button(label));
        }

        let mut by_key = CalculatorApp::default();
        type_keys(&mut by_key, "12+3=%");

        assert_eq!(by_button.render(), by_key.render());
        assert_eq!(by_key.render().display, "0.15");
    }

    #[test]
    fn test_on_message_roundtrip() {
        let mut app = CalculatorApp::default();
        let reply = app
            .on_message(&InputEvent::button("9").to_bytes().unwrap())
            .unwrap();
        let state = CalculatorState::from_bytes(&reply).unwrap();
        assert_eq!(state.display, "9");
    }

    #[test]
    fn test_on_message_rejects_garbage() {
        let mut app = CalculatorApp::default();
        let err = app.on_message(&[0xff, 0x00]).unwrap_err();
        assert!(matches!(err, AppError::ProtocolError(_)));
        assert_eq!(app.engine().display_value(), "0");
    }
}
