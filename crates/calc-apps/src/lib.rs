//! Calculator App
//!
//! The application layer around [`calc_engine`]:
//!
//! - **CalculatorApp**: owns one engine per session and renders its view
//! - **keymap**: keypad buttons and keyboard keys → engine commands
//! - **format**: thousands grouping and display truncation
//! - **App Protocol**: binary wire format for UI ↔ App communication
//! - **CalculatorConfig**: presentation settings loaded from JSON
//!
//! # Example
//!
//! ```
//! use calc_apps::{CalculatorApp, InputEvent};
//!
//! let mut app = CalculatorApp::default();
//! for label in ["1", "2", "0", "0", "×", "3", "="] {
//!     app.handle_input(&InputEvent::button(label));
//! }
//!
//! assert_eq!(app.render().display, "3,600");
//! ```

extern crate alloc;

pub mod app;
pub mod app_protocol;
pub mod config;
pub mod error;
pub mod format;
pub mod keymap;

// Re-export core types at crate root
pub use app::CalculatorApp;
pub use app_protocol::{CalculatorState, InputEvent, Key};
pub use config::CalculatorConfig;
pub use error::{AppError, ProtocolError};
pub use format::DisplayFormatter;
