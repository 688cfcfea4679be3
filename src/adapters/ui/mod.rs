//! Terminal UI adapters. Banner and interactive prompts.

pub mod banner;
pub mod tui;

pub use tui::TuiInputPort;

/// One-time UI setup: prints the welcome banner.
pub fn init_ui() {
    banner::print_welcome();
}
