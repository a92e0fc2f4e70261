//! Terminal user interface components.
//!
//! This module contains the pincode view, the paste-only input field, the
//! resend cooldown state, and the terminal lifecycle helpers used by host
//! applications, all built on Ratatui.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod component;
pub mod input;
pub mod resend;
pub mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

// Re-export TUI components
pub use component::Component;
pub use input::{FieldEvent, InputCore, PasteOnlyField};
pub use resend::ResendState;
pub use view::{PincodeEvent, PincodeView};

/// Terminal handle used by the helpers below.
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Puts the terminal into raw mode with the alternate screen and bracketed
/// paste enabled.
///
/// Bracketed paste is what lets the event loop receive whole pasted codes
/// as `Event::Paste` instead of a burst of key presses.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Restores the terminal to its original state.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
