//! TUI error types

/// Errors that abort the TUI
///
/// Fetch failures are deliberately NOT represented here: they are
/// surfaced through the status bar message and never unwind the UI.
#[derive(thiserror::Error, Debug)]
pub enum TuiError {
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(std::io::Error),

    #[error("failed to render frame: {0}")]
    Render(std::io::Error),

    #[error("failed to restore terminal: {0}")]
    TerminalRestore(std::io::Error),
}
