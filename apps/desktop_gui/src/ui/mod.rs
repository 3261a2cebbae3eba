//! UI layer for the desktop generator: app shell and theme visuals.

pub mod app;
pub mod theme;

pub use app::PdfGeneratorApp;
