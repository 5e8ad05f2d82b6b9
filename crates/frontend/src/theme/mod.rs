//! Theme module

pub mod context;

pub use context::{use_theme, Theme, ThemeAction, ThemeContext, ThemeProvider};
