mod spinner;
mod theme_toggle;

pub use spinner::{LoadingSpinner as Spinner, SpinnerSize};
pub use theme_toggle::ThemeToggle;
