//! Storefront views

mod account;
mod home;
mod library;
mod login;
mod signup;

pub use account::AccountPage;
pub use home::HomePage;
pub use library::LibraryPage;
pub use login::LoginPage;
pub use signup::SignupPage;
