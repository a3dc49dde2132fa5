//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Landing page (home)
//! - Login page
//! - Register page (credentials + OTP verification)
//! - Dashboard

mod dashboard;
mod landing;
mod login;
mod not_found;
mod register;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
