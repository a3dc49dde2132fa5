//! Core domain logic for the auction platform client

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(test)]
mod tests;
