//! Logic modules: translate high-level user choices into session actions.
//!
//! # Modules
//!
//! - `resolver`: pure package/service resolution for profiles
//! - `profile_handler`: installs a selected profile and its greeter
//! - `application_handler`: dispatches the optional applications

pub mod application_handler;
pub mod profile_handler;
pub mod resolver;

pub use application_handler::ApplicationHandler;
pub use profile_handler::ProfileHandler;
