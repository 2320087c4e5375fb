//! Session Handlers
//!
//! HTTP handlers for the session endpoints:
//!
//! - `POST /api/sessions/register` - create an account, answer with a token
//! - `POST /api/sessions/login` - verify credentials, answer with a token
//! - `GET /api/sessions/current` - identity resolved by the gate

/// Request/response types shared by the handlers
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Current-session handler
pub mod current;

pub use current::current;
pub use login::login;
pub use register::register;
pub use types::{AuthResponse, CurrentResponse, LoginRequest, RegisterRequest};
