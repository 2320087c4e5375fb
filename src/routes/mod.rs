//! Routes Module
//!
//! Router assembly for the backend server.
//!
//! - **`router`** - Combines API routes, static file serving for uploads,
//!   and the 404 fallback
//! - **`api_routes`** - Session, mock-product, and upload endpoints

/// Main router assembly
pub mod router;

/// API endpoint configuration
pub mod api_routes;
