//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, frontend, CORS
//! └── api_routes.rs   - /api endpoints
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `POST /api/chat`
//! - `POST /api/check-grammar`
//! - `POST /api/improve-style`
//! - `POST /api/generate-ideas`
//! - `POST /api/save-document`
//! - `GET /api/load-document/{id}`
//! - `GET /api/list-documents`
//! - `POST /api/export-document`
//!
//! ## Frontend
//!
//! - `GET /` - `index.html` from the static directory
//! - `GET /static/*` - frontend assets

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
