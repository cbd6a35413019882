//! Server Module
//!
//! This module initializes and configures the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading, data directory setup
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, config file, environment
//! 2. **Store Creation**: opens the document directory
//! 3. **Router Creation**: API routes, static frontend, CORS, tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use rubricy::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(load_config()?).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::{AppState, SharedDocumentStore};
pub use init::create_app;
