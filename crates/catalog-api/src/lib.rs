//! Catalog HTTP API
//!
//! REST endpoints under `/categories`, a GraphQL endpoint at `/graphql`,
//! the OpenAPI document at `/api-docs/openapi.json` and `/health`.
//!
//! ```text
//! ┌───────────────┐   ┌──────────────┐   ┌─────────────────────┐
//! │ REST handlers │   │  GraphQL     │   │  logging middleware │
//! └──────┬────────┘   └──────┬───────┘   └─────────────────────┘
//!        │    AppState (use cases)
//!        ▼                   ▼
//! ┌─────────────────────────────────────┐
//! │ catalog-application use cases       │
//! └──────────────────┬──────────────────┘
//!                    ▼
//! ┌─────────────────────────────────────┐
//! │ catalog-persistence (memory|sqlite) │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod presenters;
pub mod routes;
pub mod server;
pub mod settings;
pub mod state;
pub mod telemetry;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use server::ApiServer;
pub use state::AppState;
