//! Backend implementation.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Middleware** (`middleware/`) - The request guard chain: per-request context,
//!   collaborator interfaces, permission evaluation and session access
//! - **Validation** (`validation`) - Fail-fast field validation pipeline
//! - **Service Layer** (`service/`) - Business logic orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide the infrastructure: `config` (environment-based
//! configuration), `state` (shared application state), `startup` (database,
//! migrations, session store), `router` (route registration and API docs) and
//! `util` (markdown rendering, body parsing).
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a handler with its bound guard list
//! 2. **Guard chain** runs each guard in order; the first failure answers the
//!    request and the handler never executes
//! 3. **Controller** parses the body, runs body-derived checks and validation
//! 4. **Service/Data** perform the operation
//! 5. **Controller** converts the domain result to a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
