//! Populate configuration structs from environment variables
//!
//! `envbind` fills the fields of a struct from environment variables, one
//! field at a time, with native support for **file-based secrets**
//! (Kubernetes Secrets, Docker Secrets): any variable `VAR` can instead be
//! provided as a file whose path is in `VAR_FILE`.
//!
//! # Features
//!
//! - **File-based secrets**: every binding falls back to `{VAR}_FILE`
//! - **Declarative**: bindings are declared with `#[env("VAR")]` and `#[derive(Populate)]`
//! - **Non-destructive**: unset variables leave fields at their current value
//! - **Required fields**: `#[env("VAR,required")]` fails when the variable is missing
//! - **Shapes**: scalar fields, `Vec<T>` sequences and `Option<T>` fields
//!
//! # Example
//!
//! ```rust
//! use envbind::Populate;
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, Populate)]
//! pub struct Config {
//!     #[env("DOC_DATABASE_URL,required")]
//!     pub database_url: String,
//!
//!     #[env("DOC_PORT")]
//!     pub port: u16,
//!
//!     #[env("DOC_REQUEST_TIMEOUT")]
//!     pub request_timeout: Option<Duration>,
//!
//!     #[env("DOC_ALLOWED_ORIGINS")]
//!     pub allowed_origins: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), envbind::Error> {
//! #     std::env::set_var("DOC_DATABASE_URL", "postgres://localhost/db");
//! #     std::env::set_var("DOC_ALLOWED_ORIGINS", "https://a.example,https://b.example");
//! let mut config = Config {
//!     port: 8080,
//!     ..Config::default()
//! };
//! envbind::populate(&mut config)?;
//!
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.port, 8080); // DOC_PORT is not set
//! assert_eq!(config.request_timeout, None);
//! assert_eq!(config.allowed_origins.len(), 2);
//! #     Ok(())
//! # }
//! ```
//!
//! # Bindings
//!
//! A binding is `#[env("VAR")]` or `#[env("VAR,required")]`. Fields without
//! a binding are left alone. Every field of the struct must be `pub`;
//! population fails with [`Error::FieldUnexported`] otherwise.
//!
//! **Loading priority:**
//! 1. Direct env var (`API_KEY`), even when empty - for local development
//! 2. Contents of the file at `API_KEY_FILE`, verbatim - for production
//!
//! A `_FILE` path that cannot be read counts as unset.
//!
//! # Supported types
//!
//! | Field type | Value format |
//! |---|---|
//! | `String` | as is |
//! | `Vec<u8>` | raw bytes |
//! | `Vec<String>` | comma separated, not trimmed |
//! | `i8` … `i64`, `isize`, `u8` … `u64`, `usize` | base 10 |
//! | `f32`, `f64` | `1.5`, `-2e3` |
//! | `bool` | `1 t T TRUE true True 0 f F FALSE false False` |
//! | `time::OffsetDateTime` | RFC 3339, `2025-01-01T00:00:00Z` |
//! | `std::time::Duration` | `300ms`, `1.5h`, `2h45m` |
//! | `tracing::Level` | `debug`, `info`, `warn`, `error` |
//!
//! Each of these can also be wrapped in `Option<T>`. An unset `Option` field
//! stays `None`.
//!
//! # Sources
//!
//! [`populate_from`] reads from any [`Source`] instead of the process
//! environment, e.g. a `HashMap<String, String>`:
//!
//! ```rust
//! use envbind::Populate;
//! use std::collections::HashMap;
//!
//! #[derive(Default, Populate)]
//! pub struct Limits {
//!     #[env("MAX_CONNECTIONS,required")]
//!     pub max_connections: u32,
//! }
//!
//! let vars = HashMap::from([("MAX_CONNECTIONS".to_string(), "64".to_string())]);
//! let mut limits = Limits::default();
//! envbind::populate_from(&mut limits, &vars).unwrap();
//! assert_eq!(limits.max_connections, 64);
//! ```

pub mod binding;
pub mod decode;
pub mod duration;
pub mod source;
pub mod target;

mod error;
mod populate;

pub use envbind_derive::Populate;
pub use error::{DecodeError, Error};
pub use populate::{populate, populate_from, try_populate, Field, Populate};
pub use source::{resolve, resolve_in, ProcessEnv, Source};
pub use target::Target;
