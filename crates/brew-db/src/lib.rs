//! # brew-db: Document Store Layer for Brew Mug
//!
//! This crate is everything between the session and the document database:
//! the [`DocumentStore`] contract, its SQLite and in-memory backends, and
//! the typed repositories that map documents into brew-core records.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brew Mug Data Flow                               │
//! │                                                                         │
//! │  BeverageState::init / make_beverage                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     brew-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ Repositories  │    │ DocumentStore │    │  Migrations  │  │   │
//! │  │   │ Catalog<T>    │───►│ Database      │    │  (embedded)  │  │   │
//! │  │   │ Beverage      │    │ MemoryStore   │    │ 001_docs.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (or process memory)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `DocumentStore` trait
//! - [`document`] - `Document`, field maps, document → record mapping
//! - [`pool`] - SQLite pool creation and configuration
//! - [`memory`] - In-memory backend
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - Typed repositories
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brew_db::{Database, DbConfig, CatalogRepository};
//!
//! let db = Database::new(DbConfig::new("path/to/brew.db")).await?;
//! let store: Arc<dyn DocumentStore> = Arc::new(db);
//! let bases = CatalogRepository::<Base>::new(store).list().await?;
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

pub use document::{Document, Fields};
pub use error::{DbError, DbResult};
pub use memory::MemoryStore;
pub use pool::{Database, DbConfig};
pub use store::DocumentStore;

pub use repository::beverage::BeverageRepository;
pub use repository::catalog::CatalogRepository;
pub use repository::document::DocumentRepository;
