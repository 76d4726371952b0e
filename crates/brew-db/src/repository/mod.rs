//! # Repository Module
//!
//! Repository pattern implementations for store access.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layers                                    │
//! │                                                                         │
//! │  BeverageState                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogRepository<T> / BeverageRepository   ← typed records           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dyn DocumentStore                           ← key + JSON fields       │
//! │       │                                                                 │
//! │       ├──► Database ──► DocumentRepository ──► SQLite                  │
//! │       └──► MemoryStore                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CatalogRepository`] - Bases, syrups, creamers (read-only)
//! - [`BeverageRepository`] - Saved beverages (create + list)
//! - [`DocumentRepository`] - Raw SQL over the `documents` table

pub mod beverage;
pub mod catalog;
pub mod document;

pub use beverage::BeverageRepository;
pub use catalog::CatalogRepository;
pub use document::DocumentRepository;
