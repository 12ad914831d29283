//! # Tenon Architecture
//!
//! Tenon is a **UI-agnostic joinery review library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client. The same core could back a web dashboard,
//! a REST API, or any other UI.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, renders the grid, handles terminal I/O │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selector strings → components)        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Grid Transform
//!
//! The heart of the library is [`grid::flatten_components`]: filter, stable
//! sort, and flatten the component tree into depth-annotated rows for
//! indented tabular display. It is a pure function; the expand/collapse
//! state it consumes ([`grid::Expansion`]) is an immutable value owned by
//! the presentation layer and replaced wholesale on every toggle.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! One carve-out: `commands::purge` prompts on stdin/stdout before a
//! destructive delete unless the caller passes `skip_confirm`. Non-terminal
//! hosts must pass `skip_confirm = true` and run their own confirmation.
//!
//! ## Testing Strategy
//!
//! 1. **Grid + commands** (`grid.rs`, `commands/*.rs`): thorough unit tests
//!    of the transform and business logic. This is where the lion's share
//!    of testing lives.
//! 2. **API** (`api.rs`): dispatch tests—the right command with the right
//!    arguments, not the logic itself.
//! 3. **CLI** (`tests/`): end-to-end binary tests for parsing and output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`grid`]: The filter/sort/flatten transform and expansion state
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Component`, `JoineryUnit`, statuses)
//! - [`selector`]: Component selection by id or name
//! - [`config`]: Configuration management
//! - [`view`]: Persisted grid view state for the CLI host
//! - [`init`]: Project discovery and context construction
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod grid;
pub mod init;
pub mod model;
pub mod selector;
pub mod store;
pub mod view;
