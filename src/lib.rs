//! # Taskpad
//!
//! A single-user task-list manager with interchangeable storage backends.
//!
//! ## Features
//!
//! *   **Dual Storage**: Tasks persist either in a flat JSON file or an
//!     embedded SQLite database, selected at startup. Both backends produce
//!     identical filtering and sorting results.
//! *   **Filtering & Sorting**: List by status (all/active/completed) and
//!     sort by creation time, priority, or due date (tasks without a due
//!     date sort last).
//! *   **Statistics**: Total/active/completed counts in one pass.
//! *   **Data Persistence**: Stores live in the standard XDG data
//!     directory, overridable with the `TASKPAD_DB` environment variable.
//!
//! ## Usage
//!
//! ```bash
//! taskpad add "Buy milk" --priority 2 --due 2025-12-01
//! taskpad list --status active --sort due_date
//! taskpad toggle <id>
//! taskpad remove <id>
//! taskpad stats
//! taskpad --backend sqlite list
//! ```
//!
//! The crate is layered caller → [`service::TaskService`] →
//! [`repository::TaskRepository`] → one backend in [`storage`]; the service
//! never knows which backend is active.

pub mod commands;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod storage;
