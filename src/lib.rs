//! # Tisk - Terminal Task List
//!
//! A command-line utility for keeping a small list of tasks: add items,
//! mark them done, edit them in place, and filter by completion state.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, toggle, and remove short text tasks
//! - **Filtering**: Persistent `All` / `Active` / `Completed` view filter
//! - **Bulk Operations**: Toggle every task at once, clear completed tasks
//! - **Interactive Editing**: In-place text editing with prompt pre-fill
//! - **Durable Storage**: JSON persistence under the user data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tisk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
