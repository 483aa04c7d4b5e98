//! Runtrail - UserAssist execution-history parser.
//!
//! Runtrail reads a Windows `NTUSER.DAT` registry hive, decodes the
//! UserAssist entries Explorer keeps for every launched program, and
//! turns them into a readable execution-history report.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`filetime`] - Windows FILETIME to UTC conversion
//! - [`hive`] - Minimal registry hive (regf) reader
//! - [`knownfolders`] - Known-folder GUID and placeholder resolution
//! - [`output`] - Report envelope and JSON/YAML/text formatters
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`userassist`] - UserAssist entry collection and record decoding
//!
//! # Example
//!
//! ```
//! use runtrail::knownfolders::{resolve, OsGeneration};
//!
//! // Resolve a known-folder GUID to a concrete path
//! let program = resolve(
//!     r"{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}\notepad.exe",
//!     OsGeneration::Win7,
//! );
//! assert_eq!(program, r"C:\Users\[user]\Desktop\notepad.exe");
//! ```
//!
//! For hive-based end-to-end parsing, see the integration tests.

pub mod cli;
pub mod error;
pub mod filetime;
pub mod hive;
pub mod knownfolders;
pub mod output;
pub mod ui;
pub mod userassist;

pub use error::{Result, RuntrailError};
