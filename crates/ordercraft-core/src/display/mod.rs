//! Display formatting for the wizard.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and derived values are formatted through small wrapper types. Everything
//! renders as markdown so the CLI can hand it to the terminal renderer and
//! the MCP server can return it verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Order, Catalog)│───▶│ (Money, Stage-  │───▶│    Output       │
//! │                 │    │  Progress, ...) │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: product, add-on and plan-choice listings
//! - [`datetime`]: contract date formatting
//! - [`models`]: Display implementations for domain models
//! - [`money`]: currency formatting
//! - [`status`]: navigation tracker, field errors and status messages
//!
//! ## Usage
//!
//! ```rust
//! use ordercraft_core::{
//!     display::{FieldErrors, Money},
//!     error::ValidationErrors,
//! };
//!
//! assert_eq!(Money(25.0).to_string(), "$25");
//!
//! let mut errors = ValidationErrors::new();
//! errors.push("customerName", "Customer account is required");
//! let output = FieldErrors(&errors).to_string();
//! assert!(output.contains("**customerName**"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod money;
pub mod status;

pub use collections::{AddOns, PlanChoices, Products};
pub use datetime::ContractDate;
pub use money::Money;
pub use status::{FieldErrors, OperationStatus, StageProgress};
