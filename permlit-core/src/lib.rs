//! # permlit-core
//!
//! Portable transformation core of the permlit permission-literal
//! generator. It consumes typed declaration records from a discovery front
//! end, derives a canonical hierarchical permission name per slot, applies
//! the configured transform stages, and renders deterministic declaration
//! text for an emission sink.
//!
//! ## Pipeline
//!
//! Stages compose in one fixed total order regardless of which are active:
//!
//! 1. `parse_prefix` — re-segment the fully composed name at case boundaries
//! 2. lower-case — unconditional normalization
//! 3. `obfuscate` — deterministic 5-character digest token
//! 4. `upper_case` — terminal cosmetic step
//!
//! Re-running on unchanged input produces byte-identical output; determinism
//! is a correctness requirement here, not an optimization.
//!
//! ## Example
//!
//! ```
//! use permlit_core::{generate, ContainerDescriptor, SlotRecord, StoreFlags, Visibility};
//!
//! let container = ContainerDescriptor::builder("perms")
//!     .flags(StoreFlags { parse_prefix: true, ..StoreFlags::default() })
//!     .slot(SlotRecord::new(
//!         "LorescopesRead",
//!         Visibility::Public,
//!         true,
//!         vec!["DataUser".to_string()],
//!     )?)
//!     .build();
//!
//! let source = generate(container).expect("container is re-emittable");
//! assert_eq!(
//!     source.items,
//!     ["pub static LorescopesRead: &str = \"data.user.lorescopes.read\";"],
//! );
//! # Ok::<(), permlit_core::CoreError>(())
//! ```
//!
//! This crate never inspects syntax; discovery lives in `permlit-macros`
//! (or any other front end honoring the record contract).

pub mod emit;
pub mod error;
pub mod generate;
pub mod model;
pub mod name;
pub mod obfuscate;
pub mod pipeline;
pub mod segment;

pub use error::CoreError;
pub use generate::{
    generate, generate_batch, generate_repo, BatchOutput, Diagnostic, GeneratedSource, Rule,
};
pub use model::{ContainerBuilder, ContainerDescriptor, SlotRecord, StoreFlags, Visibility};
pub use obfuscate::TOKEN_LEN;
