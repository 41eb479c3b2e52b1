//! # permlit: compile-time permission-name literals
//!
//! Declare permission slots as string items in an annotated module and get
//! canonical, hierarchical permission names bound to them as compile-time
//! literals — no hand-written permission strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use permlit::permissions_store;
//!
//! #[permissions_store(parse_prefix, all_permissions)]
//! pub mod permissions {
//!     #[prefix("DataUser")]
//!     pub static LorescopesRead: &str = "";
//!
//!     pub static AccountRead: &str = "";
//! }
//!
//! assert_eq!(permissions::LorescopesRead, "data.user.lorescopes.read");
//! assert_eq!(permissions::AccountRead, "account.read");
//! assert_eq!(
//!     permissions::all_permissions(),
//!     &["data.user.lorescopes.read", "account.read"],
//! );
//! ```
//!
//! ## Two container flavors
//!
//! - [`macro@permissions_repo`]: flat output, no options.
//! - [`macro@permissions_store`]: configurable — `parse_prefix` re-segments
//!   the composed name, `obfuscate` replaces it with a deterministic
//!   5-character digest token, `upper_case` upper-cases the result, and
//!   `all_permissions` adds a function enumerating every literal in
//!   declaration order.
//!
//! Identical input always generates identical output; every build recomputes
//! from source. Obfuscated tokens are short by design and not collision
//! resistant — see `permlit_core::obfuscate`.
//!
//! The name derivation itself lives in [`permlit_core`] behind a typed
//! record boundary, so alternative front ends (a build script, for example)
//! can drive the same pipeline through [`generate_batch`].

pub use permlit_macros::{permissions_repo, permissions_store};

pub use permlit_core::{
    generate, generate_batch, generate_repo, BatchOutput, ContainerBuilder, ContainerDescriptor,
    CoreError, Diagnostic, GeneratedSource, Rule, SlotRecord, StoreFlags, Visibility,
};
