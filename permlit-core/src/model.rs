//! Typed declaration records exchanged with the discovery collaborator
//!
//! The core never inspects syntax. A discovery front end (the `permlit-macros`
//! attribute macros, or any other reader of declarations) produces these
//! records; the pipeline and assembler consume them. Records are fresh per
//! build and carry no identity across builds: re-running on unchanged input
//! produces byte-identical output.

use crate::error::CoreError;
use crate::name;
use serde::{Deserialize, Serialize};

/// Declared access level of a slot, preserved verbatim through emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Rust rendering of the access level. Private renders as nothing.
    pub fn render(&self) -> &'static str {
        match self {
            Visibility::Public => "pub",
            Visibility::Internal => "pub(crate)",
            Visibility::Protected => "pub(super)",
            Visibility::Private => "",
        }
    }
}

/// Configuration bundle for one container. Immutable after discovery.
///
/// Flag order here is unrelated to stage order: active stages always run in
/// the fixed pipeline order (prefix parse, lower-case, obfuscate, upper-case).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFlags {
    /// Replace every canonical name with its 5-character digest token.
    pub obfuscate: bool,
    /// Upper-case the final name (terminal cosmetic stage).
    pub upper_case: bool,
    /// Re-segment the fully composed name, prefix tokens included.
    pub parse_prefix: bool,
    /// Emit an `all_permissions()` function listing every literal in order.
    pub all_permissions: bool,
}

impl StoreFlags {
    const OBFUSCATE: u32 = 0b1;
    const UPPER_CASE: u32 = 0b10;
    const PARSE_PREFIX: u32 = 0b100;
    const ALL_PERMISSIONS: u32 = 0b1000;

    /// Decode a bit-encoded flag value.
    ///
    /// Only for use at the discovery boundary when the host representation
    /// is an integer; inside the core the named record is the only form.
    /// Unknown bits are ignored.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            obfuscate: bits & Self::OBFUSCATE != 0,
            upper_case: bits & Self::UPPER_CASE != 0,
            parse_prefix: bits & Self::PARSE_PREFIX != 0,
            all_permissions: bits & Self::ALL_PERMISSIONS != 0,
        }
    }

    /// Inverse of [`StoreFlags::from_bits`].
    pub fn to_bits(&self) -> u32 {
        let mut bits = 0;
        if self.obfuscate {
            bits |= Self::OBFUSCATE;
        }
        if self.upper_case {
            bits |= Self::UPPER_CASE;
        }
        if self.parse_prefix {
            bits |= Self::PARSE_PREFIX;
        }
        if self.all_permissions {
            bits |= Self::ALL_PERMISSIONS;
        }
        bits
    }
}

/// One declared permission slot.
///
/// `identity`, `visibility` and `is_static` are fixed at discovery and pass
/// through to emission untouched. `canonical_name` starts as the composition
/// of the prefix tokens and the segmented identity, and is rewritten by each
/// active pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    identity: String,
    pub visibility: Visibility,
    pub is_static: bool,
    prefix_tokens: Vec<String>,
    canonical_name: String,
}

impl SlotRecord {
    /// Build a record from a discovered declaration.
    ///
    /// Composes the initial canonical name from the prefix tokens and the
    /// segmented identity. An empty identity is a discovery contract
    /// violation and fails construction.
    pub fn new(
        identity: impl Into<String>,
        visibility: Visibility,
        is_static: bool,
        prefix_tokens: Vec<String>,
    ) -> Result<Self, CoreError> {
        let identity = identity.into();
        if identity.is_empty() {
            return Err(CoreError::EmptyIdentity);
        }
        let canonical_name = name::compose(&prefix_tokens, &identity);
        Ok(Self {
            identity,
            visibility,
            is_static,
            prefix_tokens,
            canonical_name,
        })
    }

    /// The slot's declared name, immutable once discovered.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The current permission-name value. Never empty.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// The raw prefix tokens the declaration carried.
    pub fn prefix_tokens(&self) -> &[String] {
        &self.prefix_tokens
    }

    pub(crate) fn with_canonical_name(mut self, canonical_name: String) -> Self {
        self.canonical_name = canonical_name;
        self
    }
}

/// One output container: its identity, its slots in declaration order, and
/// its configuration.
///
/// Every slot belongs to exactly one container. Slot order is declaration
/// order and is preserved through emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    /// Name of the container (the annotated module).
    pub name: String,
    /// Module path of the container's declaration site, for file-based sinks.
    pub module_path: String,
    /// Slots in declaration order.
    pub slots: Vec<SlotRecord>,
    /// Active configuration.
    pub flags: StoreFlags,
    /// Whether the declaration site can receive re-emitted items. For the
    /// macro front end this means "the annotated module is inline".
    pub re_emittable: bool,
}

impl ContainerDescriptor {
    /// Start building a container with the given name.
    pub fn builder(name: impl Into<String>) -> ContainerBuilder {
        ContainerBuilder {
            name: name.into(),
            module_path: String::new(),
            slots: Vec::new(),
            flags: StoreFlags::default(),
            re_emittable: true,
        }
    }
}

/// Builder for [`ContainerDescriptor`], for discovery front ends.
#[derive(Debug, Clone)]
pub struct ContainerBuilder {
    name: String,
    module_path: String,
    slots: Vec<SlotRecord>,
    flags: StoreFlags,
    re_emittable: bool,
}

impl ContainerBuilder {
    /// Set the declaration site's module path.
    pub fn module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = module_path.into();
        self
    }

    /// Set the configuration flags.
    pub fn flags(mut self, flags: StoreFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mark whether the declaration site accepts re-emitted items.
    pub fn re_emittable(mut self, re_emittable: bool) -> Self {
        self.re_emittable = re_emittable;
        self
    }

    /// Append one slot, keeping declaration order.
    pub fn slot(mut self, slot: SlotRecord) -> Self {
        self.slots.push(slot);
        self
    }

    /// Finish the descriptor.
    pub fn build(self) -> ContainerDescriptor {
        ContainerDescriptor {
            name: self.name,
            module_path: self.module_path,
            slots: self.slots,
            flags: self.flags,
            re_emittable: self.re_emittable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_composes_initial_canonical_name() {
        let slot = SlotRecord::new(
            "LorescopesRead",
            Visibility::Public,
            true,
            vec!["DataUser".to_string()],
        )
        .unwrap();
        assert_eq!(slot.identity(), "LorescopesRead");
        assert_eq!(slot.canonical_name(), "DataUser.lorescopes.read");
    }

    #[test]
    fn test_empty_identity_fails_fast() {
        let result = SlotRecord::new("", Visibility::Public, false, vec![]);
        assert!(matches!(result, Err(CoreError::EmptyIdentity)));
    }

    #[test]
    fn test_canonical_name_never_empty_after_construction() {
        let slot = SlotRecord::new("X", Visibility::Private, false, vec![]).unwrap();
        assert!(!slot.canonical_name().is_empty());
    }

    #[test]
    fn test_flag_bits_round_trip() {
        for bits in 0..16 {
            assert_eq!(StoreFlags::from_bits(bits).to_bits(), bits);
        }
        // Unknown bits are dropped.
        assert_eq!(StoreFlags::from_bits(0b1_0001).to_bits(), 0b1);
    }

    #[test]
    fn test_builder_preserves_slot_order() {
        let container = ContainerDescriptor::builder("perms")
            .slot(SlotRecord::new("First", Visibility::Public, true, vec![]).unwrap())
            .slot(SlotRecord::new("Second", Visibility::Public, true, vec![]).unwrap())
            .build();
        let identities: Vec<_> = container.slots.iter().map(|s| s.identity()).collect();
        assert_eq!(identities, ["First", "Second"]);
        assert!(container.re_emittable);
    }

    #[test]
    fn test_model_serde_round_trip() {
        let container = ContainerDescriptor::builder("perms")
            .module_path("crate::auth")
            .flags(StoreFlags::from_bits(0b101))
            .slot(SlotRecord::new("AccountRead", Visibility::Internal, false, vec![]).unwrap())
            .build();
        let json = serde_json::to_string(&container).unwrap();
        let back: ContainerDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, container);
    }
}
