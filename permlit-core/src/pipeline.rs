//! Name transform pipeline
//!
//! Each stage is a pure function over [`SlotRecord`]. Active stages compose
//! in one fixed total order — prefix re-segmentation, mandatory
//! lower-casing, obfuscation, upper-casing — because later stages assume the
//! shape earlier ones produce: the digest must run on the prefix-resolved,
//! lower-cased name, and upper-casing is the terminal cosmetic step.
//!
//! The pipeline runs at most once per fresh record set. A second pass over
//! the same container would re-segment or re-hash already transformed names
//! and corrupt them.

use crate::model::{ContainerDescriptor, SlotRecord, StoreFlags};
use crate::obfuscate::obfuscate;
use crate::segment::segment;
use rayon::prelude::*;

/// Re-segment the fully composed name, splitting on case boundaries that
/// survived prefix composition.
pub fn parse_prefix_stage(slot: SlotRecord) -> SlotRecord {
    let name = segment(slot.canonical_name());
    slot.with_canonical_name(name)
}

/// Lower-case the whole name. Runs unconditionally ahead of any later
/// stage: permission names are lowercase keys, and the digest input must be
/// the normalized form.
pub fn lower_case_stage(slot: SlotRecord) -> SlotRecord {
    let name = slot.canonical_name().to_lowercase();
    slot.with_canonical_name(name)
}

/// Replace the name with its obfuscated token.
pub fn obfuscate_stage(slot: SlotRecord) -> SlotRecord {
    let name = obfuscate(slot.canonical_name());
    slot.with_canonical_name(name)
}

/// Upper-case the name. Touches letter casing only; segment separators are
/// unaffected. Idempotent.
pub fn upper_case_stage(slot: SlotRecord) -> SlotRecord {
    let name = slot.canonical_name().to_uppercase();
    slot.with_canonical_name(name)
}

/// Apply the active stages to one slot, in the fixed order.
pub fn apply(flags: StoreFlags, slot: SlotRecord) -> SlotRecord {
    let slot = if flags.parse_prefix {
        parse_prefix_stage(slot)
    } else {
        slot
    };
    let slot = lower_case_stage(slot);
    let slot = if flags.obfuscate {
        obfuscate_stage(slot)
    } else {
        slot
    };
    if flags.upper_case {
        upper_case_stage(slot)
    } else {
        slot
    }
}

/// Run the pipeline over every slot of a container.
///
/// Slots transform independently and in parallel; results collect back in
/// the original declaration order, which emission relies on.
pub fn run(mut container: ContainerDescriptor) -> ContainerDescriptor {
    let flags = container.flags;
    let slots = std::mem::take(&mut container.slots);
    container.slots = slots
        .into_par_iter()
        .map(|slot| apply(flags, slot))
        .collect();
    container
}
