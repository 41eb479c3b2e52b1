//! Declaration emission
//!
//! Renders a finalized container into declaration text. Ordering is exactly
//! declaration order — never sorted, never deduplicated. Two slots with the
//! same canonical name (obfuscation collision, explicit duplication) emit as
//! two separate declarations; downstream uniqueness is not this layer's
//! concern.

use crate::model::{ContainerDescriptor, SlotRecord};

/// Header carried by every standalone generated block.
pub const GENERATED_HEADER: &str = "// @generated by permlit";

/// Render one declaration per slot, plus the bulk-enumeration function when
/// the container asks for it.
pub fn assemble_items(container: &ContainerDescriptor) -> Vec<String> {
    let mut items: Vec<String> = container.slots.iter().map(render_slot).collect();
    if container.flags.all_permissions {
        items.push(render_all_permissions(container));
    }
    items
}

/// Render the whole container as a standalone module block, for file-based
/// sinks such as build scripts. The macro front end consumes
/// [`assemble_items`] instead and wraps the items itself.
pub fn assemble_module(container: &ContainerDescriptor) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("#[allow(non_upper_case_globals)]\n");
    out.push_str(&format!("pub mod {} {{\n", container.name));
    for item in assemble_items(container) {
        out.push_str("    ");
        out.push_str(&item);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn render_slot(slot: &SlotRecord) -> String {
    let kind = if slot.is_static { "static" } else { "const" };
    let vis = slot.visibility.render();
    if vis.is_empty() {
        format!(
            "{} {}: &str = \"{}\";",
            kind,
            slot.identity(),
            slot.canonical_name()
        )
    } else {
        format!(
            "{} {} {}: &str = \"{}\";",
            vis,
            kind,
            slot.identity(),
            slot.canonical_name()
        )
    }
}

fn render_all_permissions(container: &ContainerDescriptor) -> String {
    let values: Vec<String> = container
        .slots
        .iter()
        .map(|slot| format!("\"{}\"", slot.canonical_name()))
        .collect();
    format!(
        "pub fn all_permissions() -> &'static [&'static str] {{ &[{}] }}",
        values.join(", ")
    )
}
