//! Batch generation driver
//!
//! Gates each container on its re-emittable marker, runs the transform
//! pipeline and assembles output. Containers are independent: a skipped
//! container surfaces one diagnostic and never emits, the rest of the batch
//! proceeds. A container's slots all emit or none do.

use crate::emit;
use crate::model::ContainerDescriptor;
use crate::pipeline;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Diagnostic rules the generator can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The container's declaration site cannot receive re-emitted items.
    NonReemittableContainer,
}

impl Rule {
    /// Stable diagnostic id.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::NonReemittableContainer => "PL0001",
        }
    }
}

/// One diagnostic, raised at most once per container. Non-fatal for the
/// batch: the offending container is excluded from emission entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: Rule,
    pub container: String,
    pub message: String,
}

impl Diagnostic {
    fn non_reemittable(container: &ContainerDescriptor) -> Self {
        Self {
            rule: Rule::NonReemittableContainer,
            container: container.name.clone(),
            message: format!(
                "container `{}` is not re-emittable; declare it as an inline module to receive generated permissions",
                container.name
            ),
        }
    }
}

/// Finalized output for one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSource {
    pub name: String,
    pub module_path: String,
    /// Individual declaration items, declaration order.
    pub items: Vec<String>,
    /// The same items rendered as a standalone module block.
    pub code: String,
}

/// Transform and assemble one store container.
pub fn generate(container: ContainerDescriptor) -> Result<GeneratedSource, Diagnostic> {
    if !container.re_emittable {
        warn!(container = %container.name, "skipping container without re-emittable marker");
        return Err(Diagnostic::non_reemittable(&container));
    }
    let container = pipeline::run(container);
    debug!(container = %container.name, slots = container.slots.len(), "assembled store container");
    Ok(finish(container))
}

/// Assemble one repo container: flat output, no post-processing stages and
/// no enumeration function. Canonical names stay as composed at discovery
/// (verbatim prefix tokens, segmented lower-cased identity).
pub fn generate_repo(container: ContainerDescriptor) -> Result<GeneratedSource, Diagnostic> {
    if !container.re_emittable {
        warn!(container = %container.name, "skipping container without re-emittable marker");
        return Err(Diagnostic::non_reemittable(&container));
    }
    debug!(container = %container.name, slots = container.slots.len(), "assembled repo container");
    Ok(finish(container))
}

fn finish(container: ContainerDescriptor) -> GeneratedSource {
    let items = emit::assemble_items(&container);
    let code = emit::assemble_module(&container);
    GeneratedSource {
        name: container.name,
        module_path: container.module_path,
        items,
        code,
    }
}

/// Aggregate result of one generation batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    /// Emitted sources, in input order.
    pub sources: Vec<GeneratedSource>,
    /// One entry per skipped container.
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchOutput {
    /// True when every container emitted.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Process a whole batch of store containers.
///
/// Containers share no state and transform in parallel; sources and
/// diagnostics come back in input order. If the host build is cancelled the
/// batch is simply dropped — partially transformed containers are never
/// emitted.
pub fn generate_batch(containers: Vec<ContainerDescriptor>) -> BatchOutput {
    let results: Vec<_> = containers.into_par_iter().map(generate).collect();
    let mut output = BatchOutput::default();
    for result in results {
        match result {
            Ok(source) => output.sources.push(source),
            Err(diagnostic) => output.diagnostics.push(diagnostic),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SlotRecord, StoreFlags, Visibility};

    fn store_container(name: &str) -> ContainerDescriptor {
        ContainerDescriptor::builder(name)
            .flags(StoreFlags {
                parse_prefix: true,
                ..StoreFlags::default()
            })
            .slot(
                SlotRecord::new(
                    "LorescopesRead",
                    Visibility::Public,
                    true,
                    vec!["DataUser".to_string()],
                )
                .unwrap(),
            )
            .build()
    }

    #[test]
    fn test_generate_end_to_end() {
        let source = generate(store_container("perms")).unwrap();
        assert_eq!(
            source.items,
            ["pub static LorescopesRead: &str = \"data.user.lorescopes.read\";"]
        );
    }

    #[test]
    fn test_generate_with_obfuscation() {
        let mut container = store_container("perms");
        container.flags.obfuscate = true;
        let source = generate(container).unwrap();
        assert_eq!(source.items, ["pub static LorescopesRead: &str = \"rGzP7\";"]);
    }

    #[test]
    fn test_non_reemittable_container_is_skipped() {
        let mut container = store_container("perms");
        container.re_emittable = false;
        let diagnostic = generate(container).unwrap_err();
        assert_eq!(diagnostic.rule, Rule::NonReemittableContainer);
        assert_eq!(diagnostic.rule.id(), "PL0001");
        assert_eq!(diagnostic.container, "perms");
    }

    #[test]
    fn test_repo_keeps_prefix_verbatim() {
        let container = ContainerDescriptor::builder("perms")
            .slot(
                SlotRecord::new(
                    "SampleProperty",
                    Visibility::Public,
                    true,
                    vec!["Test".to_string()],
                )
                .unwrap(),
            )
            .build();
        let source = generate_repo(container).unwrap();
        assert_eq!(
            source.items,
            ["pub static SampleProperty: &str = \"Test.sample.property\";"]
        );
    }

    #[test]
    fn test_batch_skips_bad_container_and_keeps_going() {
        let good_first = store_container("first");
        let mut bad = store_container("bad");
        bad.re_emittable = false;
        let good_last = store_container("last");

        let output = generate_batch(vec![good_first, bad, good_last]);
        assert!(!output.is_clean());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].container, "bad");

        let names: Vec<_> = output.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["first", "last"]);
    }

    #[test]
    fn test_batch_output_is_deterministic() {
        let first = generate_batch(vec![store_container("a"), store_container("b")]);
        let second = generate_batch(vec![store_container("a"), store_container("b")]);
        assert_eq!(first.sources, second.sources);
    }
}
