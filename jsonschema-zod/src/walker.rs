//! Discovery of reusable sub-schemas.
//!
//! The walker visits a schema depth-first in pre-order and records every
//! non-root object node that declares `properties`. Nodes are keyed by
//! [`Signature`], so a shape that appears at several paths is extracted once,
//! under the name derived from the first path where it was seen.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::{CollisionPolicy, GeneratorConfig};
use crate::error::{GenerateError, GenerateResult};
use crate::naming::{schema_name, type_name, SchemaPath};
use crate::schema::{SchemaNode, Signature};

/// A sub-schema chosen for extraction into its own declaration.
#[derive(Debug, Clone)]
pub struct SubSchema<'a> {
    /// Generated constant name, e.g. `LeftSchema`.
    pub name: String,
    /// The node as it appears in the input.
    pub node: &'a SchemaNode,
    /// Path where the shape was first observed.
    pub path: SchemaPath,
    /// Depth of the deepest path where the shape occurs.
    pub depth: usize,
    pub signature: Signature,
}

/// Discovery state threaded through a single walk.
#[derive(Debug)]
pub struct Discovery<'a> {
    config: &'a GeneratorConfig,
    entries: IndexMap<Signature, SubSchema<'a>>,
    visited: HashSet<Signature>,
    names: HashSet<String>,
    inlined: Vec<SchemaPath>,
}

impl<'a> Discovery<'a> {
    /// Create an empty discovery context.
    ///
    /// The root declaration name is reserved up front so that no sub-schema
    /// can shadow it.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        let mut names = HashSet::new();
        names.insert(config.root_schema_name());
        Self {
            config,
            entries: IndexMap::new(),
            visited: HashSet::new(),
            names,
            inlined: Vec::new(),
        }
    }

    /// Walk `node` located at `path`, recording sub-schemas.
    pub fn walk(&mut self, node: &'a SchemaNode, path: SchemaPath) -> GenerateResult<()> {
        if path.depth() > self.config.max_depth {
            return Err(GenerateError::depth_limit(
                path.to_string(),
                self.config.max_depth,
            ));
        }

        if node.is_object() && node.properties.is_some() && !path.is_root() {
            let signature = node.signature(self.config.signature);
            // Marked even when registration loses a name collision, so a
            // repeated shape is not retried.
            if self.visited.insert(signature.clone()) {
                self.register(signature, node, &path);
            } else if let Some(entry) = self.entries.get_mut(&signature) {
                entry.depth = entry.depth.max(path.depth());
            }
        }

        if let Some(properties) = &node.properties {
            for (name, child) in properties {
                self.walk(child, path.property(name))?;
            }
        }

        if node.is_array() {
            if let Some(items) = &node.items {
                self.walk(items, path.items())?;
            }
        }

        Ok(())
    }

    fn register(&mut self, signature: Signature, node: &'a SchemaNode, path: &SchemaPath) {
        let suffix = &self.config.schema_suffix;
        let candidate = schema_name(path, suffix);

        let name = if !self.names.contains(&candidate) {
            candidate
        } else {
            match self.config.collisions {
                CollisionPolicy::Inline => {
                    warn!(
                        name = %candidate,
                        path = %path,
                        "schema name already taken by a different shape, expanding inline"
                    );
                    self.inlined.push(path.clone());
                    return;
                }
                CollisionPolicy::Disambiguate => {
                    let base = type_name(&candidate, suffix);
                    (2..)
                        .map(|n| format!("{base}{n}{suffix}"))
                        .find(|name| !self.names.contains(name))
                        .unwrap_or(candidate)
                }
            }
        };

        debug!(name = %name, path = %path, "discovered sub-schema");
        self.names.insert(name.clone());
        self.entries.insert(
            signature.clone(),
            SubSchema {
                name,
                node,
                path: path.clone(),
                depth: path.depth(),
                signature,
            },
        );
    }

    /// Number of sub-schemas discovered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths of shapes left inline because their name was taken.
    pub fn inlined(&self) -> &[SchemaPath] {
        &self.inlined
    }

    /// Consume the context, returning entries in discovery order.
    pub fn into_entries(self) -> Vec<SubSchema<'a>> {
        self.entries.into_values().collect()
    }
}

/// Discover every extractable sub-schema below `root`.
pub fn discover<'a>(
    root: &'a SchemaNode,
    config: &'a GeneratorConfig,
) -> GenerateResult<Vec<SubSchema<'a>>> {
    let mut discovery = Discovery::new(config);
    discovery.walk(root, SchemaPath::root())?;
    Ok(discovery.into_entries())
}
