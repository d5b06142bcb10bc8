//! Structural paths and schema name generation.
//!
//! A [`SchemaPath`] records where a node sits below the root. The name of
//! an extracted sub-schema comes from the last property segment of its
//! path, PascalCased and suffixed: `zones.left_panel` becomes
//! `LeftPanelSchema`.

use std::fmt;

use convert_case::{Case, Casing};

/// Base name used when a path has no property segment.
pub const DEFAULT_BASE_NAME: &str = "Item";

/// One step from a node to its child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named property of an object.
    Property(String),
    /// The element schema of an array.
    Items,
}

/// Location of a node relative to the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SchemaPath {
    segments: Vec<PathSegment>,
}

impl SchemaPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended by a property name.
    pub fn property(&self, name: &str) -> Self {
        self.child(PathSegment::Property(name.to_string()))
    }

    /// Path extended by an array element marker.
    pub fn items(&self) -> Self {
        self.child(PathSegment::Items)
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The last property name, skipping array markers.
    pub fn last_property(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|segment| match segment {
            PathSegment::Property(name) => Some(name.as_str()),
            PathSegment::Items => None,
        })
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                PathSegment::Property(name) => f.write_str(name)?,
                PathSegment::Items => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}

/// Generate the schema constant name for a path.
///
/// # Example
///
/// ```rust
/// use jsonschema_zod::naming::{schema_name, SchemaPath};
///
/// let path = SchemaPath::root().property("zones").property("left_panel");
/// assert_eq!(schema_name(&path, "Schema"), "LeftPanelSchema");
/// ```
pub fn schema_name(path: &SchemaPath, suffix: &str) -> String {
    let base = path
        .last_property()
        .map(to_identifier)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string());
    format!("{base}{suffix}")
}

/// Strip the schema suffix from a schema name to get the type alias name.
///
/// A name that is exactly the suffix, or does not end with it, is returned
/// unchanged.
pub fn type_name(schema_name: &str, suffix: &str) -> String {
    match schema_name.strip_suffix(suffix) {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => schema_name.to_string(),
    }
}

/// PascalCase a property name and drop characters TypeScript rejects.
fn to_identifier(name: &str) -> String {
    let words: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let pascal: String = words
        .to_case(Case::Pascal)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    match pascal.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{pascal}"),
        _ => pascal,
    }
}
