//! # Field Paths
//!
//! Locates a value inside a JSON tree during recursive descent. Paths are
//! immutable: each recursive call extends its parent's path by value, so
//! no state is shared across branches of the traversal.

use std::fmt;

/// One step into a JSON tree: a named field or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Descent into an object field by name.
    Field(String),
    /// Descent into an array element by index.
    Index(usize),
}

impl PathSegment {
    /// Convenience constructor for a field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }
}

/// An ordered sequence of segments from the document root to the value
/// currently being validated.
///
/// Renders in the dotted/bracketed convention used by error messages:
/// `address.street`, `friends[0].name`. The root path renders as
/// `(root)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path, pointing at the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true if the path points at the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new path extended by one segment. The receiver is unchanged.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// The path's segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_root() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
    }

    #[test]
    fn fields_join_with_dots() {
        let path = FieldPath::root()
            .child(PathSegment::field("address"))
            .child(PathSegment::field("street"));
        assert_eq!(path.to_string(), "address.street");
    }

    #[test]
    fn indices_render_bracketed() {
        let path = FieldPath::root()
            .child(PathSegment::field("friends"))
            .child(PathSegment::Index(0))
            .child(PathSegment::field("name"));
        assert_eq!(path.to_string(), "friends[0].name");
    }

    #[test]
    fn child_does_not_mutate_parent() {
        let parent = FieldPath::root().child(PathSegment::field("a"));
        let _child = parent.child(PathSegment::field("b"));
        assert_eq!(parent.segments().len(), 1);
    }
}
