use std::collections::BTreeSet;
use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::Arc;

/// The opaque identifier of a component (gate) of a circuit, e.g. `X1` or `A2`.
///
/// Identifiers are compared and ordered by their textual value, which makes every
/// [`ComponentSet`] iterate in a stable order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(Arc<str>);

impl ComponentId {
    pub fn new(name: impl AsRef<str>) -> Self {
        ComponentId(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        ComponentId::new(value)
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        ComponentId(Arc::from(value))
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of components; conflict sets, hitting sets and search paths are all component sets.
pub type ComponentSet = BTreeSet<ComponentId>;

/// Creates a [`ComponentSet`] from anything that can be turned into [`ComponentId`]s.
///
/// ```rust
/// # use diagnose_core::component_set;
/// let set = component_set(["B", "A", "B"]);
/// assert_eq!(set.len(), 2);
/// ```
pub fn component_set<Id: Into<ComponentId>>(ids: impl IntoIterator<Item = Id>) -> ComponentSet {
    ids.into_iter().map(Into::into).collect()
}

/// Whether the two sets share at least one component.
pub fn intersects(lhs: &ComponentSet, rhs: &ComponentSet) -> bool {
    let (smaller, larger) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    smaller.iter().any(|component| larger.contains(component))
}

/// Wrapper which displays a [`ComponentSet`] as `{A, B, C}`.
#[derive(Clone, Copy, Debug)]
pub struct DisplaySet<'a>(pub &'a ComponentSet);

impl Display for DisplaySet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, component) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, "}}")
    }
}
