//! Distribution target composition.
//!
//! Packaging runs against an ordered list of target distributions. The list
//! is composed from named sub-groups (e.g. all Debian-family targets) plus
//! loose single entries that belong to no group (e.g. "macOS").

/// A named, ordered group of distribution targets.
///
/// Groups are combined by [`compose_matrix`], never mutated in place.
///
/// # Examples
///
/// ```
/// use relpack::packager::DistributionGroup;
///
/// let debian = DistributionGroup::new(
///     "debian",
///     vec!["ubuntu20.04".into(), "debian11".into()],
/// );
/// assert_eq!(debian.names().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct DistributionGroup {
    /// Group label, informational only (e.g. "debian", "redhat-full").
    pub name: String,

    /// Ordered distribution names belonging to this group.
    pub distributions: Vec<String>,
}

impl DistributionGroup {
    /// Creates a new group from a label and an ordered list of names.
    pub fn new(name: impl Into<String>, distributions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            distributions,
        }
    }

    /// Returns the ordered names in this group.
    pub fn names(&self) -> &[String] {
        &self.distributions
    }
}

/// Composes the final ordered list of packaging targets.
///
/// Concatenates `groups` in the order given, then appends `extras` in order.
/// Relative order within each group is preserved; nothing is dropped,
/// reordered, or deduplicated. Empty groups and empty extras are valid and
/// may yield an empty result.
pub fn compose_matrix(groups: &[DistributionGroup], extras: &[String]) -> Vec<String> {
    let total: usize = groups.iter().map(|g| g.distributions.len()).sum::<usize>() + extras.len();

    let mut matrix = Vec::with_capacity(total);
    for group in groups {
        matrix.extend(group.distributions.iter().cloned());
    }
    matrix.extend(extras.iter().cloned());
    matrix
}
