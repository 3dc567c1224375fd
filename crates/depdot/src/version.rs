//! Module identifiers and version selection.
//!
//! A node label of form `path@version` groups with every other label
//! sharing the same base path. Within a group the greatest version is the
//! one the resolver actually selected for the build; the rest are only in
//! the graph because something still requires them.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use semver::Version;

use crate::graph::DepGraph;

/// Whether a versioned node holds the selected (maximum) version of its
/// base identifier or has been superseded by a greater one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionClass {
    /// The maximum version of its base identifier in the graph.
    Selected,
    /// A non-maximum version still required by some parent.
    Superseded,
}

/// Split a node label into its base identifier and optional version
/// suffix, at the first `@`.
#[must_use]
pub fn split_label(label: &str) -> (&str, Option<&str>) {
    match label.split_once('@') {
        Some((base, version)) => (base, Some(version)),
        None => (label, None),
    }
}

fn parse_semver(version: &str) -> Option<Version> {
    Version::parse(version.strip_prefix('v').unwrap_or(version)).ok()
}

/// Compare two version strings.
///
/// Both parse as semantic versions (a leading `v` is tolerated) →
/// numeric-aware semver ordering. Otherwise the comparison falls back to
/// plain lexicographic ordering of the raw strings.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    match (parse_semver(a), parse_semver(b)) {
        (Some(va), Some(vb)) => va.cmp(&vb),
        _ => a.cmp(b),
    }
}

/// Classify every distinct versioned endpoint label of `graph`, in
/// first-seen order.
///
/// Labels comparing equal to their group's maximum are all `Selected`;
/// a singleton group is trivially `Selected`. Unversioned labels do not
/// appear in the result.
#[must_use]
pub fn classify(graph: &DepGraph) -> Vec<(String, VersionClass)> {
    let mut max_version: HashMap<&str, &str> = HashMap::new();
    for label in graph.nodes() {
        let (base, Some(version)) = split_label(label) else {
            continue;
        };
        match max_version.entry(base) {
            Entry::Vacant(slot) => {
                slot.insert(version);
            }
            Entry::Occupied(mut slot) => {
                if compare(version, slot.get()) == Ordering::Greater {
                    slot.insert(version);
                }
            }
        }
    }

    graph
        .nodes()
        .iter()
        .filter_map(|label| {
            let (base, Some(version)) = split_label(label) else {
                return None;
            };
            let max = max_version.get(base)?;
            let class = if compare(version, max) == Ordering::Equal {
                VersionClass::Selected
            } else {
                VersionClass::Superseded
            };
            Some((label.clone(), class))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> DepGraph {
        DepGraph::from_reader(Cursor::new(input)).expect("input should parse")
    }

    fn class_of<'a>(classes: &'a [(String, VersionClass)], label: &str) -> VersionClass {
        classes
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or_else(|| panic!("no classification for {label}"))
    }

    #[test]
    fn split_label_handles_both_forms() {
        assert_eq!(split_label("test.com/A@v1.0.0"), ("test.com/A", Some("v1.0.0")));
        assert_eq!(split_label("test.com/A"), ("test.com/A", None));
    }

    #[test]
    fn semver_comparison_is_numeric_aware() {
        // Lexicographic ordering would get this one backwards.
        assert_eq!(compare("v1.10.0", "v1.2.3"), Ordering::Greater);
        assert_eq!(compare("v1.0.0", "v1.0.0"), Ordering::Equal);
        assert_eq!(compare("1.0.0-alpha", "1.0.0"), Ordering::Less);
    }

    #[test]
    fn malformed_versions_fall_back_to_lexicographic() {
        assert_eq!(compare("v1", "v2"), Ordering::Less);
        assert_eq!(compare("oddball", "v1.0.0"), Ordering::Less);
    }

    #[test]
    fn conflict_free_chain_is_all_selected() {
        let classes = classify(&parse("A@v1 B@v2\nB@v2 C@v3\n"));

        assert_eq!(classes.len(), 3);
        assert!(classes.iter().all(|(_, c)| *c == VersionClass::Selected));
    }

    #[test]
    fn greater_version_supersedes_lesser() {
        let classes = classify(&parse("A@v1 B@v2\nA@v1 B@v1\n"));

        assert_eq!(class_of(&classes, "B@v2"), VersionClass::Selected);
        assert_eq!(class_of(&classes, "B@v1"), VersionClass::Superseded);
    }

    #[test]
    fn both_endpoints_count_toward_a_group() {
        // B@v1.0.0 appears only as a source, B@v1.2.3 only as a
        // destination; they still compete within base B.
        let classes = classify(&parse(
            "test.com/A@v1.0.0 test.com/B@v1.2.3\ntest.com/B@v1.0.0 test.com/C@v4.5.6\n",
        ));

        assert_eq!(class_of(&classes, "test.com/B@v1.2.3"), VersionClass::Selected);
        assert_eq!(class_of(&classes, "test.com/B@v1.0.0"), VersionClass::Superseded);
        assert_eq!(class_of(&classes, "test.com/A@v1.0.0"), VersionClass::Selected);
        assert_eq!(class_of(&classes, "test.com/C@v4.5.6"), VersionClass::Selected);
    }

    #[test]
    fn singleton_group_is_selected() {
        let classes = classify(&parse("root lib@v0.3.1\n"));

        assert_eq!(classes, vec![("lib@v0.3.1".to_string(), VersionClass::Selected)]);
    }

    #[test]
    fn unversioned_labels_are_not_classified() {
        let classes = classify(&parse("root lib@v1.0.0\nroot helper\n"));

        assert!(classes.iter().all(|(l, _)| l != "root" && l != "helper"));
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn identical_version_strings_collapse_to_one_selected_node() {
        // The same label on two lines is a single node, so a "tie" is
        // just a singleton group.
        let classes = classify(&parse("root lib@v1.0.0\nother@v2 lib@v1.0.0\n"));

        assert_eq!(class_of(&classes, "lib@v1.0.0"), VersionClass::Selected);
        assert_eq!(classes.iter().filter(|(l, _)| l == "lib@v1.0.0").count(), 1);
    }

    #[test]
    fn classification_order_is_first_seen() {
        let classes = classify(&parse("A@v1 B@v2\nB@v2 A@v2\n"));

        let labels: Vec<&str> = classes.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["A@v1", "B@v2", "A@v2"]);
    }
}
