//! Sort Policy
//!
//! Comparison rules behind every [`SortMode`]. The policy is stateless
//! apart from the optional translator used by label sorting, and it only
//! ever orders one node's direct children; recursion is the tree's job.

use std::cmp::Ordering;

use crate::domain::entities::NavigationNode;
use crate::domain::ports::{translate_label, Translator};
use crate::domain::value_objects::{Priority, SortMode};
use crate::error::{NavError, NavResult};

/// Orders sibling nodes according to a sort mode
#[derive(Clone, Copy, Default)]
pub struct SortPolicy<'t> {
    translator: Option<&'t dyn Translator>,
}

impl<'t> SortPolicy<'t> {
    pub fn new(translator: Option<&'t dyn Translator>) -> Self {
        Self { translator }
    }

    /// Compare two priorities under a priority-based mode.
    ///
    /// Fails with `UnsupportedSortMode` for `None` and `Label`, which
    /// have no priority rule.
    pub fn compare_priority(a: &Priority, b: &Priority, mode: SortMode) -> NavResult<Ordering> {
        match mode {
            SortMode::Priority => Ok(a.native_cmp(b)),
            SortMode::PriorityNumeric => Ok(a.numeric_cmp(b)),
            SortMode::PriorityLexical => Ok(a.lexical_cmp(b)),
            SortMode::None | SortMode::Label => Err(NavError::UnsupportedSortMode { mode }),
        }
    }

    /// Compare lower-cased labels, translated first when a translator is set.
    pub fn compare_labels(&self, a: &str, b: &str) -> Ordering {
        self.label_key(a).cmp(&self.label_key(b))
    }

    /// Compare two nodes under `mode`.
    ///
    /// `None` imposes no order and so has no comparison rule.
    pub fn compare(
        &self,
        mode: SortMode,
        a: &NavigationNode,
        b: &NavigationNode,
    ) -> NavResult<Ordering> {
        match mode {
            SortMode::Label => Ok(self.compare_labels(a.label(), b.label())),
            _ => Self::compare_priority(a.priority(), b.priority(), mode),
        }
    }

    /// Stable in-place sort of `items`, each resolved to its node by `node_of`.
    pub fn sort<'n, T, F>(&self, mode: SortMode, items: &mut [T], node_of: F) -> NavResult<()>
    where
        F: Fn(&T) -> &'n NavigationNode,
    {
        match mode {
            SortMode::None => Ok(()),
            SortMode::Label => {
                items.sort_by_cached_key(|item| self.label_key(node_of(item).label()));
                Ok(())
            }
            SortMode::Priority | SortMode::PriorityNumeric | SortMode::PriorityLexical => {
                let mut failure: Option<NavError> = None;
                items.sort_by(|a, b| {
                    Self::compare_priority(node_of(a).priority(), node_of(b).priority(), mode)
                        .unwrap_or_else(|err| {
                            failure.get_or_insert(err);
                            Ordering::Equal
                        })
                });
                failure.map_or(Ok(()), Err)
            }
        }
    }

    fn label_key(&self, label: &str) -> String {
        translate_label(self.translator, label).to_lowercase()
    }
}
