use fxhash::FxHashMap as HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::LabelError;

///
/// What to do when a label that is already present gets assigned again.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePolicy {
    /// Remap the existing label to the new index. The label keeps its original position.
    #[default]
    LastWriterWins,
    /// Refuse the assignment with [LabelError::Duplicate].
    Strict,
}

///
/// Insertion-ordered map from a string label to an integer index.
///
/// Labels are kept in the order they were first seen, so `label_at(i)` walks them in that
/// order. Each label carries an index (normally its matrix row or column). Re-assigning an
/// existing label only updates its index; it never adds a second slot.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelMap {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        LabelMap {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    ///
    /// Index currently mapped to `label`.
    ///
    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    ///
    /// Label at insertion position `position`.
    ///
    pub fn label_at(&self, position: usize) -> Option<&str> {
        self.labels.get(position).map(String::as_str)
    }

    ///
    /// Map `label` to `index`.
    ///
    /// A new label is appended. For a label that is already present the behaviour depends on
    /// the policy: under [DuplicatePolicy::LastWriterWins] the index is overwritten and the
    /// previous one is returned, under [DuplicatePolicy::Strict] the map is left as is and an
    /// error is returned.
    ///
    pub fn assign(&mut self, label: &str, index: usize) -> Result<Option<usize>, LabelError> {
        match self.index.get_mut(label) {
            Some(existing) => match self.policy {
                DuplicatePolicy::LastWriterWins => {
                    let previous = *existing;
                    *existing = index;
                    Ok(Some(previous))
                }
                DuplicatePolicy::Strict => Err(LabelError::Duplicate {
                    label: label.to_string(),
                    existing: *existing,
                }),
            },
            None => {
                self.labels.push(label.to_string());
                self.index.insert(label.to_string(), index);
                Ok(None)
            }
        }
    }

    ///
    /// Append `label` mapped to the next dense index (the current size).
    ///
    pub fn push(&mut self, label: &str) -> Result<usize, LabelError> {
        let index = self.len();
        self.assign(label, index)?;
        Ok(index)
    }

    ///
    /// Iterate `(label, index)` pairs in insertion order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .map(|label| (label.as_str(), self.index[label.as_str()]))
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
    }
}

impl<S: AsRef<str>> FromIterator<S> for LabelMap {
    ///
    /// Build a map with dense, sequential indices. Repeated labels are remapped (last wins).
    ///
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut map = LabelMap::new();
        for (i, label) in iter.into_iter().enumerate() {
            // last-writer-wins never errors
            let _ = map.assign(label.as_ref(), i);
        }
        map
    }
}
