/// Ordered color collection with change reporting.
use tracing::debug;

use crate::color::Swatch;
use crate::error::{GridError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Inserted,
    Removed,
}

/// Positions touched by a single mutation, for a host to animate.
///
/// Removed positions are always descending: applying them one at a time to
/// a parallel structure never shifts a position that is still pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeSet {
    kind: ChangeKind,
    positions: Vec<usize>,
}

impl ChangeSet {
    fn inserted(positions: Vec<usize>) -> Self {
        Self {
            kind: ChangeKind::Inserted,
            positions,
        }
    }

    fn removed(positions: Vec<usize>) -> Self {
        Self {
            kind: ChangeKind::Removed,
            positions,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Ascending for insertions, descending for removals.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Replays a removal on a structure kept parallel to the list.
    /// Insertions carry no values and are ignored.
    ///
    /// Fails without touching `mirror` if any position is past its end.
    pub fn apply_removals<T>(&self, mirror: &mut Vec<T>) -> Result<()> {
        if self.kind != ChangeKind::Removed {
            return Ok(());
        }
        if let Some(&index) = self.positions.iter().find(|&&p| p >= mirror.len()) {
            return Err(GridError::OutOfRange {
                index,
                len: mirror.len(),
            });
        }
        for &position in &self.positions {
            mirror.remove(position);
        }
        Ok(())
    }
}

/// Ordered, mutable sequence of colors. Duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorList<C = Swatch> {
    colors: Vec<C>,
}

impl<C> Default for ColorList<C> {
    fn default() -> Self {
        Self { colors: Vec::new() }
    }
}

impl<C> From<Vec<C>> for ColorList<C> {
    fn from(colors: Vec<C>) -> Self {
        Self { colors }
    }
}

impl<C: PartialEq> ColorList<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.colors.len()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&C> {
        self.colors.get(index).ok_or(GridError::OutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.colors.iter()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.colors
    }

    /// Appends `values` in order. The returned positions form the contiguous
    /// range starting at the previous length.
    pub fn append_all<I>(&mut self, values: I) -> ChangeSet
    where
        I: IntoIterator<Item = C>,
    {
        let start = self.colors.len();
        self.colors.extend(values);
        let end = self.colors.len();
        if end > start {
            debug!(start, added = end - start, "appended colors");
        }
        ChangeSet::inserted((start..end).collect())
    }

    /// Removes every element equal to `target`.
    pub fn remove_all_matching(&mut self, target: &C) -> ChangeSet {
        let positions: Vec<usize> = self
            .colors
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, color)| *color == target)
            .map(|(index, _)| index)
            .collect();
        if positions.is_empty() {
            return ChangeSet::removed(positions);
        }
        self.colors.retain(|color| color != target);
        debug!(removed = positions.len(), remaining = self.colors.len(), "removed matching colors");
        ChangeSet::removed(positions)
    }

    /// Removes every element equal to the one at `index`.
    pub fn remove_matching_at(&mut self, index: usize) -> Result<ChangeSet>
    where
        C: Clone,
    {
        let target = self.get(index)?.clone();
        Ok(self.remove_all_matching(&target))
    }

    /// Removes only the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<ChangeSet> {
        self.get(index)?;
        self.colors.remove(index);
        debug!(index, remaining = self.colors.len(), "removed color");
        Ok(ChangeSet::removed(vec![index]))
    }
}

impl<'a, C> IntoIterator for &'a ColorList<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
