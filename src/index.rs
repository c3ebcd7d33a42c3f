//! One-dimensional nearest-neighbour lookup over scalar keys, backed by an
//! [`RTree`](rstar::RTree).

use log::debug;
use rstar::primitives::GeomWithData;
use rstar::RTree;

use crate::error::SampleError;

/// Keys are stored as `[key, 0.0]`, since the tree needs at least two
/// dimensions. The pinned axis adds nothing to the squared distance.
fn pinned(key: f64) -> [f64; 2] {
    [key, 0.0]
}

/// Nearest-neighbour index over a sequence of keys, answering with the
/// position of the matched key in the original sequence.
///
/// ```rust
/// use gcproject::AxisIndex;
///
/// let index = AxisIndex::new([0.0, 1.5, 3.0]).unwrap();
/// assert_eq!(index.nearest(1.2), Some(1));
/// ```
pub struct AxisIndex {
    tree: RTree<GeomWithData<[f64; 2], usize>>,
}

impl AxisIndex {
    pub fn new(keys: impl IntoIterator<Item = f64>) -> Result<Self, SampleError> {
        let entries = keys
            .into_iter()
            .enumerate()
            .map(|(position, key)| match key.is_nan() {
                true => Err(SampleError::InvalidCoordinate(format!(
                    "key at position {position} is NaN"
                ))),
                false => Ok(GeomWithData::new(pinned(key), position)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            return Err(SampleError::EmptyIndex);
        }

        debug!("Bulk loading axis index over {} keys", entries.len());
        Ok(AxisIndex {
            tree: RTree::bulk_load(entries),
        })
    }

    /// Position of the key with the smallest absolute difference to `query`.
    pub fn nearest(&self, query: f64) -> Option<usize> {
        self.tree
            .nearest_neighbor(&pinned(query))
            .map(|entry| entry.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
