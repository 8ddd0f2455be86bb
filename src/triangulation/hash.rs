//! Angular bucket index over the advancing hull.

use super::hull::AdvancingHull;
use super::mesh::INVALID_INDEX;
use crate::primitives::Point2;
use crate::tolerance::pseudo_angle;

/// Maps the direction of a point, seen from a fixed center, to a hull vertex
/// recently recorded in that direction.
///
/// The table is only a hint. Entries go stale as vertices leave the hull, and
/// lookups skip them by checking liveness against the hull.
#[derive(Debug, Clone)]
pub(crate) struct AngularHash {
    buckets: Vec<usize>,
    center: Point2<f64>,
}

impl AngularHash {
    /// Creates a table of `ceil(sqrt(n))` buckets around `center`.
    pub(crate) fn new(n: usize, center: Point2<f64>) -> Self {
        let size = ((n as f64).sqrt().ceil() as usize).max(1);
        Self {
            buckets: vec![INVALID_INDEX; size],
            center,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket for the direction from the center to `p`.
    ///
    /// A point exactly at the center has no direction and lands in bucket 0.
    pub(crate) fn key(&self, p: Point2<f64>) -> usize {
        let angle = pseudo_angle(p.x - self.center.x, p.y - self.center.y);
        let size = self.buckets.len();
        // `as` saturates and maps NaN to 0
        let bucket = (angle * size as f64).floor() as usize;
        if bucket >= size {
            bucket % size
        } else {
            bucket
        }
    }

    /// Records `v` as the vertex for bucket `key`.
    #[inline]
    pub(crate) fn set(&mut self, key: usize, v: usize) {
        self.buckets[key] = v;
    }

    /// Records `v`, located at `p`, under its own bucket.
    #[inline]
    pub(crate) fn insert(&mut self, p: Point2<f64>, v: usize) {
        let key = self.key(p);
        self.buckets[key] = v;
    }

    /// Probes from `key` onwards, wrapping, for a vertex still on the hull.
    pub(crate) fn find_live(&self, key: usize, hull: &AdvancingHull) -> Option<usize> {
        let size = self.buckets.len();
        (0..size)
            .map(|j| self.buckets[(key + j) % size])
            .find(|&v| v != INVALID_INDEX && hull.is_live(v))
    }
}
