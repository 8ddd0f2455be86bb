//! Advancing convex hull kept as a circular doubly linked list over point
//! indices.

use super::mesh::INVALID_INDEX;

/// The boundary of the partial triangulation.
///
/// `next`/`prev` link the live hull vertices in a cycle. A vertex that has
/// been swallowed by the triangulation points `next` at itself; a vertex that
/// was never inserted keeps [`INVALID_INDEX`].
#[derive(Debug, Clone)]
pub(crate) struct AdvancingHull {
    prev: Vec<usize>,
    next: Vec<usize>,
    tri: Vec<usize>,
    start: usize,
}

impl AdvancingHull {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            prev: vec![INVALID_INDEX; n],
            next: vec![INVALID_INDEX; n],
            tri: vec![INVALID_INDEX; n],
            start: INVALID_INDEX,
        }
    }

    /// Starts the hull as the seed triangle `i0 -> i1 -> i2`, whose half-edges
    /// are 0, 1 and 2.
    pub(crate) fn init_seed(&mut self, i0: usize, i1: usize, i2: usize) {
        self.start = i0;

        self.next[i0] = i1;
        self.prev[i2] = i1;
        self.next[i1] = i2;
        self.prev[i0] = i2;
        self.next[i2] = i0;
        self.prev[i1] = i0;

        self.tri[i0] = 0;
        self.tri[i1] = 1;
        self.tri[i2] = 2;
    }

    #[inline]
    pub(crate) fn is_live(&self, v: usize) -> bool {
        let n = self.next[v];
        n != v && n != INVALID_INDEX
    }

    #[inline]
    pub(crate) fn next(&self, v: usize) -> usize {
        self.next[v]
    }

    #[inline]
    pub(crate) fn prev(&self, v: usize) -> usize {
        self.prev[v]
    }

    #[inline]
    pub(crate) fn set_next(&mut self, v: usize, n: usize) {
        self.next[v] = n;
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, v: usize, p: usize) {
        self.prev[v] = p;
    }

    /// Marks `v` as no longer on the hull.
    #[inline]
    pub(crate) fn remove(&mut self, v: usize) {
        self.next[v] = v;
    }

    /// Half-edge cached for hull vertex `v`.
    #[inline]
    pub(crate) fn tri(&self, v: usize) -> usize {
        self.tri[v]
    }

    #[inline]
    pub(crate) fn set_tri(&mut self, v: usize, e: usize) {
        self.tri[v] = e;
    }

    #[inline]
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub(crate) fn set_start(&mut self, v: usize) {
        self.start = v;
    }

    /// Replaces the cached half-edge `stale` with `fresh` on the hull vertex
    /// that holds it, walking backwards from the start.
    pub(crate) fn repair_tri(&mut self, stale: usize, fresh: usize) -> bool {
        let mut e = self.start;
        for _ in 0..self.next.len() {
            if self.tri[e] == stale {
                self.tri[e] = fresh;
                return true;
            }
            e = self.prev[e];
            if e == self.start {
                break;
            }
        }
        false
    }

    /// Iterates the live hull vertices from the start, following `next`.
    pub(crate) fn iter(&self) -> HullIter<'_> {
        HullIter {
            hull: self,
            current: self.start,
            remaining: if self.start == INVALID_INDEX {
                0
            } else {
                self.next.len()
            },
        }
    }
}

/// Iterator over the hull cycle, bounded by the point count so a corrupt
/// list cannot loop forever.
pub(crate) struct HullIter<'a> {
    hull: &'a AdvancingHull,
    current: usize,
    remaining: usize,
}

impl Iterator for HullIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let v = self.current;
        self.current = self.hull.next[v];
        self.remaining = if self.current == self.hull.start || self.current == INVALID_INDEX {
            0
        } else {
            self.remaining - 1
        };
        Some(v)
    }
}
