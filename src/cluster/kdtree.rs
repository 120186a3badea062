//! This code is heavily based on <https://godoc.org/code.google.com/p/eaburns/kdtree>
//!
//! Original code is under New BSD License.
//! Author: Ethan Burns <burns.ethan@gmail.com>

use super::distance::{DEGREE_RAD, fast_cos};
use super::point::GeoPoint;

/// K-D tree over a borrowed candidate set, queried in surrogate units
///
/// Points are separated from nodes. Nodes hold only indices into the points slice.
pub struct KDTree<'a> {
    points: &'a [GeoPoint],
    root: Option<Box<KDTreeNode>>,
}

/// A node in the K-D tree
struct KDTreeNode {
    /// Index of the point associated with this node
    point_id: usize,
    /// Indices of points equal to this node's point
    equal_ids: Vec<usize>,

    split: usize,
    left: Option<Box<KDTreeNode>>,
    right: Option<Box<KDTreeNode>>,
}

impl<'a> KDTree<'a> {
    /// Finds all points whose surrogate distance to `pt` is at most `radius`
    ///
    /// To avoid allocation, the `nodes` vector can be pre-allocated with a larger
    /// capacity and re-used across multiple calls.
    pub fn in_range(&self, pt: &GeoPoint, radius: f64, mut nodes: Vec<usize>) -> Vec<usize> {
        if radius.is_nan() || radius < 0.0 {
            return nodes;
        }

        // Anything within range has a latitude within `reach` of pt, so the
        // mean latitude used by the metric stays in the band below. The
        // smallest longitude scale over that band bounds distances across
        // a longitude split from below.
        let reach = radius.sqrt();
        let lo = (pt.lat() - reach).clamp(-90.0, 90.0) * DEGREE_RAD;
        let hi = (pt.lat() + reach).clamp(-90.0, 90.0) * DEGREE_RAD;
        let lon_scale = fast_cos(lo).min(fast_cos(hi));

        self.in_range_recursive(self.root.as_deref(), pt, radius, lon_scale, &mut nodes);
        nodes
    }

    fn in_range_recursive(
        &self,
        t: Option<&KDTreeNode>,
        pt: &GeoPoint,
        r: f64,
        lon_scale: f64,
        nodes: &mut Vec<usize>,
    ) {
        let Some(t) = t else {
            return;
        };

        let here = &self.points[t.point_id];
        let diff = pt.0[t.split] - here.0[t.split];

        let (this_side, other_side) = if diff < 0.0 {
            (t.left.as_deref(), t.right.as_deref())
        } else {
            (t.right.as_deref(), t.left.as_deref())
        };

        self.in_range_recursive(this_side, pt, r, lon_scale, nodes);

        let across = if t.split == 0 { diff * lon_scale } else { diff };
        if across * across <= r {
            if here.sq_dist(pt) <= r {
                nodes.push(t.point_id);
                nodes.extend_from_slice(&t.equal_ids);
            }
            self.in_range_recursive(other_side, pt, r, lon_scale, nodes);
        }
    }

    /// Returns the height of the K-D tree
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.height())
    }
}

impl KDTreeNode {
    fn height(&self) -> usize {
        let ht = self.left.as_ref().map_or(0, |l| l.height());
        let rht = self.right.as_ref().map_or(0, |r| r.height());
        ht.max(rht) + 1
    }
}

/// Creates a new balanced K-D tree built from the given points
pub fn new_kd_tree(points: &[GeoPoint]) -> KDTree<'_> {
    let root = if points.is_empty() {
        None
    } else {
        build_tree(0, &pre_sort(points))
    };

    KDTree { points, root }
}

/// Builds a tree node by finding the median point and recursively building left and right subtrees
fn build_tree(depth: usize, nodes: &PreSorted<'_>) -> Option<Box<KDTreeNode>> {
    let split = depth % 2;
    match nodes.cur[split].len() {
        0 => None,
        1 => Some(Box::new(KDTreeNode {
            point_id: nodes.cur[split][0],
            equal_ids: Vec::new(),
            split,
            left: None,
            right: None,
        })),
        _ => {
            let (med, equal, left, right) = nodes.split_med(split);
            Some(Box::new(KDTreeNode {
                point_id: med,
                equal_ids: equal,
                split,
                left: build_tree(depth + 1, &left),
                right: build_tree(depth + 1, &right),
            }))
        }
    }
}

/// Holds point ids pre-sorted on each dimension
struct PreSorted<'a> {
    points: &'a [GeoPoint],
    cur: [Vec<usize>; 2],
}

/// Pre-sorts point ids on each dimension, ties broken by the other dimension
fn pre_sort(points: &[GeoPoint]) -> PreSorted<'_> {
    let mut cur = [Vec::new(), Vec::new()];
    for (i, ids) in cur.iter_mut().enumerate() {
        *ids = (0..points.len()).collect();
        ids.sort_by(|&a, &b| {
            points[a].0[i]
                .total_cmp(&points[b].0[i])
                .then_with(|| points[a].0[1 - i].total_cmp(&points[b].0[1 - i]))
        });
    }
    PreSorted { points, cur }
}

impl<'a> PreSorted<'a> {
    /// Returns the median point on the split dimension, the ids of points equal
    /// to it, and two PreSorted sets (still sorted on each dimension) holding
    /// the points less than and greater than or equal to the median on `dim`.
    fn split_med(&self, dim: usize) -> (usize, Vec<usize>, PreSorted<'a>, PreSorted<'a>) {
        let ids = &self.cur[dim];
        let mut m = ids.len() / 2;
        while m > 0 && self.points[ids[m - 1]].0[dim] == self.points[ids[m]].0[dim] {
            m -= 1;
        }
        let mut mh = m;
        while mh < ids.len() - 1 && self.points[ids[mh + 1]] == self.points[ids[m]] {
            mh += 1;
        }
        let med = ids[m];
        let equal = ids[m + 1..=mh].to_vec();
        let pivot = self.points[med].0[dim];

        let mut left = PreSorted {
            points: self.points,
            cur: [Vec::new(), Vec::new()],
        };
        left.cur[dim] = ids[..m].to_vec();

        let mut right = PreSorted {
            points: self.points,
            cur: [Vec::new(), Vec::new()],
        };
        right.cur[dim] = ids[mh + 1..].to_vec();

        let other = 1 - dim;
        for &n in &self.cur[other] {
            if n == med || equal.contains(&n) {
                continue;
            }
            if self.points[n].0[dim] < pivot {
                left.cur[other].push(n);
            } else {
                right.cur[other].push(n);
            }
        }

        (med, equal, left, right)
    }
}
