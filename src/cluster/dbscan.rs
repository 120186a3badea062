use super::kdtree::new_kd_tree;
use super::params::ClusterParameters;
use super::point::{Cluster, GeoPoint, Membership};
use bitvec::prelude::*;

// DBSCAN algorithm pseudocode (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) < MinPts
//          mark P as NOISE
//       else
//          C = next cluster
//          expandCluster(P, NeighborPts, C, eps, MinPts)
//
// expandCluster(P, NeighborPts, C, eps, MinPts)
//    add P to cluster C
//    for each point P' in NeighborPts
//       if P' is not visited
//          mark P' as visited
//          NeighborPts' = regionQuery(P', eps)
//          if sizeof(NeighborPts') >= MinPts
//             NeighborPts = NeighborPts joined with NeighborPts'
//       if P' is not yet member of any cluster
//          add P' to cluster C
//
// regionQuery(P, eps)
//    return all points within P's eps-neighborhood (including P)

/// Clusters incoming points using DBSCAN algorithm
///
/// # Arguments
///
/// * `points` - List of points to cluster
/// * `radius` - Neighbourhood radius on the squared surrogate scale
///   (see [`super::distance::km_to_surrogate`])
/// * `min_points` - Minimum number of points in the neighbourhood, the point itself included
///
/// # Returns
///
/// A tuple `(clusters, noise)` where:
/// - `clusters` is a vector of found clusters, numbered in order of discovery
/// - `noise` is a vector of point indices that are outliers (not in any cluster), ascending
///
/// Every index of `points` lands in exactly one of the two. A point first seen
/// as noise joins the first cluster that later reaches it.
pub fn db_scan(points: &[GeoPoint], radius: f64, min_points: usize) -> (Vec<Cluster>, Vec<usize>) {
    let mut visited = bitvec![0; points.len()];
    let mut members = bitvec![0; points.len()];
    let mut neighbor_unique = bitvec![0; points.len()];
    let mut clusters = Vec::new();
    let kd_tree = new_kd_tree(points);

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited.set(i, true);

        let neighbor_pts = kd_tree.in_range(&points[i], radius, Vec::new());
        if neighbor_pts.len() < min_points {
            continue;
        }

        let mut cluster = Cluster {
            id: clusters.len(),
            points: vec![i],
        };
        members.set(i, true);

        neighbor_unique.fill(false);
        for &j in &neighbor_pts {
            neighbor_unique.set(j, true);
        }

        // Worklist: neighbor_pts grows as core points are found
        let mut neighbor_pts = neighbor_pts;
        let mut more_neighbors = Vec::new();
        let mut j = 0;
        while j < neighbor_pts.len() {
            let k = neighbor_pts[j];
            if !visited[k] {
                visited.set(k, true);
                more_neighbors.clear();
                more_neighbors = kd_tree.in_range(&points[k], radius, more_neighbors);
                if more_neighbors.len() >= min_points {
                    for &p in &more_neighbors {
                        if !neighbor_unique[p] {
                            neighbor_pts.push(p);
                            neighbor_unique.set(p, true);
                        }
                    }
                }
            }

            if !members[k] {
                cluster.points.push(k);
                members.set(k, true);
            }
            j += 1;
        }
        clusters.push(cluster);
    }

    let noise = members.iter_zeros().collect();
    (clusters, noise)
}

/// Runs [`db_scan`] with parameters from the parameter selector
pub fn db_scan_with(points: &[GeoPoint], params: &ClusterParameters) -> (Vec<Cluster>, Vec<usize>) {
    db_scan(points, params.radius, params.min_size)
}

/// Simple O(N) way to find points in neighbourhood
///
/// This is equivalent to `kd_tree.in_range(p, radius, vec![])`, up to order
pub fn region_query(points: &[GeoPoint], p: &GeoPoint, radius: f64) -> Vec<usize> {
    let mut result = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if point.sq_dist(p) <= radius {
            result.push(i);
        }
    }

    result
}

/// Creates a membership array from clusters
///
/// `labels[i]` is the cluster of point i, or [`Membership::Noise`]
pub fn labels(clusters: &[Cluster], num_points: usize) -> Vec<Membership> {
    let mut labels = vec![Membership::Noise; num_points];

    for cluster in clusters {
        for &idx in &cluster.points {
            labels[idx] = Membership::Cluster(cluster.id);
        }
    }

    labels
}
