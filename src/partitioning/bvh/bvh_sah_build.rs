use super::bvh_tree::BvhNodeKind;
use super::{Bvh, BvhBuildOptions, BvhNode};
use crate::bounding_volume::details::indexed_aabbs_union;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, DIM};
use crate::shape::Triangle;
use ordered_float::OrderedFloat;

/// A node waiting to be either split or turned into a leaf.
///
/// The node owns the slots `start..end` of the leaf-triangle buffer.
struct BuildTask {
    node: u32,
    start: usize,
    end: usize,
}

/// The best split found for a node.
struct SahSplit {
    axis: usize,
    /// Number of triangles going to the left child.
    left_count: usize,
    cost: Real,
}

/// Temporary buffers reused by every split evaluation of a build.
#[derive(Default)]
struct SahWorkspace {
    initial_order: Vec<u32>,
    axis_order: Vec<u32>,
    best_order: Vec<u32>,
    right_areas: Vec<Real>,
}

impl Bvh {
    /// Builds a BVH over `triangles` with an exact surface-area heuristic.
    ///
    /// Each leaf stores indices into `triangles`, which is never reordered. The build is
    /// iterative (it never recurses, whatever the depth of the resulting tree) and
    /// deterministic: the same triangles and options always produce the same tree.
    ///
    /// A node with more than [`BvhBuildOptions::max_triangles_per_leaf`] triangles is split by
    /// sorting its triangles by centroid along each axis and evaluating every split position
    /// with the cost `1 + (i * area(left) + (n - i) * area(right)) / area(node)`. If the best
    /// cost isn’t smaller than the triangle count `n`, the node becomes a leaf instead.
    pub fn from_triangles(triangles: &[Triangle], options: BvhBuildOptions) -> Self {
        let options = Self::sanitize_options(options);
        let mut result = Self {
            nodes: Vec::new(),
            leaf_triangles: (0..triangles.len() as u32).collect(),
            options,
        };

        if triangles.is_empty() {
            log::debug!("built empty BVH: no triangles");
            return result;
        }

        let aabbs: Vec<Aabb> = triangles.iter().map(|tri| tri.local_aabb()).collect();
        let centroids: Vec<Point<Real>> = triangles.iter().map(|tri| tri.center()).collect();
        let mut workspace = SahWorkspace::default();

        let root_aabb = indexed_aabbs_union(&aabbs, &result.leaf_triangles);
        result
            .nodes
            .push(BvhNode::leaf(root_aabb, 0, triangles.len() as u32));

        let mut stack = vec![BuildTask {
            node: 0,
            start: 0,
            end: triangles.len(),
        }];

        while let Some(task) = stack.pop() {
            let count = task.end - task.start;

            if count <= options.max_triangles_per_leaf {
                continue;
            }

            let node_aabb = result.nodes[task.node as usize].aabb;
            let slots = &mut result.leaf_triangles[task.start..task.end];
            let split = find_best_split(slots, &aabbs, &centroids, &node_aabb, &mut workspace);
            let split = match split {
                Some(split) if split.cost < count as Real => split,
                _ => continue,
            };

            log::trace!(
                "splitting node {} ({} triangles) along axis {} after {} triangles, cost {}",
                task.node,
                count,
                split.axis,
                split.left_count,
                split.cost
            );

            slots.copy_from_slice(&workspace.best_order);
            let mid = task.start + split.left_count;

            let left_id = result.nodes.len() as u32;
            let right_id = left_id + 1;
            let left_aabb = indexed_aabbs_union(&aabbs, &result.leaf_triangles[task.start..mid]);
            let right_aabb = indexed_aabbs_union(&aabbs, &result.leaf_triangles[mid..task.end]);

            result.nodes.push(BvhNode::leaf(
                left_aabb,
                task.start as u32,
                split.left_count as u32,
            ));
            result.nodes.push(BvhNode::leaf(
                right_aabb,
                mid as u32,
                (task.end - mid) as u32,
            ));
            result.nodes[task.node as usize].kind = BvhNodeKind::Internal {
                left: left_id,
                right: right_id,
            };

            stack.push(BuildTask {
                node: right_id,
                start: mid,
                end: task.end,
            });
            stack.push(BuildTask {
                node: left_id,
                start: task.start,
                end: mid,
            });
        }

        let stats = result.stats();
        log::debug!(
            "built BVH over {} triangles: {} nodes, {} leaves, depth {}",
            stats.triangle_count,
            stats.node_count,
            stats.leaf_count,
            stats.max_depth
        );

        result
    }

    fn sanitize_options(mut options: BvhBuildOptions) -> BvhBuildOptions {
        if options.max_triangles_per_leaf == 0 {
            log::warn!("BVH leaves can't be empty: max_triangles_per_leaf of 0 clamped to 1.");
            options.max_triangles_per_leaf = 1;
        }

        options
    }
}

/// Evaluates every split position of `slots` along every axis.
///
/// On success, `workspace.best_order` contains `slots` sorted along the returned axis. Returns
/// `None` if no split has a finite cost, e.g., if `parent` has a zero area.
fn find_best_split(
    slots: &[u32],
    aabbs: &[Aabb],
    centroids: &[Point<Real>],
    parent: &Aabb,
    workspace: &mut SahWorkspace,
) -> Option<SahSplit> {
    let parent_area = parent.surface_area();
    let mut best: Option<SahSplit> = None;

    workspace.initial_order.clear();
    workspace.initial_order.extend_from_slice(slots);

    for axis in 0..DIM {
        // Each axis sorts the node’s original order so that ties between equal centroids are
        // resolved identically whatever the axes evaluated before.
        workspace.axis_order.clear();
        workspace
            .axis_order
            .extend_from_slice(&workspace.initial_order);
        workspace
            .axis_order
            .sort_by_key(|id| OrderedFloat(centroids[*id as usize][axis]));

        if let Some((left_count, cost)) = best_split_along_axis(
            &workspace.axis_order,
            aabbs,
            parent_area,
            &mut workspace.right_areas,
        ) {
            if best.as_ref().map(|b| cost < b.cost).unwrap_or(true) {
                best = Some(SahSplit {
                    axis,
                    left_count,
                    cost,
                });
                workspace.best_order.clear();
                workspace.best_order.extend_from_slice(&workspace.axis_order);
            }
        }
    }

    best
}

/// Finds the split position of `sorted` with the smallest SAH cost.
///
/// Returns the number of triangles on the left of the split and its cost. Ties are resolved in
/// favor of the smallest left count. Non-finite costs are never selected.
fn best_split_along_axis(
    sorted: &[u32],
    aabbs: &[Aabb],
    parent_area: Real,
    right_areas: &mut Vec<Real>,
) -> Option<(usize, Real)> {
    let n = sorted.len();

    // right_areas[i] is the area of the union of the triangles sorted[i..].
    right_areas.clear();
    right_areas.resize(n, 0.0);
    let mut right = Aabb::new_invalid();
    for i in (1..n).rev() {
        right.merge(&aabbs[sorted[i] as usize]);
        right_areas[i] = right.surface_area();
    }

    let mut best_cost = Real::INFINITY;
    let mut best_left_count = None;
    let mut left = Aabb::new_invalid();

    for i in 1..n {
        left.merge(&aabbs[sorted[i - 1] as usize]);
        let cost = 1.0
            + (i as Real * left.surface_area() + (n - i) as Real * right_areas[i]) / parent_area;

        if cost < best_cost {
            best_cost = cost;
            best_left_count = Some(i);
        }
    }

    best_left_count.map(|i| (i, best_cost))
}
