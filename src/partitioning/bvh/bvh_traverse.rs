use super::bvh_tree::BvhNodeKind;
use super::BvhNode;
use crate::partitioning::Bvh;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Iterator over the leaves of a [`Bvh`], see [`Bvh::leaves`].
pub struct Leaves<'a, Check: Fn(&BvhNode) -> bool> {
    tree: &'a Bvh,
    stack: SmallVec<[&'a BvhNode; TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode) -> bool> Leaves<'a, Check> {
    fn new(tree: &'a Bvh, check: Check) -> Leaves<'a, Check> {
        let mut stack = SmallVec::new();

        if let Some(root) = tree.root() {
            if check(root) {
                stack.push(root);
            }
        }

        Leaves { tree, stack, check }
    }
}

impl<'a, Check: Fn(&BvhNode) -> bool> Iterator for Leaves<'a, Check> {
    type Item = &'a BvhNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;

            match node.kind {
                BvhNodeKind::Leaf { .. } => return Some(node),
                BvhNodeKind::Internal { left, right } => {
                    let left = &self.tree.nodes[left as usize];
                    let right = &self.tree.nodes[right as usize];

                    if (self.check)(left) {
                        self.stack.push(left);
                    }

                    if (self.check)(right) {
                        self.stack.push(right);
                    }
                }
            }
        }
    }
}

impl Bvh {
    /// Iterates through the leaves, in depth-first order.
    ///
    /// The `check_node` closure is called on every traversed node. If it returns `false` then the
    /// node and all its descendants won’t be iterated on. This is useful for pruning whole
    /// sub-trees based on a geometric predicate on the node’s AABB.
    ///
    /// Children are visited in the same order as [`Bvh::traverse`].
    pub fn leaves<F: Fn(&BvhNode) -> bool>(&self, check_node: F) -> Leaves<'_, F> {
        Leaves::new(self, check_node)
    }
}

/// Controls the execution flow of [`Bvh::traverse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversalAction {
    /// The traversal will continue on the children of the tested node.
    Continue,
    /// The traversal will skip all descendants of the tested node.
    Prune,
    /// The traversal will exit immediately.
    EarlyExit,
}

impl Bvh {
    #[inline(always)]
    pub(crate) fn traversal_stack() -> SmallVec<[u32; TRAVERSAL_STACK_SIZE]> {
        Default::default()
    }

    #[inline(always)]
    pub(super) fn traversal_stack_with_depth() -> SmallVec<[(u32, usize); TRAVERSAL_STACK_SIZE]>
    {
        Default::default()
    }

    /// Traverses the BVH in depth-first order with full control over traversal.
    ///
    /// For each node visited, starting with the root, `check_node` decides whether to continue
    /// with that node’s children, prune that subtree, or exit early.
    ///
    /// The traversal relies on an explicit stack: the children of an internal node are pushed
    /// left then right, so the right subtree is visited before the left one.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use capsweep3d::bounding_volume::{Aabb, BoundingVolume};
    /// use capsweep3d::math::Point;
    /// use capsweep3d::partitioning::{Bvh, BvhBuildOptions, TraversalAction};
    /// use capsweep3d::shape::Triangle;
    ///
    /// let triangles: Vec<_> = (0..8)
    ///     .map(|i| {
    ///         let x = i as f32 * 2.0;
    ///         Triangle::new(
    ///             Point::new(x, 0.0, 0.0),
    ///             Point::new(x + 1.0, 0.0, 0.0),
    ///             Point::new(x, 1.0, 0.0),
    ///         )
    ///     })
    ///     .collect();
    /// let bvh = Bvh::from_triangles(&triangles, BvhBuildOptions::with_max_triangles_per_leaf(1));
    ///
    /// let region = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(3.5, 2.0, 1.0));
    /// let mut found = vec![];
    /// bvh.traverse(|node| {
    ///     if !node.aabb().intersects(&region) {
    ///         return TraversalAction::Prune;
    ///     }
    ///
    ///     found.extend_from_slice(bvh.node_triangles(node));
    ///     TraversalAction::Continue
    /// });
    ///
    /// found.sort();
    /// assert_eq!(found, [0, 1]);
    /// # }
    /// ```
    pub fn traverse(&self, mut check_node: impl FnMut(&BvhNode) -> TraversalAction) {
        let mut stack = Self::traversal_stack();

        if !self.nodes.is_empty() {
            stack.push(0);
        }

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];

            match check_node(node) {
                TraversalAction::Continue => {
                    if let BvhNodeKind::Internal { left, right } = node.kind {
                        stack.push(left);
                        stack.push(right);
                    }
                }
                TraversalAction::Prune => {}
                TraversalAction::EarlyExit => return,
            }
        }
    }
}
