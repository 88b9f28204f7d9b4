use crate::bounding_volume::Aabb;
use core::ops::Range;

/// Parameters of the one-time build of a [`Bvh`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhBuildOptions {
    /// A node with at most this many triangles always becomes a leaf.
    ///
    /// Nodes with more triangles may still become leaves when no split improves the
    /// surface-area heuristic. A value of 0 is treated as 1.
    pub max_triangles_per_leaf: usize,
}

impl BvhBuildOptions {
    /// The leaf size used by [`BvhBuildOptions::default`].
    pub const DEFAULT_MAX_TRIANGLES_PER_LEAF: usize = 10;

    /// Build options with the given leaf size.
    pub fn with_max_triangles_per_leaf(max_triangles_per_leaf: usize) -> Self {
        Self {
            max_triangles_per_leaf,
        }
    }
}

impl Default for BvhBuildOptions {
    fn default() -> Self {
        Self::with_max_triangles_per_leaf(Self::DEFAULT_MAX_TRIANGLES_PER_LEAF)
    }
}

/// The topology of a BVH node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BvhNodeKind {
    /// A node with exactly two children, identified by their index in [`Bvh::nodes`].
    Internal {
        /// Index of the left child.
        left: u32,
        /// Index of the right child.
        right: u32,
    },
    /// A node owning the triangles `Bvh::leaf_triangles()[start..start + count]`.
    Leaf {
        /// First slot of this leaf in the leaf-triangle buffer.
        start: u32,
        /// Number of triangles owned by this leaf.
        count: u32,
    },
}

/// The node (internal or leaf) of a BVH.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNode {
    pub(super) aabb: Aabb,
    pub(super) kind: BvhNodeKind,
}

impl BvhNode {
    #[inline]
    pub(super) fn leaf(aabb: Aabb, start: u32, count: u32) -> Self {
        Self {
            aabb,
            kind: BvhNodeKind::Leaf { start, count },
        }
    }

    /// This node’s AABB.
    ///
    /// It encloses every triangle reachable from this node.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The topology of this node.
    #[inline]
    pub fn kind(&self) -> BvhNodeKind {
        self.kind
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, BvhNodeKind::Leaf { .. })
    }

    /// The indices of the left and right children of this node, if it is internal.
    #[inline]
    pub fn children(&self) -> Option<(u32, u32)> {
        match self.kind {
            BvhNodeKind::Internal { left, right } => Some((left, right)),
            BvhNodeKind::Leaf { .. } => None,
        }
    }

    /// The slots of the leaf-triangle buffer owned by this node, if it is a leaf.
    #[inline]
    pub fn leaf_range(&self) -> Option<Range<usize>> {
        match self.kind {
            BvhNodeKind::Leaf { start, count } => {
                Some(start as usize..start as usize + count as usize)
            }
            BvhNodeKind::Internal { .. } => None,
        }
    }
}

/// Summary of the shape of a [`Bvh`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BvhStats {
    /// Total number of nodes, internal and leaves.
    pub node_count: usize,
    /// Number of leaves.
    pub leaf_count: usize,
    /// Number of nodes on the longest root-to-leaf path. Zero for an empty tree.
    pub max_depth: usize,
    /// Largest number of triangles owned by a single leaf.
    pub max_leaf_triangles: usize,
    /// Number of triangles indexed by the tree.
    pub triangle_count: usize,
}

/// A static Bounding Volume Hierarchy over a set of triangles.
///
/// Nodes are stored in a flat arena, the root being at index 0. Leaves don’t store triangles
/// themselves but a range of a single buffer of triangle indices, which is a permutation of
/// `0..triangle_count`. The triangles are never copied nor reordered: the index stored in a leaf
/// is the position of the triangle in the slice the tree was built from.
///
/// The tree is immutable once built. See [`Bvh::from_triangles`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) nodes: Vec<BvhNode>,
    pub(super) leaf_triangles: Vec<u32>,
    pub(super) options: BvhBuildOptions,
}

impl Bvh {
    /// An empty BVH.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node of this tree, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<&BvhNode> {
        self.nodes.first()
    }

    /// The AABB bounding everything contained by this BVH.
    ///
    /// This is the empty AABB if the tree is empty.
    pub fn root_aabb(&self) -> Aabb {
        self.root().map(|root| root.aabb).unwrap_or_default()
    }

    /// Does this tree contain no triangle at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All the nodes of this tree. The root, if any, is the first one.
    #[inline]
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    /// The node at index `id`.
    #[inline]
    pub fn node(&self, id: u32) -> &BvhNode {
        &self.nodes[id as usize]
    }

    /// The buffer of triangle indices partitioned among the leaves.
    #[inline]
    pub fn leaf_triangles(&self) -> &[u32] {
        &self.leaf_triangles
    }

    /// The indices of the triangles owned by `node`.
    ///
    /// Returns an empty slice if `node` is internal.
    #[inline]
    pub fn node_triangles(&self, node: &BvhNode) -> &[u32] {
        match node.leaf_range() {
            Some(range) => &self.leaf_triangles[range],
            None => &[],
        }
    }

    /// The number of triangles this tree was built from.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.leaf_triangles.len()
    }

    /// The options this tree was built with, after clamping.
    #[inline]
    pub fn options(&self) -> &BvhBuildOptions {
        &self.options
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// The depth of the sub-tree rooted at the node with index `node_id`.
    ///
    /// Set `node_id` to 0 to get the depth of the whole tree. A single leaf has depth 1.
    pub fn subtree_depth(&self, node_id: u32) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut max_depth = 0;
        let mut stack = Self::traversal_stack_with_depth();
        stack.push((node_id, 1));

        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id as usize].kind {
                BvhNodeKind::Internal { left, right } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                BvhNodeKind::Leaf { .. } => max_depth = max_depth.max(depth),
            }
        }

        max_depth
    }

    /// Computes a summary of the shape of this tree.
    pub fn stats(&self) -> BvhStats {
        let max_leaf_triangles = self
            .nodes
            .iter()
            .filter_map(|node| node.leaf_range())
            .map(|range| range.len())
            .max()
            .unwrap_or(0);

        BvhStats {
            node_count: self.nodes.len(),
            leaf_count: self.leaf_count(),
            max_depth: self.subtree_depth(0),
            max_leaf_triangles,
            triangle_count: self.triangle_count(),
        }
    }
}
