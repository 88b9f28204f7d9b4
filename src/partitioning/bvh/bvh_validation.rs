use super::bvh_tree::BvhNodeKind;
use crate::bounding_volume::BoundingVolume;
use crate::partitioning::Bvh;
use crate::shape::Triangle;

impl Bvh {
    /// Panics if the tree isn’t well-formed with respect to the triangles it was built from.
    ///
    /// The tree is well-formed if:
    /// - it is topologically correct: every node is reachable from the root exactly once and
    ///   every internal node has two valid children,
    /// - the leaves partition the triangles: the leaf-triangle buffer is a permutation of
    ///   `0..triangles.len()` and every slot of that buffer belongs to exactly one leaf,
    /// - it is geometrically correct: the AABB of a node encloses the AABBs of its children and
    ///   of its triangles.
    ///
    /// This is mostly a utility for debugging.
    pub fn assert_well_formed(&self, triangles: &[Triangle]) {
        assert_eq!(
            self.leaf_triangles.len(),
            triangles.len(),
            "The tree doesn’t index every triangle."
        );

        if self.nodes.is_empty() {
            assert!(triangles.is_empty(), "Empty tree over a non-empty mesh.");
            return;
        }

        let mut seen_triangles = vec![false; triangles.len()];
        for id in &self.leaf_triangles {
            let seen = &mut seen_triangles[*id as usize];
            assert!(!*seen, "Triangle {} indexed twice.", id);
            *seen = true;
        }

        let mut visited_nodes = vec![false; self.nodes.len()];
        let mut covered_slots = vec![false; self.leaf_triangles.len()];
        let mut stack = Self::traversal_stack();
        stack.push(0);

        while let Some(id) = stack.pop() {
            let visited = &mut visited_nodes[id as usize];
            assert!(!*visited, "Detected loop. Node {} visited twice.", id);
            *visited = true;

            let node = &self.nodes[id as usize];

            match node.kind {
                BvhNodeKind::Internal { left, right } => {
                    for child in [left, right] {
                        assert_ne!(child, 0, "The root can’t be a child.");
                        let child_node = &self.nodes[child as usize];
                        assert!(
                            node.aabb.contains(&child_node.aabb),
                            "Node {} doesn’t enclose its child {}.",
                            id,
                            child
                        );
                        stack.push(child);
                    }
                }
                BvhNodeKind::Leaf { start, count } => {
                    assert!(count > 0, "Leaf {} is empty.", id);
                    let range = start as usize..start as usize + count as usize;

                    for slot in range {
                        assert!(!covered_slots[slot], "Slot {} owned by two leaves.", slot);
                        covered_slots[slot] = true;

                        let tri = &triangles[self.leaf_triangles[slot] as usize];
                        assert!(
                            node.aabb.contains(&tri.local_aabb()),
                            "Leaf {} doesn’t enclose its triangle {}.",
                            id,
                            self.leaf_triangles[slot]
                        );
                    }
                }
            }
        }

        assert!(
            visited_nodes.iter().all(|v| *v),
            "Some nodes are unreachable from the root."
        );
        assert!(
            covered_slots.iter().all(|c| *c),
            "Some triangles don’t belong to any leaf."
        );
    }
}
