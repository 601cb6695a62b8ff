use super::plane::{Plane, PolygonSplit};
use super::polygon::Polygon;

const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct BspNode {
    plane: Option<Plane>,
    front: Option<usize>,
    back: Option<usize>,
    polygons: Vec<Polygon>,
}

/// A binary space partitioning tree of polygons bounding a solid.
///
/// Nodes are stored in a flat arena and every traversal uses an explicit stack, so deep trees
/// built from large meshes cannot overflow the call stack.
#[derive(Clone, Debug)]
pub(super) struct BspTree {
    nodes: Vec<BspNode>,
}

impl BspTree {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut tree = Self {
            nodes: vec![BspNode::default()],
        };
        tree.build(polygons);
        tree
    }

    /// Inserts polygons into the tree, splitting them by the planes already there.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack = vec![(ROOT, polygons)];

        while let Some((node_id, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }

            let plane = *self.nodes[node_id]
                .plane
                .get_or_insert_with(|| polygons[0].plane);

            let mut front = vec![];
            let mut back = vec![];

            for poly in polygons {
                match plane.split_polygon(poly) {
                    PolygonSplit::CoplanarFront(p) | PolygonSplit::CoplanarBack(p) => {
                        self.nodes[node_id].polygons.push(p)
                    }
                    PolygonSplit::Front(p) => front.push(p),
                    PolygonSplit::Back(p) => back.push(p),
                    PolygonSplit::Spanning { front: f, back: b } => {
                        front.extend(f);
                        back.extend(b);
                    }
                }
            }

            if !front.is_empty() {
                let child = self.child_or_insert(node_id, true);
                stack.push((child, front));
            }
            if !back.is_empty() {
                let child = self.child_or_insert(node_id, false);
                stack.push((child, back));
            }
        }
    }

    fn child_or_insert(&mut self, node_id: usize, front: bool) -> usize {
        let existing = if front {
            self.nodes[node_id].front
        } else {
            self.nodes[node_id].back
        };

        existing.unwrap_or_else(|| {
            let child = self.nodes.len();
            self.nodes.push(BspNode::default());
            let node = &mut self.nodes[node_id];
            if front {
                node.front = Some(child);
            } else {
                node.back = Some(child);
            }
            child
        })
    }

    /// Swaps the solid and empty space of this tree.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            node.polygons.iter_mut().for_each(Polygon::flip);
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);
        }
    }

    /// Removes the parts of `polygons` inside the solid this tree bounds.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = vec![];
        let mut stack = vec![(ROOT, polygons)];

        while let Some((node_id, polygons)) = stack.pop() {
            let node = &self.nodes[node_id];
            let Some(plane) = node.plane else {
                result.extend(polygons);
                continue;
            };

            let mut front = vec![];
            let mut back = vec![];

            for poly in polygons {
                match plane.split_polygon(poly) {
                    PolygonSplit::CoplanarFront(p) | PolygonSplit::Front(p) => front.push(p),
                    PolygonSplit::CoplanarBack(p) | PolygonSplit::Back(p) => back.push(p),
                    PolygonSplit::Spanning { front: f, back: b } => {
                        front.extend(f);
                        back.extend(b);
                    }
                }
            }

            match node.front {
                Some(child) => stack.push((child, front)),
                None => result.append(&mut front),
            }
            // Polygons behind a leaf are inside the solid.
            if let Some(child) = node.back {
                stack.push((child, back));
            }
        }

        result
    }

    /// Removes the parts of this tree's polygons inside the solid bounded by `other`.
    pub fn clip_to(&mut self, other: &BspTree) {
        for node in &mut self.nodes {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);
        }
    }

    pub fn all_polygons(&self) -> Vec<Polygon> {
        self.nodes
            .iter()
            .flat_map(|node| node.polygons.iter().cloned())
            .collect()
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.nodes
            .into_iter()
            .flat_map(|node| node.polygons)
            .collect()
    }
}
