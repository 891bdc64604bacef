use core::fmt::{self, Debug};
use fxhash::FxHashMap;
use log::debug;
use num_traits::Zero;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use std::hash::Hash;

use crate::{Cost, N_SMALLVEC_SIZE};

/// The capability a graph must expose to be searched: weighted adjacency from a node to its
/// neighbours. Weights are assumed non-negative.
pub trait Graph {
    type Node: Eq + Hash + Clone + Debug;
    type Cost: Cost;
    type Successors: IntoIterator<Item = (Self::Node, Self::Cost)>;

    fn successors(&self, node: &Self::Node) -> Self::Successors;

    /// Weight of the cheapest edge from `from` to `to`, if there is one.
    fn edge_cost(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Cost> {
        self.successors(from)
            .into_iter()
            .filter(|(n, _)| n == to)
            .map(|(_, c)| c)
            .min()
    }

    /// Total weight of a path, or [None] if two consecutive nodes are not adjacent.
    fn path_cost(&self, path: &[Self::Node]) -> Option<Self::Cost> {
        path.windows(2).try_fold(Zero::zero(), |total: Self::Cost, pair| {
            self.edge_cost(&pair[0], &pair[1]).map(|c| total + c)
        })
    }

    /// Returns [true] only if `goal` can certainly not be reached from `start`. Searches use
    /// this to bail out before flood-filling a component.
    fn unreachable(&self, _start: &Self::Node, _goal: &Self::Node) -> bool {
        false
    }
}

/// Handle of a vertex in a [DiGraph].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

pub type Adjacency<C> = SmallVec<[(VertexId, C); N_SMALLVEC_SIZE]>;

/// Directed graph stored as an arena of vertex payloads and adjacency lists.
///
/// Vertex identity is the [VertexId] handed out on insertion: two vertices with equal payloads
/// are distinct unless they were created through [intern](Self::intern). Connectivity is tracked
/// with a [UnionFind] over the undirected closure of the edges, which lets searches reject
/// queries between different components without exploring anything.
#[derive(Clone, Debug)]
pub struct DiGraph<V, C> {
    vertices: Vec<V>,
    adjacency: Vec<Adjacency<C>>,
    interned: FxHashMap<V, VertexId>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    /// Number of vertices the current [UnionFind] was generated for.
    covered: usize,
    edge_count: usize,
}

impl<V, C> Default for DiGraph<V, C> {
    fn default() -> DiGraph<V, C> {
        DiGraph {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            interned: FxHashMap::default(),
            components: UnionFind::new(0),
            components_dirty: false,
            covered: 0,
            edge_count: 0,
        }
    }
}

impl<V, C: Cost> DiGraph<V, C> {
    pub fn new() -> DiGraph<V, C> {
        DiGraph::default()
    }

    pub fn with_capacity(vertices: usize) -> DiGraph<V, C> {
        DiGraph {
            vertices: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            ..DiGraph::default()
        }
    }

    /// Adds a new vertex without any edges. Always creates a fresh vertex.
    pub fn add_vertex(&mut self, payload: V) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(payload);
        self.adjacency.push(SmallVec::new());
        // The union-find cannot grow, so a new singleton is only picked up on regeneration.
        self.components_dirty = true;
        id
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.0)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(id.0)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Outgoing edges of `id`; empty for unknown vertices.
    pub fn edges(&self, id: VertexId) -> &[(VertexId, C)] {
        self.adjacency.get(id.0).map(|a| a.as_slice()).unwrap_or(&[])
    }

    /// Adds a directed edge, replacing the weight of an existing edge between the same pair.
    /// Returns the previous weight. Edges touching unknown vertices are ignored.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: C) -> Option<C> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let edges = &mut self.adjacency[from.0];
        if let Some(edge) = edges.iter_mut().find(|(n, _)| *n == to) {
            return Some(std::mem::replace(&mut edge.1, weight));
        }
        edges.push((to, weight));
        self.edge_count += 1;
        if from.0 < self.covered && to.0 < self.covered {
            self.components.union(from.0, to.0);
        } else {
            self.components_dirty = true;
        }
        None
    }

    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: C) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Removes the directed edge from `from` to `to`, returning its weight. Flags the components
    /// as dirty since they are (potentially) broken apart into multiple.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<C> {
        let edges = self.adjacency.get_mut(from.0)?;
        let pos = edges.iter().position(|(n, _)| *n == to)?;
        let (_, weight) = edges.remove(pos);
        self.edge_count -= 1;
        self.components_dirty = true;
        Some(weight)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up every pair of adjacent vertices.
    pub fn generate_components(&mut self) {
        let n = self.vertices.len();
        self.components = UnionFind::new(n);
        self.covered = n;
        self.components_dirty = false;
        for (from, edges) in self.adjacency.iter().enumerate() {
            for (to, _) in edges {
                self.components.union(from, to.0);
            }
        }
        debug!(
            "Generated components for {} vertices and {} edges",
            n, self.edge_count
        );
    }

    /// Retrieves the component id a given vertex belongs to, if the components cover it.
    pub fn get_component(&self, id: VertexId) -> Option<usize> {
        (id.0 < self.covered).then(|| self.components.find(id.0))
    }

    /// Checks if start and goal are on the same component. Stale components only ever join
    /// too much, so a negative answer is always final.
    pub fn reachable(&self, start: VertexId, goal: VertexId) -> bool {
        !self.unreachable_ids(start, goal)
    }

    fn unreachable_ids(&self, start: VertexId, goal: VertexId) -> bool {
        if !self.contains(start) || !self.contains(goal) {
            return true;
        }
        if start.0 >= self.covered || goal.0 >= self.covered {
            // Vertices added after the last regeneration are unknown to the union-find.
            return false;
        }
        !self.components.equiv(start.0, goal.0)
    }
}

impl<V, C> DiGraph<V, C>
where
    V: Eq + Hash + Clone,
    C: Cost,
{
    /// Returns the vertex created for an equal payload by an earlier call, or creates it.
    pub fn intern(&mut self, payload: V) -> VertexId {
        if let Some(&id) = self.interned.get(&payload) {
            return id;
        }
        let id = self.add_vertex(payload.clone());
        self.interned.insert(payload, id);
        id
    }

    /// The interned vertex for `payload`, without creating one.
    pub fn lookup(&self, payload: &V) -> Option<VertexId> {
        self.interned.get(payload).copied()
    }
}

impl<V, C: Cost> Graph for DiGraph<V, C> {
    type Node = VertexId;
    type Cost = C;
    type Successors = Adjacency<C>;

    fn successors(&self, node: &VertexId) -> Adjacency<C> {
        self.adjacency.get(node.0).cloned().unwrap_or_default()
    }

    fn edge_cost(&self, from: &VertexId, to: &VertexId) -> Option<C> {
        self.edges(*from)
            .iter()
            .find(|(n, _)| n == to)
            .map(|&(_, c)| c)
    }

    fn unreachable(&self, start: &VertexId, goal: &VertexId) -> bool {
        self.unreachable_ids(*start, *goal)
    }
}
