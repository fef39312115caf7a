use densegraph::{Graph, GraphError};
use petgraph::algo::{dijkstra, has_path_connecting};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(usize),
    RemoveVertex(usize),
    AddEdge(usize, usize, u8),
    RemoveEdge(usize, usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0usize..12).prop_map(Operation::AddVertex),
        1 => (0usize..12).prop_map(Operation::RemoveVertex),
        4 => (0usize..12, 0usize..12, 1u8..=20).prop_map(|(s, d, w)| Operation::AddEdge(s, d, w)),
        2 => (0usize..12, 0usize..12).prop_map(|(s, d)| Operation::RemoveEdge(s, d)),
    ]
}

fn edge_list() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>)> {
    (1usize..10).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 1u8..=20), 0..40),
        )
    })
}

/// Reference model: insertion-ordered ids and a map of present edges.
#[derive(Default)]
struct Model {
    order: Vec<usize>,
    edges: BTreeMap<(usize, usize), f64>,
}

impl Model {
    fn apply(&mut self, graph: &mut Graph, op: &Operation) {
        match *op {
            Operation::AddVertex(id) => {
                let fresh = !self.order.contains(&id);
                if fresh {
                    self.order.push(id);
                }
                assert_eq!(graph.add_vertex(id), fresh, "add_vertex({id})");
            }
            Operation::RemoveVertex(id) => {
                let result = graph.try_remove_vertex(id);
                match self.order.iter().position(|&v| v == id) {
                    Some(pos) => {
                        self.order.remove(pos);
                        let before = self.edges.len();
                        self.edges.retain(|&(s, d), _| s != id && d != id);
                        assert_eq!(result, Ok(before - self.edges.len()), "remove_vertex({id})");
                    }
                    None => assert_eq!(result, Err(GraphError::UnknownVertex(id))),
                }
            }
            Operation::AddEdge(src, dest, w) => {
                let known = self.order.contains(&src) && self.order.contains(&dest);
                let fresh = known && !self.edges.contains_key(&(src, dest));
                if fresh {
                    self.edges.insert((src, dest), f64::from(w));
                }
                assert_eq!(graph.add_edge(src, dest, f64::from(w)), fresh, "add_edge({src}, {dest})");
            }
            Operation::RemoveEdge(src, dest) => {
                let present = self.edges.remove(&(src, dest));
                assert_eq!(graph.try_remove_edge(src, dest).ok(), present, "remove_edge({src}, {dest})");
            }
        }
    }

    fn check(&self, graph: &Graph) {
        assert_eq!(graph.vertex_count(), self.order.len());
        assert_eq!(graph.edge_count(), self.edges.len());
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), self.order);
        for (pos, &id) in self.order.iter().enumerate() {
            assert_eq!(graph.index_of(id), Some(pos), "index of {id}");
        }
        for &src in &self.order {
            for &dest in &self.order {
                let expected = self.edges.get(&(src, dest)).copied();
                assert_eq!(graph.contains_edge(src, dest), expected.is_some());
                assert_eq!(graph.cost(src, dest), expected.unwrap_or(f64::INFINITY));
            }
        }
    }
}

fn build(n: usize, edges: &[(usize, usize, u8)]) -> (Graph, DiGraph<usize, f64>, Vec<NodeIndex>) {
    let mut graph = Graph::new();
    let mut reference = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..n)
        .map(|id| {
            graph.add_vertex(id);
            reference.add_node(id)
        })
        .collect();
    for &(s, d, w) in edges {
        if graph.add_edge(s, d, f64::from(w)) {
            reference.add_edge(nodes[s], nodes[d], f64::from(w));
        }
    }
    (graph, reference, nodes)
}

proptest! {
    #[test]
    fn test_mutations_match_model(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph = Graph::new();
        let mut model = Model::default();
        for op in &ops {
            model.apply(&mut graph, op);
            model.check(&graph);
        }
    }

    #[test]
    fn test_dijkstra_matches_petgraph((n, edges) in edge_list(), source in 0usize..10) {
        let source = source % n;
        let (mut graph, reference, nodes) = build(n, &edges);
        graph.dijkstra(source);
        let expected = dijkstra(&reference, nodes[source], None, |e| *e.weight());

        for id in 0..n {
            match expected.get(&nodes[id]) {
                Some(&d) => {
                    prop_assert_eq!(graph.distance(id), d);
                    let path = graph.path(id).expect("reachable vertex has a path");
                    prop_assert_eq!(path.first(), Some(&source));
                    let total: f64 = path.windows(2).map(|w| graph.cost(w[0], w[1])).sum();
                    prop_assert_eq!(total, d);
                }
                None => {
                    prop_assert!(graph.distance(id).is_infinite());
                    prop_assert!(!graph.is_path(id));
                }
            }
        }
    }

    #[test]
    fn test_prim_spans_exactly_the_reachable_set((n, edges) in edge_list(), source in 0usize..10) {
        let source = source % n;
        let (mut graph, reference, nodes) = build(n, &edges);
        graph.prim(source);

        for id in 0..n {
            let reachable = has_path_connecting(&reference, nodes[source], nodes[id], None);
            prop_assert_eq!(graph.is_path(id), reachable, "vertex {}", id);
        }
        let tree = graph.tree_edges();
        let reached = (0..n).filter(|&id| graph.is_path(id)).count();
        prop_assert_eq!(tree.len(), reached - 1);
        for (prev, id, weight) in tree {
            prop_assert!(graph.contains_edge(prev, id));
            prop_assert_eq!(graph.distance(id), weight);
        }
    }

    #[test]
    fn test_clone_is_unaffected_by_mutation(
        (n, edges) in edge_list(),
        ops in proptest::collection::vec(operation(), 1..60),
    ) {
        let (original, _, _) = build(n, &edges);
        let snapshot: Vec<_> = original
            .vertex_ids()
            .map(|id| (id, original.out_edges(id).collect::<Vec<_>>()))
            .collect();
        let counts = (original.vertex_count(), original.edge_count());

        let mut copy = original.clone();
        let mut model = Model::default();
        model.order = copy.vertex_ids().collect();
        for (s, d, w) in snapshot.iter().flat_map(|(s, out)| out.iter().map(move |&(d, w)| (*s, d, w))) {
            model.edges.insert((s, d), w);
        }
        for op in &ops {
            model.apply(&mut copy, op);
        }
        copy.dijkstra(0);

        prop_assert_eq!((original.vertex_count(), original.edge_count()), counts);
        for (id, out) in &snapshot {
            prop_assert_eq!(&original.out_edges(*id).collect::<Vec<_>>(), out);
        }
        prop_assert!(original.last_traversal().is_none());
    }
}
