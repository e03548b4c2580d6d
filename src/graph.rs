use crate::{
    data::{Ingredient, Potion, PotionKind},
    random,
};
use core::fmt::{self, Display};
use petgraph::{algo, graph::NodeIndex, stable_graph::StableGraph};
use rand::Rng;
use serde_derive::Serialize;

pub type GraphType = StableGraph<Node, Edge>;

pub struct PotionGraph {
    pub graph: GraphType,
    potions: Vec<NodeIndex>,
}

impl PotionGraph {
    pub fn from_kinds(kinds: &[PotionKind]) -> PotionGraph {
        let mut graph = GraphType::new();
        let mut potions = Vec::new();
        for &kind in kinds {
            let node = graph.add_node(Node::Potion(kind));
            potions.push(node);
            // One requirement node per recipe entry, so structurally equal
            // requirements of different potions stay distinct.
            for &requirement in kind.recipe() {
                let n = graph.add_node(Node::Requirement(requirement));
                graph.add_edge(
                    node,
                    n,
                    Edge {
                        quantity: requirement.quantity,
                        item: requirement.kind.label(),
                    },
                );
            }
        }
        PotionGraph { graph, potions }
    }

    pub fn potions(&self) -> &[NodeIndex] {
        &self.potions
    }

    pub fn topo_order(&self) -> Vec<NodeIndex> {
        algo::toposort(&self.graph, None).expect("recipes should be acyclic")
    }

    pub fn requirements(&self, node: NodeIndex) -> impl Iterator<Item = Ingredient> + '_ {
        self.graph.neighbors(node).filter_map(|n| match self.graph[n] {
            Node::Requirement(requirement) => Some(requirement),
            Node::Potion(_) => None,
        })
    }

    pub fn pick(&self, rng: &mut impl Rng) -> (Potion, Vec<Ingredient>) {
        let &node = random::choose(rng, &self.potions);
        match self.graph[node] {
            Node::Potion(kind) => kind.brew(rng),
            Node::Requirement(_) => unreachable!("potion list only holds potion nodes"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Node {
    Potion(PotionKind),
    Requirement(Ingredient),
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Potion(kind) => write!(f, "{kind}"),
            Node::Requirement(requirement) => write!(f, "{requirement}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub quantity: u32,
    pub item: &'static str,
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.item)
    }
}
