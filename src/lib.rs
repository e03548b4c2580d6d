use data::PotionKind;
use graph::PotionGraph;

pub mod allocate;
pub mod compute;
pub mod data;
pub mod graph;
pub mod inventory;
pub mod random;

pub fn standard_graph() -> PotionGraph {
    PotionGraph::from_kinds(&PotionKind::ALL)
}
