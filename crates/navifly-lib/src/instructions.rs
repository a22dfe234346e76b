//! Turn a node sequence into driving directions.

use serde::Serialize;

use crate::geo::haversine_km;
use crate::graph::Graph;

/// One leg of the driving directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    pub text: String,
    /// Straight-line distance of the leg in kilometres.
    pub distance: f64,
}

/// Build one instruction per consecutive pair of nodes in `path`.
///
/// The distance reported for each leg is the great-circle distance between
/// its endpoints, not the weight of the road that was searched. Paths with
/// fewer than two nodes yield no instructions; pairs referencing nodes that
/// are missing from `graph` are skipped.
pub fn build_instructions<S: AsRef<str>>(path: &[S], graph: &Graph) -> Vec<Instruction> {
    if path.len() < 2 {
        return Vec::new();
    }

    let last_leg = path.len() - 2;
    path.windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let from = graph.node(pair[0].as_ref())?;
            let to = graph.node(pair[1].as_ref())?;
            let distance = haversine_km(from.coordinate(), to.coordinate());

            let text = if index == 0 {
                format!("Start journey. Drive {:.1} km", distance)
            } else if index == last_leg {
                format!("Turn towards destination. Drive {:.1} km", distance)
            } else {
                format!("Continue for {:.1} km", distance)
            };

            Some(Instruction { text, distance })
        })
        .collect()
}
