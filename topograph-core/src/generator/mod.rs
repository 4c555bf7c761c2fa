//! Random connected graph synthesis.
//!
//! Each attempt places nodes on the canvas, grows a random spanning tree so
//! every node is reachable from node 0, then greedily densifies up to the
//! degree cap. The result is checked for connectivity before it is returned;
//! attempts that fail are discarded and retried up to
//! [`MAX_GENERATION_ATTEMPTS`] times.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    config::GenerationConfig,
    error::GenerationError,
    graph::{Graph, GraphDraft, Node, NodeId, Position},
};

/// Number of attempts made before [`GraphGenerator::generate`] gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 50;

/// Canvas width nodes are placed on.
pub const CANVAS_WIDTH: u32 = 800;
/// Canvas height nodes are placed on.
pub const CANVAS_HEIGHT: u32 = 600;
/// Margin kept free around the canvas edge.
pub const CANVAS_PADDING: u32 = 50;

// The drawable area is the canvas minus the padding on both sides, sampled
// starting at the padding offset.
const X_RANGE: std::ops::RangeInclusive<u32> = CANVAS_PADDING..=CANVAS_WIDTH - 2 * CANVAS_PADDING;
const Y_RANGE: std::ops::RangeInclusive<u32> = CANVAS_PADDING..=CANVAS_HEIGHT - 2 * CANVAS_PADDING;

/// Builds random connected graphs from a [`GenerationConfig`].
///
/// The random source is injected so tests can seed it; [`GraphGenerator::seeded`]
/// and [`GraphGenerator::from_entropy`] cover the common cases.
///
/// # Examples
/// ```
/// use topograph_core::{GenerationConfig, GraphGenerator};
///
/// let config = GenerationConfig::new(8, 1, 3)?;
/// let mut generator = GraphGenerator::seeded(7);
/// let graph = generator.generate(&config)?;
/// assert_eq!(graph.node_count(), 8);
/// assert!(graph.is_connected());
/// assert!(graph.nodes().iter().all(|node| node.degree() <= 3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator<R = SmallRng> {
    rng: R,
}

impl GraphGenerator<SmallRng> {
    /// Creates a generator whose output is reproducible for `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> GraphGenerator<R> {
    /// Wraps an explicit random source.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Releases the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Produces a connected graph satisfying `config`.
    ///
    /// Every node ends with a degree no greater than
    /// [`GenerationConfig::max_degree`]. The lower bound
    /// [`GenerationConfig::min_degree`] is not enforced.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidConfig`] when `config` fails
    /// validation and [`GenerationError::RetryLimitExceeded`] when no
    /// connected graph was produced within [`MAX_GENERATION_ATTEMPTS`]
    /// attempts, which happens when the degree cap cannot hold a spanning
    /// tree (a cap of 1 with three or more nodes).
    #[instrument(
        name = "core.generate",
        err,
        skip(self, config),
        fields(
            node_count = config.node_count(),
            min_degree = config.min_degree(),
            max_degree = config.max_degree(),
            weighted = config.weighted(),
            attempts = field::Empty,
        ),
    )]
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Graph, GenerationError> {
        config.validate()?;

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            match self.attempt(config) {
                Some(graph) => {
                    Span::current().record("attempts", attempt);
                    info!(
                        edges = graph.edge_count(),
                        total_weight = graph.total_weight(),
                        "generated connected graph"
                    );
                    return Ok(graph);
                }
                None => warn!(attempt, "discarding disconnected graph"),
            }
        }

        Span::current().record("attempts", MAX_GENERATION_ATTEMPTS);
        Err(GenerationError::RetryLimitExceeded {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    fn attempt(&mut self, config: &GenerationConfig) -> Option<Graph> {
        let nodes = self.place_nodes(config.node_count());
        let mut draft = GraphDraft::with_nodes(nodes);

        if !self.grow_spanning_tree(&mut draft, config) {
            debug!("degree cap left a node without an attachment point");
            return None;
        }
        self.densify(&mut draft, config);

        draft.is_connected().then(|| draft.finish())
    }

    fn place_nodes(&mut self, count: usize) -> Vec<Node> {
        (0..count)
            .map(|index| {
                let position = Position {
                    x: self.rng.gen_range(X_RANGE),
                    y: self.rng.gen_range(Y_RANGE),
                };
                Node::new(NodeId::new(index), position)
            })
            .collect()
    }

    /// Attaches each node to a random earlier node that still has spare
    /// degree. Returns `false` when some node had nowhere to attach.
    ///
    /// The parent is drawn only from earlier nodes below `max_degree`, not
    /// from every earlier node, so the tree itself never breaks the cap.
    /// Draws therefore differ from an unrestricted pick over the same seed.
    fn grow_spanning_tree(&mut self, draft: &mut GraphDraft, config: &GenerationConfig) -> bool {
        let cap = config.max_degree();
        for index in 1..draft.node_count() {
            let node = NodeId::new(index);
            let open: Vec<NodeId> = (0..index)
                .map(NodeId::new)
                .filter(|&earlier| draft.degree(earlier) < cap)
                .collect();
            let Some(&parent) = open.choose(&mut self.rng) else {
                return false;
            };
            let weight = self.draw_weight(config);
            draft.link(node, parent, weight);
        }
        true
    }

    /// Adds extra edges node by node until a random candidate is rejected.
    fn densify(&mut self, draft: &mut GraphDraft, config: &GenerationConfig) {
        let cap = config.max_degree();
        let node_count = draft.node_count();
        for index in 0..node_count {
            let source = NodeId::new(index);
            while draft.degree(source) < cap {
                let target = NodeId::new(self.rng.gen_range(0..node_count));
                if target == source || draft.degree(target) >= cap || draft.has_edge(source, target)
                {
                    break;
                }
                let weight = self.draw_weight(config);
                draft.link(source, target, weight);
            }
        }
    }

    fn draw_weight(&mut self, config: &GenerationConfig) -> u32 {
        if config.weighted() {
            self.rng.gen_range(config.weight_range().as_range())
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests;
