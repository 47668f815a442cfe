//! Demo driver shared by the `knn-search` binary: build one seeded
//! k-nearest-neighbor graph and run a set of strategies on a single
//! root/target pair.

use geosearch_core::{Graph, GraphBuilder, GraphConfig, GraphError};
use geosearch_paths::{PathSearch, SearchConfig, SearchError, SearchStatus, Strategy, path_cost};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::Serialize;
use thiserror::Error;

/// Everything a demo run needs.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub graph: GraphConfig,
    pub search: SearchConfig,
    pub seed: u64,
    /// Random when `None`.
    pub root: Option<usize>,
    /// Random (and distinct from the root when possible) when `None`.
    pub target: Option<usize>,
    pub strategies: Vec<Strategy>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            search: SearchConfig::default(),
            seed: 42,
            root: None,
            target: None,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// One strategy's result.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub status: SearchStatus,
    pub path: Vec<usize>,
    pub cost: f64,
    pub expanded: usize,
}

/// The graph and query a demo ran, with one report per strategy.
#[derive(Debug, Serialize)]
pub struct Demo {
    pub seed: u64,
    pub graph: GraphConfig,
    pub edges: usize,
    pub root: usize,
    pub target: usize,
    pub reports: Vec<Report>,
}

/// Build the graph and run every configured strategy.
pub fn run(config: &DemoConfig) -> Result<Demo, DemoError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let graph = GraphBuilder::new(config.graph).build(&mut rng)?;
    log::info!(
        "graph: {} nodes, {} edges (k = {}, seed = {})",
        graph.len(),
        graph.edge_count(),
        config.graph.neighbors_per_node,
        config.seed
    );

    let (root, target) = pick_pair(&graph, config, &mut rng);
    let search = PathSearch::new(&graph).with_config(config.search);
    let reports = config
        .strategies
        .iter()
        .map(|&strategy| -> Result<Report, SearchError> {
            let out = search.run(strategy, root, target)?;
            Ok(Report {
                strategy,
                status: out.status,
                cost: path_cost(&graph, &out.path),
                path: out.path,
                expanded: out.expanded,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Demo {
        seed: config.seed,
        graph: config.graph,
        edges: graph.edge_count(),
        root,
        target,
        reports,
    })
}

fn pick_pair(graph: &Graph, config: &DemoConfig, rng: &mut StdRng) -> (usize, usize) {
    let n = graph.len();
    let root = config.root.unwrap_or_else(|| rng.random_range(0..n));
    let target = config.target.unwrap_or_else(|| {
        if n == 1 {
            return root;
        }
        loop {
            let t = rng.random_range(0..n);
            if t != root {
                break t;
            }
        }
    });
    (root, target)
}

impl Demo {
    /// Human-readable table of the reports.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} nodes, k = {}, {} edges, seed {}: {} -> {}\n\n",
            self.graph.node_count,
            self.graph.neighbors_per_node,
            self.edges,
            self.seed,
            self.root,
            self.target
        );
        out.push_str(&format!(
            "{:<14} {:>10} {:>6} {:>10}  path\n",
            "strategy", "status", "hops", "distance"
        ));
        for r in &self.reports {
            let hops = r.path.len().saturating_sub(1);
            out.push_str(&format!(
                "{:<14} {:>10} {:>6} {:>10.3}  {}\n",
                r.strategy.name(),
                format!("{:?}", r.status),
                hops,
                r.cost,
                render_path(&r.path)
            ));
        }
        out
    }
}

fn render_path(path: &[usize]) -> String {
    const SHOWN: usize = 12;
    if path.is_empty() {
        return "-".to_string();
    }
    let ids: Vec<String> = path.iter().map(usize::to_string).collect();
    if ids.len() <= SHOWN {
        ids.join(" ")
    } else {
        format!(
            "{} ... {}",
            ids[..SHOWN / 2].join(" "),
            ids[ids.len() - SHOWN / 2..].join(" ")
        )
    }
}
