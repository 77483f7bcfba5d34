//! Cycle detection with an iterative depth-first search.
//!
//! Nodes are coloured unvisited / in progress / finished. In a directed graph
//! an edge into an in-progress node closes a cycle. In an undirected graph
//! the edge back to the DFS parent is skipped, every other edge into an
//! in-progress node closes a cycle.

use crate::graph::Graph;
use crate::recorder::StepRecorder;
use crate::step::{
    Edge, Highlight, HighlightStyle, LoopKind, Operation, Step, StepContext, StepType,
};

const GRAPH: &str = "graph";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Finished,
}

impl Color {
    fn describe(self) -> &'static str {
        match self {
            Color::Unvisited => "unvisited",
            Color::InProgress => "in progress",
            Color::Finished => "finished",
        }
    }
}

struct Frame {
    node: usize,
    parent: Option<usize>,
    next_neighbor: usize,
}

struct DfsState {
    colors: Vec<Color>,
    stack: Vec<Frame>,
}

impl DfsState {
    fn nodes_with(&self, color: Color) -> Vec<usize> {
        self.colors
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == color)
            .map(|(node, _)| node)
            .collect()
    }

    fn path(&self) -> Vec<usize> {
        self.stack.iter().map(|f| f.node).collect()
    }

    fn record(&self, step: &mut Step, graph: &Graph) {
        step.add_structure(GRAPH, graph.snapshot("Graph"))
            .add_highlight(
                GRAPH,
                Highlight::nodes(self.nodes_with(Color::Finished), HighlightStyle::Visited),
            )
            .add_highlight(
                GRAPH,
                Highlight::nodes(self.nodes_with(Color::InProgress), HighlightStyle::Active),
            )
            .set_var("path", &self.path());
    }
}

pub fn detect_cycle(graph: &Graph) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let node_count = graph.node_count();
    let mut state = DfsState {
        colors: vec![Color::Unvisited; node_count],
        stack: Vec::new(),
    };

    let kind = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    let step = recorder.push(
        StepType::Initialization,
        format!(
            "Look for a cycle in a {} graph with {} nodes using depth-first search.",
            kind, node_count
        ),
    );
    state.record(step, graph);

    for root in 0..node_count {
        if state.colors[root] != Color::Unvisited {
            continue;
        }
        state.colors[root] = Color::InProgress;
        state.stack.push(Frame {
            node: root,
            parent: None,
            next_neighbor: 0,
        });
        let step = recorder.push(
            StepType::VisitNode,
            format!("Start a search at node {} and mark it in progress.", root),
        );
        state.record(step, graph);
        step.add_highlight(GRAPH, Highlight::nodes([root], HighlightStyle::Current))
            .set_var("current", &root);

        while let Some(frame) = state.stack.last_mut() {
            let node = frame.node;
            let parent = frame.parent;
            let neighbors = graph.neighbors(node);

            let Some(&neighbor) = neighbors.get(frame.next_neighbor) else {
                state.stack.pop();
                state.colors[node] = Color::Finished;
                let step = recorder.push(
                    StepType::Assignment,
                    format!("Every edge of node {} is explored; mark it finished.", node),
                );
                state.record(step, graph);
                step.set_var("current", &node)
                    .set_context(
                        StepContext::new(Some(LoopKind::Recursion), Operation::Pop, GRAPH).at(node),
                    );
                continue;
            };
            frame.next_neighbor += 1;

            if !graph.is_directed() && Some(neighbor) == parent {
                continue;
            }

            let edge = Edge {
                from: node,
                to: neighbor,
            };
            let color = state.colors[neighbor];
            let step = recorder.push(
                StepType::Comparison,
                format!(
                    "Check edge {} -> {}: node {} is {}.",
                    node,
                    neighbor,
                    neighbor,
                    color.describe()
                ),
            );
            state.record(step, graph);
            step.add_highlight(GRAPH, Highlight::nodes([node], HighlightStyle::Current))
                .add_highlight(GRAPH, Highlight::links([edge], HighlightStyle::Compare))
                .set_var("current", &node)
                .set_var("neighbor", &neighbor)
                .set_context(
                    StepContext::new(Some(LoopKind::For), Operation::Compare, GRAPH).at(node),
                );

            match color {
                Color::InProgress => {
                    let path = state.path();
                    let start = path.iter().position(|&n| n == neighbor).unwrap_or(0);
                    let mut cycle = path[start..].to_vec();
                    cycle.push(neighbor);
                    let cycle_text = cycle
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(" -> ");

                    let step = recorder.push(
                        StepType::GraphCycleDetected,
                        format!(
                            "Node {} is still on the current path, so edge {} -> {} closes a cycle.",
                            neighbor, node, neighbor
                        ),
                    );
                    state.record(step, graph);
                    step.add_highlight(
                        GRAPH,
                        Highlight::nodes(cycle.iter().copied(), HighlightStyle::Match),
                    )
                    .add_highlight(GRAPH, Highlight::links([edge], HighlightStyle::Match))
                    .set_var("cycle", &cycle);

                    let step = recorder.push(
                        StepType::Return,
                        format!("The graph contains a cycle: {}.", cycle_text),
                    );
                    state.record(step, graph);
                    step.add_highlight(
                        GRAPH,
                        Highlight::nodes(cycle.iter().copied(), HighlightStyle::Match),
                    )
                    .set_var("hasCycle", &true)
                    .set_var("cycle", &cycle);
                    return finish(recorder);
                }
                Color::Unvisited => {
                    state.colors[neighbor] = Color::InProgress;
                    state.stack.push(Frame {
                        node: neighbor,
                        parent: Some(node),
                        next_neighbor: 0,
                    });
                    let step = recorder.push(
                        StepType::VisitNode,
                        format!("Move to node {} and mark it in progress.", neighbor),
                    );
                    state.record(step, graph);
                    step.add_highlight(GRAPH, Highlight::nodes([neighbor], HighlightStyle::Current))
                        .set_var("current", &neighbor);
                }
                Color::Finished => {}
            }
        }
    }

    let step = recorder.push(
        StepType::Return,
        "Every node is finished and no edge closed a cycle, so the graph is acyclic.",
    );
    state.record(step, graph);
    step.set_var("hasCycle", &false);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "cycle-detection generated");
    steps
}
