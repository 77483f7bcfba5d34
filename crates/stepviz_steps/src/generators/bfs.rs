use std::collections::VecDeque;

use crate::generators::join;
use crate::graph::Graph;
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Edge, Highlight, HighlightStyle, LoopKind, Operation, Position, Step,
    StepContext, StepType,
};

const GRAPH: &str = "graph";
const QUEUE: &str = "queue";
const ORDER: &str = "visitOrder";

struct BfsState {
    queue: VecDeque<usize>,
    discovered: Vec<bool>,
    order: Vec<usize>,
}

impl BfsState {
    fn record(&self, step: &mut Step, graph: &Graph) {
        let queue: Vec<i64> = self.queue.iter().map(|&n| n as i64).collect();
        let order: Vec<i64> = self.order.iter().map(|&n| n as i64).collect();
        step.add_structure(GRAPH, graph.snapshot("Graph"))
            .add_structure(QUEUE, DataStructure::queue(&queue, "Queue").at(Position::Bottom))
            .add_structure(ORDER, DataStructure::array(&order, "Visit Order").at(Position::Bottom))
            .add_highlight(
                GRAPH,
                Highlight::nodes(self.order.iter().copied(), HighlightStyle::Visited),
            )
            .set_var("queue", &self.queue)
            .set_var("visitOrder", &self.order);
    }
}

pub fn bfs(graph: &Graph, start: usize) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let node_count = graph.node_count();
    let mut state = BfsState {
        queue: VecDeque::new(),
        discovered: vec![false; node_count],
        order: Vec::new(),
    };

    let step = recorder.push(
        StepType::Initialization,
        format!("Start a breadth-first search from node {}.", start),
    );
    state.record(step, graph);
    step.set_var("start", &start);

    if start >= node_count {
        let step = recorder.push(
            StepType::Return,
            format!(
                "Node {} does not exist in a graph with {} nodes, so there is nothing to visit.",
                start, node_count
            ),
        );
        state.record(step, graph);
        return finish(recorder);
    }

    state.discovered[start] = true;
    state.queue.push_back(start);
    let step = recorder.push(
        StepType::Enqueue,
        format!("Enqueue node {} and mark it as discovered.", start),
    );
    state.record(step, graph);
    step.add_highlight(GRAPH, Highlight::nodes([start], HighlightStyle::Active))
        .set_context(StepContext::new(None, Operation::Push, QUEUE));

    while let Some(current) = state.queue.pop_front() {
        let step = recorder.push(
            StepType::Dequeue,
            format!("Dequeue node {} from the front of the queue.", current),
        );
        state.record(step, graph);
        step.add_highlight(GRAPH, Highlight::nodes([current], HighlightStyle::Current))
            .set_var("current", &current)
            .set_context(StepContext::new(Some(LoopKind::While), Operation::Pop, QUEUE));

        state.order.push(current);
        let step = recorder.push(
            StepType::VisitNode,
            format!(
                "Visit node {}. Visit order so far: {}.",
                current,
                join(&state.order)
            ),
        );
        state.record(step, graph);
        step.add_highlight(GRAPH, Highlight::nodes([current], HighlightStyle::Current))
            .set_var("current", &current);

        for &neighbor in graph.neighbors(current) {
            if state.discovered[neighbor] {
                continue;
            }
            state.discovered[neighbor] = true;
            state.queue.push_back(neighbor);
            let step = recorder.push(
                StepType::Enqueue,
                format!(
                    "Node {} is an undiscovered neighbor of {}, so enqueue it.",
                    neighbor, current
                ),
            );
            state.record(step, graph);
            step.add_highlight(GRAPH, Highlight::nodes([current], HighlightStyle::Current))
                .add_highlight(GRAPH, Highlight::nodes([neighbor], HighlightStyle::Active))
                .add_highlight(
                    GRAPH,
                    Highlight::links(
                        [Edge {
                            from: current,
                            to: neighbor,
                        }],
                        HighlightStyle::Highlight,
                    ),
                )
                .set_var("current", &current)
                .set_var("neighbor", &neighbor)
                .set_context(StepContext::new(Some(LoopKind::For), Operation::Push, QUEUE));
        }
    }

    let step = recorder.push(
        StepType::Return,
        format!(
            "The queue is empty. Breadth-first order: {}.",
            join(&state.order)
        ),
    );
    state.record(step, graph);
    step.set_var("result", &state.order);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "bfs generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::{assert_well_formed, step_types};
    use serde_json::json;

    fn sample() -> Graph {
        // 0 - 1 - 3
        // |   |
        // 2 --+   4 (isolated)
        Graph::undirected(5, &[(0, 1), (0, 2), (1, 2), (1, 3)]).unwrap()
    }

    #[test]
    fn test_visit_order() {
        let steps = bfs(&sample(), 0);
        assert_well_formed(&steps);
        assert_eq!(
            steps.last().unwrap().variable("result"),
            Some(&json!([0, 1, 2, 3]))
        );
    }

    #[test]
    fn test_each_reachable_node_enqueued_once() {
        let steps = bfs(&sample(), 0);
        let enqueues = steps
            .iter()
            .filter(|s| s.step_type == StepType::Enqueue)
            .count();
        assert_eq!(enqueues, 4);
    }

    #[test]
    fn test_directed_edges_are_followed_one_way() {
        let graph = Graph::directed(3, &[(1, 0), (1, 2)]).unwrap();
        let steps = bfs(&graph, 0);
        assert_eq!(steps.last().unwrap().variable("result"), Some(&json!([0])));
    }

    #[test]
    fn test_start_out_of_range() {
        let steps = bfs(&sample(), 9);
        assert_well_formed(&steps);
        assert_eq!(
            step_types(&steps),
            vec![StepType::Initialization, StepType::Return]
        );
    }
}
