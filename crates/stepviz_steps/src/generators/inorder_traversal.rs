//! Iterative in-order traversal of a binary tree given in level order.

use std::collections::VecDeque;

use crate::generators::join;
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Position, Step, StepContext,
    StepType, TreeData, TreeNode,
};

const TREE: &str = "tree";
const STACK: &str = "stack";

/// Builds the tree the usual way: `None` entries are missing children, and
/// children of missing nodes are not listed.
fn build_tree(level_order: &[Option<i64>]) -> TreeData {
    let mut nodes: Vec<TreeNode> = Vec::new();
    let mut values = level_order.iter().copied();
    let Some(Some(root_value)) = values.next() else {
        return TreeData { nodes, root: None };
    };
    nodes.push(TreeNode {
        id: 0,
        value: root_value,
        left: None,
        right: None,
    });

    let mut parents = VecDeque::from([0usize]);
    while let Some(parent) = parents.pop_front() {
        for is_left in [true, false] {
            let Some(entry) = values.next() else {
                return TreeData {
                    nodes,
                    root: Some(0),
                };
            };
            let Some(value) = entry else { continue };
            let id = nodes.len();
            nodes.push(TreeNode {
                id,
                value,
                left: None,
                right: None,
            });
            if is_left {
                nodes[parent].left = Some(id);
            } else {
                nodes[parent].right = Some(id);
            }
            parents.push_back(id);
        }
    }
    TreeData {
        nodes,
        root: Some(0),
    }
}

struct TraversalState {
    tree: TreeData,
    stack: Vec<usize>,
    order: Vec<usize>,
}

impl TraversalState {
    fn value(&self, id: usize) -> i64 {
        self.tree.nodes[id].value
    }

    fn visited_values(&self) -> Vec<i64> {
        self.order.iter().map(|&id| self.value(id)).collect()
    }

    fn record(&self, step: &mut Step, current: Option<usize>) {
        let frames: Vec<String> = self.stack.iter().map(|&id| self.value(id).to_string()).collect();
        step.add_structure(TREE, DataStructure::tree(self.tree.clone(), "Binary Tree"))
            .add_structure(STACK, DataStructure::stack(&frames, "Stack").at(Position::Bottom))
            .add_highlight(
                TREE,
                Highlight::nodes(self.order.iter().copied(), HighlightStyle::Visited),
            )
            .add_highlight(TREE, Highlight::nodes(current, HighlightStyle::Current))
            .set_var("current", &current)
            .set_var("stack", &frames)
            .set_var("visited", &self.visited_values());
    }
}

pub fn inorder_traversal(level_order: &[Option<i64>]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let tree = build_tree(level_order);
    let root = tree.root;
    let mut state = TraversalState {
        tree,
        stack: Vec::new(),
        order: Vec::new(),
    };

    let step = recorder.push(
        StepType::Initialization,
        "Traverse the tree in order: left subtree, node, right subtree.",
    );
    state.record(step, root);

    let mut current = root;
    loop {
        while let Some(id) = current {
            state.stack.push(id);
            current = state.tree.nodes[id].left;
            let step = recorder.push(
                StepType::StackPush,
                format!(
                    "Push {} onto the stack and go to its left child.",
                    state.value(id)
                ),
            );
            state.record(step, Some(id));
            step.add_highlight(
                STACK,
                Highlight::indices([state.stack.len() - 1], HighlightStyle::Active),
            )
            .set_context(StepContext::new(Some(LoopKind::While), Operation::Push, STACK));
        }

        let Some(id) = state.stack.pop() else { break };
        let step = recorder.push(
            StepType::StackPop,
            format!(
                "The left side of {} is done, so pop it.",
                state.value(id)
            ),
        );
        state.record(step, Some(id));
        step.set_context(StepContext::new(Some(LoopKind::While), Operation::Pop, STACK));

        state.order.push(id);
        let step = recorder.push(
            StepType::VisitNode,
            format!(
                "Visit {}. Order so far: {}.",
                state.value(id),
                join(state.visited_values())
            ),
        );
        state.record(step, Some(id));

        current = state.tree.nodes[id].right;
        let explanation = match current {
            Some(right) => format!(
                "Move to the right child of {}: {}.",
                state.value(id),
                state.value(right)
            ),
            None => format!("{} has no right child.", state.value(id)),
        };
        let step = recorder.push(StepType::NodeTraversal, explanation);
        state.record(step, current);
    }

    let visited = state.visited_values();
    let explanation = if visited.is_empty() {
        "The tree is empty, so there is nothing to visit.".to_string()
    } else {
        format!("In-order traversal: {}.", join(&visited))
    };
    let step = recorder.push(StepType::Return, explanation);
    state.record(step, None);
    step.set_var("result", &visited);

    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "inorder-traversal generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::{assert_well_formed, step_types};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![None], vec![])]
    #[case(vec![Some(1)], vec![1])]
    #[case(vec![Some(1), None, Some(2), Some(3)], vec![1, 3, 2])]
    #[case(
        vec![Some(4), Some(2), Some(6), Some(1), Some(3), Some(5), Some(7)],
        vec![1, 2, 3, 4, 5, 6, 7]
    )]
    fn test_inorder(#[case] level_order: Vec<Option<i64>>, #[case] expected: Vec<i64>) {
        let steps = inorder_traversal(&level_order);
        assert_well_formed(&steps);
        assert_eq!(steps.last().unwrap().variable("result"), Some(&json!(expected)));
    }

    #[test]
    fn test_build_tree_skips_missing_children() {
        let tree = build_tree(&[Some(1), None, Some(2), Some(3)]);
        assert_eq!(tree.nodes.len(), 3);
        assert_eq!(tree.nodes[0].left, None);
        assert_eq!(tree.nodes[0].right, Some(1));
        assert_eq!(tree.nodes[1].left, Some(2));
    }

    #[test]
    fn test_single_node_steps() {
        let steps = inorder_traversal(&[Some(9)]);
        assert_eq!(
            step_types(&steps),
            vec![
                StepType::Initialization,
                StepType::StackPush,
                StepType::StackPop,
                StepType::VisitNode,
                StepType::NodeTraversal,
                StepType::Return
            ]
        );
    }
}
