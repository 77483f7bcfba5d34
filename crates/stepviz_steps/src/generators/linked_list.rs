//! In-place reversal of a singly linked list with three pointers
//! (`prev`, `current`, `next`).

use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Edge, Highlight, HighlightStyle, LinkedListData, ListNode, LoopKind, Operation,
    Reversing, Step, StepContext, StepType,
};

const LIST: &str = "linkedList";

struct ReversalState {
    nodes: Vec<ListNode>,
    head: Option<usize>,
    prev: Option<usize>,
    current: Option<usize>,
    next: Option<usize>,
    reversed_links: Vec<usize>,
}

impl ReversalState {
    fn new(values: &[i64]) -> Self {
        let nodes: Vec<ListNode> = values
            .iter()
            .enumerate()
            .map(|(id, &value)| ListNode {
                id,
                value,
                next: (id + 1 < values.len()).then_some(id + 1),
            })
            .collect();
        let head = (!nodes.is_empty()).then_some(0);
        Self {
            nodes,
            head,
            prev: None,
            current: None,
            next: None,
            reversed_links: Vec::new(),
        }
    }

    fn snapshot(&self, reversing: Option<Reversing>) -> DataStructure {
        DataStructure::linked_list(
            LinkedListData {
                nodes: self.nodes.clone(),
                head: self.head,
                reversed_links: self.reversed_links.clone(),
                reversing,
            },
            "Linked List",
        )
    }

    fn describe(&self, node: Option<usize>) -> String {
        match node {
            Some(id) => self.nodes[id].value.to_string(),
            None => "null".to_string(),
        }
    }

    /// Values reachable from `head`, bounded by the node count so a broken
    /// table can never loop forever.
    fn values_from_head(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if values.len() == self.nodes.len() {
                break;
            }
            values.push(self.nodes[id].value);
            cursor = self.nodes[id].next;
        }
        values
    }

    fn record_pointers(&self, step: &mut Step) {
        step.set_var("prev", &self.prev)
            .set_var("current", &self.current)
            .set_var("next", &self.next);
    }
}

fn chain(values: &[i64]) -> String {
    if values.is_empty() {
        return "null".to_string();
    }
    let mut text = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    text.push_str(" -> null");
    text
}

pub fn reverse_linked_list(values: &[i64]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut state = ReversalState::new(values);

    let explanation = if values.is_empty() {
        "Start with an empty linked list.".to_string()
    } else {
        format!("Start with the linked list {}.", chain(values))
    };
    recorder
        .push(StepType::Initialization, explanation)
        .add_structure(LIST, state.snapshot(None))
        .set_var("values", values)
        .set_var("length", &values.len());

    state.current = state.head;
    let step = recorder.push(
        StepType::PointerInitialization,
        format!(
            "Initialize prev = null, current = head ({}), next = null.",
            state.describe(state.current)
        ),
    );
    step.add_structure(LIST, state.snapshot(None));
    if let Some(current) = state.current {
        step.add_highlight(LIST, Highlight::nodes([current], HighlightStyle::Current));
    }
    state.record_pointers(step);

    while let Some(current) = state.current {
        state.next = state.nodes[current].next;
        let explanation = match state.next {
            Some(_) => format!(
                "Save next = {} before changing the link of node {}.",
                state.describe(state.next),
                state.describe(Some(current))
            ),
            None => format!(
                "Save next = null: node {} is the last node.",
                state.describe(Some(current))
            ),
        };
        let step = recorder.push(StepType::PointerUpdate, explanation);
        step.add_structure(LIST, state.snapshot(None))
            .add_highlight(LIST, Highlight::nodes([current], HighlightStyle::Current))
            .add_highlight(LIST, Highlight::nodes(state.next, HighlightStyle::Compare))
            .set_context(
                StepContext::new(Some(LoopKind::While), Operation::Read, LIST).at(current),
            );
        state.record_pointers(step);

        state.nodes[current].next = state.prev;
        state.reversed_links.push(current);
        let reversing = Reversing {
            from: current,
            to: state.prev,
            original_next: state.next,
        };
        let step = recorder.push(
            StepType::LinkReversal,
            format!(
                "Reverse the link of node {} so it points to {} instead of {}.",
                state.describe(Some(current)),
                state.describe(state.prev),
                state.describe(state.next)
            ),
        );
        step.add_structure(LIST, state.snapshot(Some(reversing)))
            .add_highlight(LIST, Highlight::nodes([current], HighlightStyle::Active))
            .add_highlight(
                LIST,
                Highlight::links(
                    state.prev.map(|to| Edge { from: current, to }),
                    HighlightStyle::Highlight,
                ),
            )
            .set_context(
                StepContext::new(Some(LoopKind::While), Operation::Link, LIST).at(current),
            );
        state.record_pointers(step);

        state.prev = Some(current);
        state.current = state.next;
        let step = recorder.push(
            StepType::NodeTraversal,
            format!(
                "Move prev to node {} and current to {}.",
                state.describe(state.prev),
                match state.current {
                    Some(_) => format!("node {}", state.describe(state.current)),
                    None => "null".to_string(),
                }
            ),
        );
        step.add_structure(LIST, state.snapshot(None))
            .add_highlight(LIST, Highlight::nodes(state.prev, HighlightStyle::Visited))
            .add_highlight(LIST, Highlight::nodes(state.current, HighlightStyle::Current));
        state.record_pointers(step);
    }

    state.head = state.prev;
    let reversed = state.values_from_head();
    let explanation = match state.head {
        Some(_) => format!(
            "The list is reversed: {}. The new head is {}.",
            chain(&reversed),
            state.describe(state.head)
        ),
        None => "The list is empty, so there is nothing to reverse.".to_string(),
    };
    let step = recorder.push(StepType::Return, explanation);
    step.add_structure(LIST, state.snapshot(None))
        .add_highlight(
            LIST,
            Highlight::nodes(0..state.nodes.len(), HighlightStyle::Match),
        )
        .set_var("head", &state.head)
        .set_var("reversedValues", &reversed);
    state.record_pointers(step);

    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "reverse-linked-list generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::{assert_well_formed, explanations, step_types};
    use crate::step::StructureData;
    use rstest::rstest;

    fn reversed_values(steps: &[Step]) -> Vec<i64> {
        let last = steps.last().expect("non-empty");
        serde_json::from_value(last.variable("reversedValues").cloned().unwrap()).unwrap()
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![7])]
    #[case(vec![1, 2], vec![2, 1])]
    #[case(vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1])]
    fn test_reverses_values(#[case] input: Vec<i64>, #[case] expected: Vec<i64>) {
        let steps = reverse_linked_list(&input);
        assert_well_formed(&steps);
        assert_eq!(reversed_values(&steps), expected);
        // init + pointer init + three per node + return
        assert_eq!(steps.len(), 3 + 3 * input.len());
    }

    #[test]
    fn test_reversing_twice_restores_order() {
        let once = reversed_values(&reverse_linked_list(&[1, 2, 3, 4, 5]));
        let twice = reversed_values(&reverse_linked_list(&once));
        assert_eq!(twice, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_list_has_no_loop_steps() {
        let steps = reverse_linked_list(&[]);
        assert_eq!(
            step_types(&steps),
            vec![
                StepType::Initialization,
                StepType::PointerInitialization,
                StepType::Return
            ]
        );
    }

    #[test]
    fn test_single_node_becomes_head() {
        let steps = reverse_linked_list(&[42]);
        let last = steps.last().unwrap();
        assert_eq!(last.variable("head"), Some(&serde_json::json!(0)));
        assert_eq!(
            step_types(&steps[2..5]),
            vec![
                StepType::PointerUpdate,
                StepType::LinkReversal,
                StepType::NodeTraversal
            ]
        );
    }

    #[test]
    fn test_link_reversal_carries_reversing_annotation() {
        let steps = reverse_linked_list(&[1, 2, 3]);
        let reversal = steps
            .iter()
            .filter(|s| s.step_type == StepType::LinkReversal)
            .nth(1)
            .unwrap();
        let StructureData::LinkedList(list) = &reversal.structure(LIST).unwrap().data else {
            panic!("expected a linked list payload");
        };
        assert_eq!(
            list.reversing,
            Some(Reversing {
                from: 1,
                to: Some(0),
                original_next: Some(2)
            })
        );
        assert_eq!(list.reversed_links, vec![0, 1]);
        assert_eq!(list.nodes[1].next, Some(0));
    }

    #[test]
    fn test_earlier_snapshots_keep_original_links() {
        let steps = reverse_linked_list(&[1, 2, 3]);
        let StructureData::LinkedList(first) = &steps[0].structure(LIST).unwrap().data else {
            panic!("expected a linked list payload");
        };
        assert_eq!(first.nodes[0].next, Some(1));
        assert!(first.reversed_links.is_empty());
    }

    #[test]
    fn test_explanations() {
        let steps = reverse_linked_list(&[1, 2]);
        insta::assert_snapshot!(explanations(&steps), @r"
        Start with the linked list 1 -> 2 -> null.
        Initialize prev = null, current = head (1), next = null.
        Save next = 2 before changing the link of node 1.
        Reverse the link of node 1 so it points to null instead of 2.
        Move prev to node 1 and current to node 2.
        Save next = null: node 2 is the last node.
        Reverse the link of node 2 so it points to 1 instead of null.
        Move prev to node 2 and current to null.
        The list is reversed: 2 -> 1 -> null. The new head is 2.
        ");
    }
}
