use rstest::rstest;
use serde_json::json;
use stepviz_steps::step::StructureData;
use stepviz_steps::{
    EngineConfig, GenerateRequest, Graph, HighlightStyle, HighlightTarget, Step, StepType,
    binary_search, generate, linear_search, reverse_linked_list, two_sum, validate_trace,
};

fn request(name: &str) -> GenerateRequest {
    match name {
        "reverse-linked-list" => GenerateRequest::ReverseLinkedList {
            values: vec![1, 2, 3, 4, 5],
        },
        "binary-search" => GenerateRequest::BinarySearch {
            array: vec![45, 2, 23, 8],
            target: 8,
        },
        "linear-search" => GenerateRequest::LinearSearch {
            array: vec![4, 7, 1],
            target: 3,
        },
        "two-sum" => GenerateRequest::TwoSum {
            array: vec![11, 2, 7, 15],
            target: 9,
        },
        "bubble-sort" => GenerateRequest::BubbleSort {
            array: vec![5, 1, 4, 2, 8],
        },
        "bfs" => GenerateRequest::Bfs {
            graph: Graph::undirected(5, &[(0, 1), (0, 2), (1, 3), (2, 4)]).unwrap(),
            start: 0,
        },
        "cycle-detection" => GenerateRequest::CycleDetection {
            graph: Graph::directed(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap(),
        },
        "k-largest-elements" => GenerateRequest::KLargestElements {
            array: vec![3, 2, 1, 5, 6, 4],
            k: 2,
        },
        "coin-change" => GenerateRequest::CoinChange {
            coins: vec![1, 2, 5],
            amount: 11,
        },
        "min-cost-array" => GenerateRequest::MinCostArray {
            costs: vec![10, 15, 20],
        },
        "anagram-detection" => GenerateRequest::AnagramDetection {
            first: "listen".to_string(),
            second: "silent".to_string(),
        },
        "balanced-parentheses" => GenerateRequest::BalancedParentheses {
            text: "{[()]}".to_string(),
        },
        "factorial" => GenerateRequest::Factorial { n: 5 },
        "inorder-traversal" => GenerateRequest::InorderTraversal {
            level_order: vec![Some(4), Some(2), Some(6), Some(1), Some(3)],
        },
        other => panic!("no sample request for {other}"),
    }
}

fn empty_request(name: &str) -> GenerateRequest {
    match name {
        "reverse-linked-list" => GenerateRequest::ReverseLinkedList { values: vec![] },
        "binary-search" => GenerateRequest::BinarySearch {
            array: vec![],
            target: 1,
        },
        "linear-search" => GenerateRequest::LinearSearch {
            array: vec![],
            target: 1,
        },
        "two-sum" => GenerateRequest::TwoSum {
            array: vec![],
            target: 1,
        },
        "bubble-sort" => GenerateRequest::BubbleSort { array: vec![] },
        "bfs" => GenerateRequest::Bfs {
            graph: Graph::undirected(1, &[]).unwrap(),
            start: 0,
        },
        "cycle-detection" => GenerateRequest::CycleDetection {
            graph: Graph::directed(0, &[]).unwrap(),
        },
        "k-largest-elements" => GenerateRequest::KLargestElements {
            array: vec![],
            k: 0,
        },
        "coin-change" => GenerateRequest::CoinChange {
            coins: vec![],
            amount: 0,
        },
        "min-cost-array" => GenerateRequest::MinCostArray { costs: vec![] },
        "anagram-detection" => GenerateRequest::AnagramDetection {
            first: String::new(),
            second: String::new(),
        },
        "balanced-parentheses" => GenerateRequest::BalancedParentheses {
            text: String::new(),
        },
        "factorial" => GenerateRequest::Factorial { n: 0 },
        "inorder-traversal" => GenerateRequest::InorderTraversal {
            level_order: vec![],
        },
        other => panic!("no empty request for {other}"),
    }
}

fn assert_filmstrip(steps: &[Step]) {
    assert!(!steps.is_empty());
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.id, i);
    }
    let terminals = steps.iter().filter(|s| s.is_terminal()).count();
    assert_eq!(terminals, 1);
    assert!(steps.last().unwrap().is_terminal());
    assert_eq!(validate_trace(steps), Ok(()));
}

#[rstest]
fn test_every_algorithm_produces_a_filmstrip(
    #[values(
        "reverse-linked-list",
        "binary-search",
        "linear-search",
        "two-sum",
        "bubble-sort",
        "bfs",
        "cycle-detection",
        "k-largest-elements",
        "coin-change",
        "min-cost-array",
        "anagram-detection",
        "balanced-parentheses",
        "factorial",
        "inorder-traversal"
    )]
    name: &str,
    #[values(true, false)] empty: bool,
) {
    let request = if empty {
        empty_request(name)
    } else {
        request(name)
    };
    assert_eq!(request.algorithm().id(), name);
    let steps = generate(&request, &EngineConfig::default()).unwrap();
    assert_filmstrip(&steps);
}

#[test]
fn test_binary_search_finds_23() {
    let steps = binary_search(&[2, 5, 8, 12, 16, 23, 38, 45], 23);
    let last = steps.last().unwrap();
    assert_eq!(last.step_type, StepType::ReturnFound);
    assert_eq!(last.variable("result"), Some(&json!(5)));
    let Some(StructureData::Array(array)) = last.structure("searchArray").map(|s| &s.data) else {
        panic!("searchArray missing from terminal step");
    };
    assert_eq!(array[5], 23);
}

#[test]
fn test_binary_search_misses_99() {
    let steps = binary_search(&[2, 5, 8, 12, 16, 23, 38, 45], 99);
    assert_eq!(steps.last().unwrap().step_type, StepType::ReturnNotFound);
}

#[test]
fn test_two_sum_reports_original_values() {
    let steps = two_sum(&[2, 3, 6, 7, 8, 11, 15, 17], 9);
    let last = steps.last().unwrap();
    assert_eq!(last.variable("found"), Some(&json!(true)));
    let values: Vec<i64> =
        serde_json::from_value(last.variable("values").unwrap().clone()).unwrap();
    assert_eq!(values.iter().sum::<i64>(), 9);
    assert_eq!(values, vec![2, 7]);
}

#[test]
fn test_two_sum_indices_refer_to_sorted_copy() {
    let steps = two_sum(&[7, 15, 2, 11], 9);
    let last = steps.last().unwrap();
    // sorted working copy is [2, 7, 11, 15]
    assert_eq!(last.variable("result"), Some(&json!([0, 1])));
}

#[test]
fn test_reversing_twice_restores_the_list() {
    let reversed_values = |values: &[i64]| -> Vec<i64> {
        let steps = reverse_linked_list(values);
        serde_json::from_value(steps.last().unwrap().variable("reversedValues").unwrap().clone())
            .unwrap()
    };
    let once = reversed_values(&[1, 2, 3, 4, 5]);
    assert_eq!(once, vec![5, 4, 3, 2, 1]);
    assert_eq!(reversed_values(&once), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_linear_search_is_exhaustive_when_missing() {
    let array = [4, 7, 1, 9];
    let steps = linear_search(&array, 3);
    let last = steps.last().unwrap();
    assert_eq!(last.step_type, StepType::ReturnNotFound);
    assert_eq!(last.variable("currentIndex"), Some(&json!(array.len())));

    let mut visited = vec![false; array.len()];
    for step in &steps {
        for highlight in step.highlights.get("searchArray").into_iter().flatten() {
            if highlight.style != HighlightStyle::Visited {
                continue;
            }
            if let HighlightTarget::Indices(ids) = &highlight.target {
                for &i in ids {
                    visited[i] = true;
                }
            }
        }
    }
    assert!(visited.iter().all(|&v| v));
}

#[test]
fn test_steps_do_not_alias_the_input() {
    let mut values = vec![3, 1, 2];
    let steps = linear_search(&values, 2);
    let before = steps.clone();
    values[0] = 100;
    values.push(7);
    assert_eq!(steps, before);
    let Some(StructureData::Array(first)) = steps[0].structure("searchArray").map(|s| &s.data)
    else {
        panic!("searchArray missing from first step");
    };
    assert_eq!(first, &vec![3, 1, 2]);
}

#[test]
fn test_steps_are_independent_snapshots() {
    let mut steps = reverse_linked_list(&[1, 2, 3]);
    let second = steps[1].clone();
    steps[0].data_structures.clear();
    steps[0].variables.clear();
    assert_eq!(steps[1], second);
    assert!(steps[1].structure("linkedList").is_some());
}

#[test]
fn test_trace_survives_json() {
    let steps = generate(&request("bfs"), &EngineConfig::default()).unwrap();
    let text = serde_json::to_string(&steps).unwrap();
    let parsed: Vec<Step> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, steps);
}
