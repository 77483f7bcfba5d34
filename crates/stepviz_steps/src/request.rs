use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::InputError;
use crate::generators::{
    anagram, balanced_parentheses, bfs, binary_search, bubble_sort, coin_change, cycle_detection,
    factorial, inorder_traversal, k_largest, linear_search, linked_list, min_cost, two_sum,
};
use crate::graph::Graph;
use crate::step::Step;
use crate::validate::validate_trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    ReverseLinkedList,
    BinarySearch,
    LinearSearch,
    TwoSum,
    BubbleSort,
    Bfs,
    CycleDetection,
    KLargestElements,
    CoinChange,
    MinCostArray,
    AnagramDetection,
    BalancedParentheses,
    Factorial,
    InorderTraversal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 14] = [
        Algorithm::ReverseLinkedList,
        Algorithm::BinarySearch,
        Algorithm::LinearSearch,
        Algorithm::TwoSum,
        Algorithm::BubbleSort,
        Algorithm::Bfs,
        Algorithm::CycleDetection,
        Algorithm::KLargestElements,
        Algorithm::CoinChange,
        Algorithm::MinCostArray,
        Algorithm::AnagramDetection,
        Algorithm::BalancedParentheses,
        Algorithm::Factorial,
        Algorithm::InorderTraversal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Algorithm::ReverseLinkedList => "reverse-linked-list",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::LinearSearch => "linear-search",
            Algorithm::TwoSum => "two-sum",
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::Bfs => "bfs",
            Algorithm::CycleDetection => "cycle-detection",
            Algorithm::KLargestElements => "k-largest-elements",
            Algorithm::CoinChange => "coin-change",
            Algorithm::MinCostArray => "min-cost-array",
            Algorithm::AnagramDetection => "anagram-detection",
            Algorithm::BalancedParentheses => "balanced-parentheses",
            Algorithm::Factorial => "factorial",
            Algorithm::InorderTraversal => "inorder-traversal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| InputError::UnknownAlgorithm(s.to_string()))
    }
}

/// One algorithm together with its natural input.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateRequest {
    ReverseLinkedList { values: Vec<i64> },
    BinarySearch { array: Vec<i64>, target: i64 },
    LinearSearch { array: Vec<i64>, target: i64 },
    TwoSum { array: Vec<i64>, target: i64 },
    BubbleSort { array: Vec<i64> },
    Bfs { graph: Graph, start: usize },
    CycleDetection { graph: Graph },
    KLargestElements { array: Vec<i64>, k: usize },
    CoinChange { coins: Vec<u32>, amount: u32 },
    MinCostArray { costs: Vec<i64> },
    AnagramDetection { first: String, second: String },
    BalancedParentheses { text: String },
    Factorial { n: u32 },
    InorderTraversal { level_order: Vec<Option<i64>> },
}

impl GenerateRequest {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            GenerateRequest::ReverseLinkedList { .. } => Algorithm::ReverseLinkedList,
            GenerateRequest::BinarySearch { .. } => Algorithm::BinarySearch,
            GenerateRequest::LinearSearch { .. } => Algorithm::LinearSearch,
            GenerateRequest::TwoSum { .. } => Algorithm::TwoSum,
            GenerateRequest::BubbleSort { .. } => Algorithm::BubbleSort,
            GenerateRequest::Bfs { .. } => Algorithm::Bfs,
            GenerateRequest::CycleDetection { .. } => Algorithm::CycleDetection,
            GenerateRequest::KLargestElements { .. } => Algorithm::KLargestElements,
            GenerateRequest::CoinChange { .. } => Algorithm::CoinChange,
            GenerateRequest::MinCostArray { .. } => Algorithm::MinCostArray,
            GenerateRequest::AnagramDetection { .. } => Algorithm::AnagramDetection,
            GenerateRequest::BalancedParentheses { .. } => Algorithm::BalancedParentheses,
            GenerateRequest::Factorial { .. } => Algorithm::Factorial,
            GenerateRequest::InorderTraversal { .. } => Algorithm::InorderTraversal,
        }
    }

    /// Applies the input limits a front-end would enforce before calling a
    /// generator.
    pub fn validate(&self, config: &EngineConfig) -> Result<(), InputError> {
        config.validate()?;
        match self {
            GenerateRequest::ReverseLinkedList { values } => {
                config.check_len("list", values.len())?;
                config.check_values("list", values.iter().copied())
            }
            GenerateRequest::BinarySearch { array, target }
            | GenerateRequest::LinearSearch { array, target }
            | GenerateRequest::TwoSum { array, target } => {
                config.check_len("array", array.len())?;
                config.check_values("array", array.iter().copied())?;
                config.check_values("target", [*target])
            }
            GenerateRequest::BubbleSort { array }
            | GenerateRequest::KLargestElements { array, .. } => {
                config.check_len("array", array.len())?;
                config.check_values("array", array.iter().copied())
            }
            GenerateRequest::MinCostArray { costs } => {
                config.check_len("cost array", costs.len())?;
                config.check_values("cost array", costs.iter().copied())
            }
            GenerateRequest::InorderTraversal { level_order } => {
                config.check_len("tree", level_order.len())?;
                config.check_values("tree", level_order.iter().flatten().copied())
            }
            GenerateRequest::CoinChange { coins, amount } => {
                config.check_len("coin list", coins.len())?;
                if *amount > config.max_amount {
                    return Err(InputError::AmountTooLarge {
                        amount: *amount,
                        max: config.max_amount,
                    });
                }
                Ok(())
            }
            GenerateRequest::Bfs { graph, start } => {
                check_graph(graph, config)?;
                if *start >= graph.node_count() {
                    return Err(InputError::StartOutOfRange {
                        start: *start,
                        node_count: graph.node_count(),
                    });
                }
                Ok(())
            }
            GenerateRequest::CycleDetection { graph } => check_graph(graph, config),
            GenerateRequest::AnagramDetection { first, second } => {
                config.check_text("first string", first)?;
                config.check_text("second string", second)
            }
            GenerateRequest::BalancedParentheses { text } => config.check_text("text", text),
            GenerateRequest::Factorial { n } => {
                let max = config.max_factorial_input.min(factorial::MAX_FACTORIAL_INPUT);
                if *n > max {
                    return Err(InputError::FactorialTooLarge { n: *n, max });
                }
                Ok(())
            }
        }
    }

    /// Runs the generator for this request without validating it.
    pub fn run(&self) -> Vec<Step> {
        match self {
            GenerateRequest::ReverseLinkedList { values } => {
                linked_list::reverse_linked_list(values)
            }
            GenerateRequest::BinarySearch { array, target } => {
                binary_search::binary_search(array, *target)
            }
            GenerateRequest::LinearSearch { array, target } => {
                linear_search::linear_search(array, *target)
            }
            GenerateRequest::TwoSum { array, target } => two_sum::two_sum(array, *target),
            GenerateRequest::BubbleSort { array } => bubble_sort::bubble_sort(array),
            GenerateRequest::Bfs { graph, start } => bfs::bfs(graph, *start),
            GenerateRequest::CycleDetection { graph } => cycle_detection::detect_cycle(graph),
            GenerateRequest::KLargestElements { array, k } => k_largest::k_largest(array, *k),
            GenerateRequest::CoinChange { coins, amount } => {
                coin_change::coin_change(coins, *amount)
            }
            GenerateRequest::MinCostArray { costs } => min_cost::min_cost_climbing(costs),
            GenerateRequest::AnagramDetection { first, second } => {
                anagram::is_anagram(first, second)
            }
            GenerateRequest::BalancedParentheses { text } => {
                balanced_parentheses::balanced_parentheses(text)
            }
            GenerateRequest::Factorial { n } => factorial::factorial(*n),
            GenerateRequest::InorderTraversal { level_order } => {
                inorder_traversal::inorder_traversal(level_order)
            }
        }
    }
}

fn check_graph(graph: &Graph, config: &EngineConfig) -> Result<(), InputError> {
    if graph.node_count() > config.max_graph_nodes {
        return Err(InputError::TooManyNodes {
            nodes: graph.node_count(),
            max: config.max_graph_nodes,
        });
    }
    Ok(())
}

/// Validates `request`, runs its generator and applies the configured
/// playback speed to every step.
pub fn generate(
    request: &GenerateRequest,
    config: &EngineConfig,
) -> Result<Vec<Step>, InputError> {
    request.validate(config)?;
    let algorithm = request.algorithm();

    let mut steps = request.run();
    if config.speed != 1.0 {
        for step in &mut steps {
            step.timing = step.timing.scaled(config.speed);
        }
    }

    if let Err(e) = validate_trace(&steps) {
        tracing::warn!(%algorithm, error = %e, "generated trace breaks an invariant");
    }
    tracing::debug!(%algorithm, steps = steps.len(), "trace ready");
    Ok(steps)
}
