use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use stepviz_steps::{GenerateRequest, Graph, InputError};

#[derive(Parser, Debug)]
#[command(
    name = "stepviz",
    about = "Generates step-by-step traces of classic algorithms for visualization.",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write the trace to this file instead of stdout
    #[arg(long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Playback speed multiplier applied to step timing
    #[arg(long, global = true, default_value_t = 1.0)]
    pub speed: f32,

    /// Only print the step at this index (clamped to the last step)
    #[arg(long, global = true, value_name = "N")]
    pub step: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reverse a singly linked list, e.g. `1,2,3,4,5`
    ReverseLinkedList {
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Binary search over a sorted copy of the array
    BinarySearch {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        array: Vec<i64>,
    },
    /// Scan the array left to right for the target
    LinearSearch {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        array: Vec<i64>,
    },
    /// Two-pointer pair search over a sorted copy of the array
    TwoSum {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        array: Vec<i64>,
    },
    /// Bubble sort with early exit
    BubbleSort {
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        array: Vec<i64>,
    },
    /// Breadth-first search, e.g. `--nodes 4 --edges 0-1,0-2,2-3`
    Bfs {
        #[arg(long)]
        nodes: usize,
        #[arg(long, value_delimiter = ',')]
        edges: Vec<EdgeArg>,
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
    },
    /// Depth-first cycle detection on a directed graph
    CycleDetection {
        #[arg(long)]
        nodes: usize,
        #[arg(long, value_delimiter = ',')]
        edges: Vec<EdgeArg>,
        /// Treat edges as two-way
        #[arg(long)]
        undirected: bool,
    },
    /// The k largest values using a min-heap of size k
    KLargestElements {
        #[arg(short)]
        k: usize,
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        array: Vec<i64>,
    },
    /// Fewest coins for an amount, bottom-up
    CoinChange {
        #[arg(long)]
        amount: u32,
        #[arg(value_delimiter = ',')]
        coins: Vec<u32>,
    },
    /// Minimum cost to climb past the end of a cost array
    MinCostArray {
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        costs: Vec<i64>,
    },
    /// Character-count anagram check
    AnagramDetection { first: String, second: String },
    /// Bracket matching over `()`, `[]` and `{}`
    BalancedParentheses {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Recursive factorial through an explicit call stack
    Factorial { n: u32 },
    /// In-order traversal of a level-order tree, e.g. `4,2,6,null,3`
    InorderTraversal {
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        level_order: Vec<TreeSlot>,
    },
}

/// `from-to` pair, e.g. `0-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeArg(pub usize, pub usize);

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('-')
            .ok_or_else(|| format!("edge '{s}' should look like 0-1"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("edge '{s}': {e}"))
        };
        Ok(EdgeArg(parse(from)?, parse(to)?))
    }
}

/// One level-order entry; `null` or `_` marks a missing child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSlot(pub Option<i64>);

impl FromStr for TreeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "null" | "_" => Ok(TreeSlot(None)),
            value => value
                .parse::<i64>()
                .map(|v| TreeSlot(Some(v)))
                .map_err(|e| format!("tree entry '{s}': {e}")),
        }
    }
}

fn graph(nodes: usize, edges: &[EdgeArg], directed: bool) -> Result<Graph, InputError> {
    let pairs: Vec<(usize, usize)> = edges.iter().map(|e| (e.0, e.1)).collect();
    Graph::new(nodes, &pairs, directed)
}

impl Command {
    pub fn into_request(self) -> Result<GenerateRequest, InputError> {
        let request = match self {
            Command::ReverseLinkedList { values } => GenerateRequest::ReverseLinkedList { values },
            Command::BinarySearch { target, array } => {
                GenerateRequest::BinarySearch { array, target }
            }
            Command::LinearSearch { target, array } => {
                GenerateRequest::LinearSearch { array, target }
            }
            Command::TwoSum { target, array } => GenerateRequest::TwoSum { array, target },
            Command::BubbleSort { array } => GenerateRequest::BubbleSort { array },
            Command::Bfs {
                nodes,
                edges,
                start,
                directed,
            } => GenerateRequest::Bfs {
                graph: graph(nodes, &edges, directed)?,
                start,
            },
            Command::CycleDetection {
                nodes,
                edges,
                undirected,
            } => GenerateRequest::CycleDetection {
                graph: graph(nodes, &edges, !undirected)?,
            },
            Command::KLargestElements { k, array } => {
                GenerateRequest::KLargestElements { array, k }
            }
            Command::CoinChange { amount, coins } => GenerateRequest::CoinChange { coins, amount },
            Command::MinCostArray { costs } => GenerateRequest::MinCostArray { costs },
            Command::AnagramDetection { first, second } => {
                GenerateRequest::AnagramDetection { first, second }
            }
            Command::BalancedParentheses { text } => GenerateRequest::BalancedParentheses { text },
            Command::Factorial { n } => GenerateRequest::Factorial { n },
            Command::InorderTraversal { level_order } => GenerateRequest::InorderTraversal {
                level_order: level_order.into_iter().map(|slot| slot.0).collect(),
            },
        };
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;
    use stepviz_steps::Algorithm;

    #[test]
    fn test_subcommands_match_algorithm_ids() {
        let names: Vec<String> = Args::command()
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .collect();
        for algorithm in Algorithm::ALL {
            assert!(names.contains(&algorithm.id().to_string()), "{algorithm}");
        }
        for name in &names {
            assert!(name.parse::<Algorithm>().is_ok(), "{name}");
        }
    }

    #[rstest]
    #[case("0-1", Ok(EdgeArg(0, 1)))]
    #[case("3 - 12", Ok(EdgeArg(3, 12)))]
    #[case("0", Err(()))]
    #[case("a-1", Err(()))]
    fn test_parse_edge(#[case] input: &str, #[case] expected: Result<EdgeArg, ()>) {
        assert_eq!(input.parse::<EdgeArg>().map_err(|_| ()), expected);
    }

    #[rstest]
    #[case("7", Ok(TreeSlot(Some(7))))]
    #[case("-2", Ok(TreeSlot(Some(-2))))]
    #[case("null", Ok(TreeSlot(None)))]
    #[case("_", Ok(TreeSlot(None)))]
    #[case("x", Err(()))]
    fn test_parse_tree_slot(#[case] input: &str, #[case] expected: Result<TreeSlot, ()>) {
        assert_eq!(input.parse::<TreeSlot>().map_err(|_| ()), expected);
    }

    #[test]
    fn test_parse_search_command() {
        let args = Args::try_parse_from([
            "stepviz",
            "binary-search",
            "--target",
            "23",
            "2,5,8,12,16,23,38,45",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Json);
        assert_eq!(
            args.command.into_request().unwrap(),
            GenerateRequest::BinarySearch {
                array: vec![2, 5, 8, 12, 16, 23, 38, 45],
                target: 23
            }
        );
    }

    #[test]
    fn test_parse_tree_command() {
        let args =
            Args::try_parse_from(["stepviz", "inorder-traversal", "1,null,2,3"]).unwrap();
        assert_eq!(
            args.command.into_request().unwrap(),
            GenerateRequest::InorderTraversal {
                level_order: vec![Some(1), None, Some(2), Some(3)]
            }
        );
    }

    #[test]
    fn test_edge_out_of_range_is_rejected() {
        let args = Args::try_parse_from([
            "stepviz",
            "bfs",
            "--nodes",
            "2",
            "--edges",
            "0-5",
        ])
        .unwrap();
        assert_eq!(
            args.command.into_request(),
            Err(InputError::EdgeOutOfRange {
                from: 0,
                to: 5,
                node_count: 2
            })
        );
    }
}
