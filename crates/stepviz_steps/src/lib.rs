pub mod config;
pub mod error;
pub mod generators;
pub mod graph;
mod playback;
mod recorder;
mod request;
pub mod step;
mod validate;

pub use config::EngineConfig;
pub use error::{InputError, TraceError};
pub use generators::{
    anagram::is_anagram, balanced_parentheses::balanced_parentheses, bfs::bfs,
    binary_search::binary_search, bubble_sort::bubble_sort, coin_change::coin_change,
    cycle_detection::detect_cycle, factorial::factorial, inorder_traversal::inorder_traversal,
    k_largest::k_largest, linear_search::linear_search, linked_list::reverse_linked_list,
    min_cost::min_cost_climbing, two_sum::two_sum,
};
pub use graph::Graph;
pub use playback::Playback;
pub use recorder::StepRecorder;
pub use request::{Algorithm, GenerateRequest, generate};
pub use step::{
    DataStructure, Highlight, HighlightStyle, HighlightTarget, Step, StepContext, StepType,
    StructureKind, Timing,
};
pub use validate::validate_trace;
