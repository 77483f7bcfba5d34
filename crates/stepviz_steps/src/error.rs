use thiserror::Error;

/// Rejected generator input. Generators themselves never fail; these are
/// raised before a generator runs.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("{what} has {len} elements (max: {max})")]
    TooLong {
        what: &'static str,
        len: usize,
        max: usize,
    },

    #[error("graph has {nodes} nodes (max: {max})")]
    TooManyNodes { nodes: usize, max: usize },

    #[error("edge {from} -> {to} is out of range for {node_count} nodes")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        node_count: usize,
    },

    #[error("{what} holds {value}, outside -{max}..={max}")]
    ValueOutOfRange {
        what: &'static str,
        value: i64,
        max: i64,
    },

    #[error("start node {start} is out of range for {node_count} nodes")]
    StartOutOfRange { start: usize, node_count: usize },

    #[error("amount {amount} is too large (max: {max})")]
    AmountTooLarge { amount: u32, max: u32 },

    #[error("factorial input {n} is too large (max: {max})")]
    FactorialTooLarge { n: u32, max: u32 },

    #[error("playback speed must be a positive number (got {0})")]
    InvalidSpeed(f32),
}

/// A generated sequence that breaks the filmstrip invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("trace is empty")]
    Empty,

    #[error("step at position {position} has id {id}")]
    IdMismatch { position: usize, id: usize },

    #[error("trace does not end in a terminal step")]
    MissingTerminal,

    #[error("terminal step at position {position} is followed by more steps")]
    TerminalNotLast { position: usize },

    #[error("step {step} highlights unknown structure '{structure}'")]
    UnknownHighlightTarget { step: usize, structure: String },

    #[error("step {step} highlights {structure}[{index}] but it has {len} elements")]
    IndexOutOfRange {
        step: usize,
        structure: String,
        index: usize,
        len: usize,
    },
}
