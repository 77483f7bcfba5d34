use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Why a step exists. The visualizer picks an animation from this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    Initialization,
    Comparison,
    Assignment,
    LoopStart,
    PointerInitialization,
    PointerUpdate,
    PointerMoveLeft,
    PointerMoveRight,
    LinkReversal,
    NodeTraversal,
    Swap,
    PassComplete,
    Enqueue,
    Dequeue,
    VisitNode,
    GraphCycleDetected,
    HeapPush,
    HeapPop,
    DpTableUpdate,
    StackPush,
    StackPop,
    FunctionCall,
    BaseCase,
    FunctionReturn,
    Return,
    ReturnFound,
    ReturnNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepFamily {
    Setup,
    Control,
    Pointer,
    LinkedList,
    Sorting,
    Graph,
    Heap,
    DynamicProgramming,
    Stack,
    Recursion,
    Terminal,
}

/// Animation hint a renderer can apply without knowing the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    Appear,
    Pulse,
    Slide,
    Exchange,
    Redirect,
    Grow,
    Shrink,
    Settle,
}

impl StepType {
    pub const ALL: [StepType; 27] = [
        StepType::Initialization,
        StepType::Comparison,
        StepType::Assignment,
        StepType::LoopStart,
        StepType::PointerInitialization,
        StepType::PointerUpdate,
        StepType::PointerMoveLeft,
        StepType::PointerMoveRight,
        StepType::LinkReversal,
        StepType::NodeTraversal,
        StepType::Swap,
        StepType::PassComplete,
        StepType::Enqueue,
        StepType::Dequeue,
        StepType::VisitNode,
        StepType::GraphCycleDetected,
        StepType::HeapPush,
        StepType::HeapPop,
        StepType::DpTableUpdate,
        StepType::StackPush,
        StepType::StackPop,
        StepType::FunctionCall,
        StepType::BaseCase,
        StepType::FunctionReturn,
        StepType::Return,
        StepType::ReturnFound,
        StepType::ReturnNotFound,
    ];

    /// Wire name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            StepType::Initialization => "initialization",
            StepType::Comparison => "comparison",
            StepType::Assignment => "assignment",
            StepType::LoopStart => "loop_start",
            StepType::PointerInitialization => "pointer_initialization",
            StepType::PointerUpdate => "pointer_update",
            StepType::PointerMoveLeft => "pointer_move_left",
            StepType::PointerMoveRight => "pointer_move_right",
            StepType::LinkReversal => "link_reversal",
            StepType::NodeTraversal => "node_traversal",
            StepType::Swap => "swap",
            StepType::PassComplete => "pass_complete",
            StepType::Enqueue => "enqueue",
            StepType::Dequeue => "dequeue",
            StepType::VisitNode => "visit_node",
            StepType::GraphCycleDetected => "graph_cycle_detected",
            StepType::HeapPush => "heap_push",
            StepType::HeapPop => "heap_pop",
            StepType::DpTableUpdate => "dp_table_update",
            StepType::StackPush => "stack_push",
            StepType::StackPop => "stack_pop",
            StepType::FunctionCall => "function_call",
            StepType::BaseCase => "base_case",
            StepType::FunctionReturn => "function_return",
            StepType::Return => "return",
            StepType::ReturnFound => "return_found",
            StepType::ReturnNotFound => "return_not_found",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StepType::Return | StepType::ReturnFound | StepType::ReturnNotFound
        )
    }

    pub fn family(self) -> StepFamily {
        match self {
            StepType::Initialization => StepFamily::Setup,
            StepType::Comparison | StepType::Assignment | StepType::LoopStart => {
                StepFamily::Control
            }
            StepType::PointerInitialization
            | StepType::PointerUpdate
            | StepType::PointerMoveLeft
            | StepType::PointerMoveRight => StepFamily::Pointer,
            StepType::LinkReversal | StepType::NodeTraversal => StepFamily::LinkedList,
            StepType::Swap | StepType::PassComplete => StepFamily::Sorting,
            StepType::Enqueue
            | StepType::Dequeue
            | StepType::VisitNode
            | StepType::GraphCycleDetected => StepFamily::Graph,
            StepType::HeapPush | StepType::HeapPop => StepFamily::Heap,
            StepType::DpTableUpdate => StepFamily::DynamicProgramming,
            StepType::StackPush | StepType::StackPop => StepFamily::Stack,
            StepType::FunctionCall | StepType::BaseCase | StepType::FunctionReturn => {
                StepFamily::Recursion
            }
            StepType::Return | StepType::ReturnFound | StepType::ReturnNotFound => {
                StepFamily::Terminal
            }
        }
    }

    pub fn animation(self) -> AnimationStyle {
        match self {
            StepType::Initialization | StepType::PointerInitialization => AnimationStyle::Appear,
            StepType::Comparison | StepType::LoopStart | StepType::GraphCycleDetected => {
                AnimationStyle::Pulse
            }
            StepType::PointerUpdate
            | StepType::PointerMoveLeft
            | StepType::PointerMoveRight
            | StepType::NodeTraversal
            | StepType::VisitNode => AnimationStyle::Slide,
            StepType::Swap | StepType::Assignment | StepType::DpTableUpdate => {
                AnimationStyle::Exchange
            }
            StepType::LinkReversal => AnimationStyle::Redirect,
            StepType::Enqueue
            | StepType::HeapPush
            | StepType::StackPush
            | StepType::FunctionCall => AnimationStyle::Grow,
            StepType::Dequeue
            | StepType::HeapPop
            | StepType::StackPop
            | StepType::FunctionReturn
            | StepType::BaseCase => AnimationStyle::Shrink,
            StepType::PassComplete
            | StepType::Return
            | StepType::ReturnFound
            | StepType::ReturnNotFound => AnimationStyle::Settle,
        }
    }

    pub fn default_timing(self) -> Timing {
        match self.family() {
            StepFamily::Terminal => Timing {
                duration: 1200,
                delay: 300,
            },
            StepFamily::Setup => Timing {
                duration: 1000,
                delay: 200,
            },
            _ => Timing {
                duration: 800,
                delay: 200,
            },
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested playback timing in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub duration: u32,
    pub delay: u32,
}

impl Timing {
    /// Timing for a playback speed multiplier (2.0 plays twice as fast).
    pub fn scaled(self, speed: f32) -> Timing {
        let scale = |ms: u32| (ms as f32 / speed).round() as u32;
        Timing {
            duration: scale(self.duration),
            delay: scale(self.delay),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopKind {
    While,
    For,
    Recursion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    Write,
    Compare,
    Swap,
    Push,
    Pop,
    Link,
    Return,
}

/// Secondary annotation of a step. Nothing relies on it for correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_kind: Option<LoopKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl StepContext {
    pub fn new(loop_kind: Option<LoopKind>, operation: Operation, structure: &str) -> Self {
        StepContext {
            loop_kind,
            operation: Some(operation),
            structure: Some(structure.to_string()),
            index: None,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    Array,
    LinkedList,
    Graph,
    Heap,
    Queue,
    Table,
    String,
    Stack,
    Tree,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureMetadata {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNode {
    pub id: usize,
    pub value: i64,
    pub next: Option<usize>,
}

/// The link being redirected during a `link_reversal` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reversing {
    pub from: usize,
    pub to: Option<usize>,
    pub original_next: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedListData {
    pub nodes: Vec<ListNode>,
    pub head: Option<usize>,
    pub reversed_links: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversing: Option<Reversing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<usize>,
    pub edges: Vec<Edge>,
    pub directed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: usize,
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeData {
    pub nodes: Vec<TreeNode>,
    pub root: Option<usize>,
}

/// Payload of a [`DataStructure`]. Which variant is valid is decided by its
/// [`StructureKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StructureData {
    Array(Vec<i64>),
    Table(Vec<Option<i64>>),
    Text(Vec<char>),
    Stack(Vec<String>),
    Counts(BTreeMap<char, i64>),
    LinkedList(LinkedListData),
    Graph(GraphData),
    Tree(TreeData),
}

impl StructureData {
    /// Number of addressable slots for `indices` highlights, if the payload
    /// is sequential.
    pub fn indexable_len(&self) -> Option<usize> {
        match self {
            StructureData::Array(v) => Some(v.len()),
            StructureData::Table(v) => Some(v.len()),
            StructureData::Text(v) => Some(v.len()),
            StructureData::Stack(v) => Some(v.len()),
            StructureData::Counts(_)
            | StructureData::LinkedList(_)
            | StructureData::Graph(_)
            | StructureData::Tree(_) => None,
        }
    }

    /// Number of node ids for `nodes` highlights.
    pub fn node_count(&self) -> Option<usize> {
        match self {
            StructureData::LinkedList(list) => Some(list.nodes.len()),
            StructureData::Graph(graph) => Some(graph.nodes.len()),
            StructureData::Tree(tree) => Some(tree.nodes.len()),
            _ => None,
        }
    }
}

/// A rendering payload for one logical structure, copied at emission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataStructure {
    #[serde(rename = "type")]
    pub kind: StructureKind,
    pub data: StructureData,
    pub metadata: StructureMetadata,
}

impl DataStructure {
    fn new(kind: StructureKind, data: StructureData, label: &str) -> Self {
        DataStructure {
            kind,
            data,
            metadata: StructureMetadata {
                label: label.to_string(),
                position: None,
            },
        }
    }

    pub fn array(values: &[i64], label: &str) -> Self {
        Self::new(StructureKind::Array, StructureData::Array(values.to_vec()), label)
    }

    pub fn heap(values: &[i64], label: &str) -> Self {
        Self::new(StructureKind::Heap, StructureData::Array(values.to_vec()), label)
    }

    pub fn queue(values: &[i64], label: &str) -> Self {
        Self::new(StructureKind::Queue, StructureData::Array(values.to_vec()), label)
    }

    pub fn table(cells: &[Option<i64>], label: &str) -> Self {
        Self::new(StructureKind::Table, StructureData::Table(cells.to_vec()), label)
    }

    pub fn text(chars: &[char], label: &str) -> Self {
        Self::new(StructureKind::String, StructureData::Text(chars.to_vec()), label)
    }

    pub fn stack(frames: &[String], label: &str) -> Self {
        Self::new(StructureKind::Stack, StructureData::Stack(frames.to_vec()), label)
    }

    pub fn counts(counts: &BTreeMap<char, i64>, label: &str) -> Self {
        Self::new(StructureKind::Map, StructureData::Counts(counts.clone()), label)
    }

    pub fn linked_list(list: LinkedListData, label: &str) -> Self {
        Self::new(StructureKind::LinkedList, StructureData::LinkedList(list), label)
    }

    pub fn graph(graph: GraphData, label: &str) -> Self {
        Self::new(StructureKind::Graph, StructureData::Graph(graph), label)
    }

    pub fn tree(tree: TreeData, label: &str) -> Self {
        Self::new(StructureKind::Tree, StructureData::Tree(tree), label)
    }

    pub fn at(mut self, position: Position) -> Self {
        self.metadata.position = Some(position);
        self
    }
}

impl<'de> Deserialize<'de> for DataStructure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(rename = "type")]
            kind: StructureKind,
            data: Value,
            metadata: StructureMetadata,
        }

        let raw = Raw::deserialize(deserializer)?;
        let data = match raw.kind {
            StructureKind::Array | StructureKind::Heap | StructureKind::Queue => {
                serde_json::from_value(raw.data).map(StructureData::Array)
            }
            StructureKind::Table => serde_json::from_value(raw.data).map(StructureData::Table),
            StructureKind::String => serde_json::from_value(raw.data).map(StructureData::Text),
            StructureKind::Stack => serde_json::from_value(raw.data).map(StructureData::Stack),
            StructureKind::Map => serde_json::from_value(raw.data).map(StructureData::Counts),
            StructureKind::LinkedList => {
                serde_json::from_value(raw.data).map(StructureData::LinkedList)
            }
            StructureKind::Graph => serde_json::from_value(raw.data).map(StructureData::Graph),
            StructureKind::Tree => serde_json::from_value(raw.data).map(StructureData::Tree),
        }
        .map_err(D::Error::custom)?;

        Ok(DataStructure {
            kind: raw.kind,
            data,
            metadata: raw.metadata,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    Current,
    Compare,
    Visited,
    Match,
    Highlight,
    Active,
}

/// Which elements of a structure a highlight applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightTarget {
    Indices(Vec<usize>),
    Nodes(Vec<usize>),
    Links(Vec<Edge>),
    Keys(Vec<char>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(flatten)]
    pub target: HighlightTarget,
    pub style: HighlightStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
}

impl Highlight {
    fn new(target: HighlightTarget, style: HighlightStyle) -> Self {
        Highlight {
            target,
            style,
            color: None,
            intensity: None,
        }
    }

    pub fn indices(indices: impl IntoIterator<Item = usize>, style: HighlightStyle) -> Self {
        Self::new(HighlightTarget::Indices(indices.into_iter().collect()), style)
    }

    pub fn nodes(nodes: impl IntoIterator<Item = usize>, style: HighlightStyle) -> Self {
        Self::new(HighlightTarget::Nodes(nodes.into_iter().collect()), style)
    }

    pub fn links(links: impl IntoIterator<Item = Edge>, style: HighlightStyle) -> Self {
        Self::new(HighlightTarget::Links(links.into_iter().collect()), style)
    }

    pub fn keys(keys: impl IntoIterator<Item = char>, style: HighlightStyle) -> Self {
        Self::new(HighlightTarget::Keys(keys.into_iter().collect()), style)
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn is_empty(&self) -> bool {
        match &self.target {
            HighlightTarget::Indices(v) => v.is_empty(),
            HighlightTarget::Nodes(v) => v.is_empty(),
            HighlightTarget::Links(v) => v.is_empty(),
            HighlightTarget::Keys(v) => v.is_empty(),
        }
    }
}

/// One frame of an algorithm filmstrip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: usize,
    pub step_type: StepType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_context: Option<StepContext>,
    pub data_structures: BTreeMap<String, DataStructure>,
    pub highlights: BTreeMap<String, Vec<Highlight>>,
    pub explanation: String,
    pub variables: BTreeMap<String, Value>,
    pub timing: Timing,
}

impl Step {
    pub fn new(id: usize, step_type: StepType, explanation: String) -> Self {
        Step {
            id,
            step_type,
            step_context: None,
            data_structures: BTreeMap::new(),
            highlights: BTreeMap::new(),
            explanation,
            variables: BTreeMap::new(),
            timing: step_type.default_timing(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.step_type.is_terminal()
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn structure(&self, name: &str) -> Option<&DataStructure> {
        self.data_structures.get(name)
    }

    pub fn add_structure(&mut self, name: &str, structure: DataStructure) -> &mut Self {
        self.data_structures.insert(name.to_string(), structure);
        self
    }

    /// Empty highlights are dropped so every listed highlight names something.
    pub fn add_highlight(&mut self, name: &str, highlight: Highlight) -> &mut Self {
        if !highlight.is_empty() {
            self.highlights
                .entry(name.to_string())
                .or_default()
                .push(highlight);
        }
        self
    }

    pub fn set_var<V: Serialize + ?Sized>(&mut self, name: &str, value: &V) -> &mut Self {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.variables.insert(name.to_string(), v);
            }
            Err(_) => {
                // ignore values that cannot be serialized
            }
        }
        self
    }

    pub fn set_context(&mut self, context: StepContext) -> &mut Self {
        self.step_context = Some(context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StepType::Return, true)]
    #[case(StepType::ReturnFound, true)]
    #[case(StepType::ReturnNotFound, true)]
    #[case(StepType::Comparison, false)]
    #[case(StepType::GraphCycleDetected, false)]
    fn test_terminal_step_types(#[case] step_type: StepType, #[case] terminal: bool) {
        assert_eq!(step_type.is_terminal(), terminal);
        assert_eq!(step_type.family() == StepFamily::Terminal, terminal);
    }

    #[test]
    fn test_step_type_wire_names() {
        for step_type in StepType::ALL {
            assert_eq!(
                serde_json::to_value(step_type).unwrap(),
                Value::String(step_type.to_string())
            );
        }
        assert_eq!(StepType::PointerMoveLeft.as_str(), "pointer_move_left");
        assert_eq!(StepType::DpTableUpdate.as_str(), "dp_table_update");
        assert_eq!(StepType::ReturnNotFound.as_str(), "return_not_found");
    }

    #[rstest]
    #[case(StepType::Initialization, AnimationStyle::Appear)]
    #[case(StepType::Comparison, AnimationStyle::Pulse)]
    #[case(StepType::PointerMoveRight, AnimationStyle::Slide)]
    #[case(StepType::Swap, AnimationStyle::Exchange)]
    #[case(StepType::LinkReversal, AnimationStyle::Redirect)]
    #[case(StepType::HeapPush, AnimationStyle::Grow)]
    #[case(StepType::StackPop, AnimationStyle::Shrink)]
    #[case(StepType::ReturnFound, AnimationStyle::Settle)]
    fn test_animation_style(#[case] step_type: StepType, #[case] expected: AnimationStyle) {
        assert_eq!(step_type.animation(), expected);
    }

    #[test]
    fn test_every_terminal_settles() {
        for step_type in StepType::ALL {
            if step_type.is_terminal() {
                assert_eq!(step_type.animation(), AnimationStyle::Settle);
            }
        }
        assert_eq!(
            serde_json::to_value(AnimationStyle::Exchange).unwrap(),
            "exchange"
        );
    }

    #[test]
    fn test_step_serializes_camel_case_envelope() {
        let mut step = Step::new(0, StepType::Comparison, "Compare.".to_string());
        step.add_structure("searchArray", DataStructure::array(&[1, 2, 3], "Array"))
            .add_highlight(
                "searchArray",
                Highlight::indices([1], HighlightStyle::Current).color("#f59e0b"),
            )
            .set_var("mid", &1);

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["stepType"], "comparison");
        assert_eq!(json["dataStructures"]["searchArray"]["type"], "array");
        assert_eq!(json["dataStructures"]["searchArray"]["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(
            json["highlights"]["searchArray"][0],
            serde_json::json!({"indices": [1], "style": "current", "color": "#f59e0b"})
        );
        assert_eq!(json["variables"]["mid"], 1);
        assert!(json.get("stepContext").is_none());
    }

    #[test]
    fn test_data_structure_deserializes_by_kind() {
        let table = DataStructure::table(&[Some(0), None, Some(1)], "dp");
        let json = serde_json::to_string(&table).unwrap();
        let back: DataStructure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);

        // a table without holes still comes back as a table
        let full = DataStructure::table(&[Some(0), Some(1)], "dp");
        let back: DataStructure =
            serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
        assert_eq!(back.data, StructureData::Table(vec![Some(0), Some(1)]));
    }

    #[test]
    fn test_empty_highlights_are_dropped() {
        let mut step = Step::new(0, StepType::Assignment, String::new());
        step.add_highlight("arr", Highlight::indices(Vec::new(), HighlightStyle::Visited));
        assert!(step.highlights.is_empty());
    }

    #[test]
    fn test_timing_scaled_by_speed() {
        let timing = StepType::Comparison.default_timing().scaled(2.0);
        assert_eq!(timing, Timing { duration: 400, delay: 100 });
    }
}
