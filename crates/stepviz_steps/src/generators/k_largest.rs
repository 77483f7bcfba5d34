//! The k largest elements via a bounded min-heap.

use crate::generators::{bracketed, join};
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Position, Step, StepContext,
    StepType,
};

const ARRAY: &str = "inputArray";
const HEAP: &str = "heap";

/// Array-backed binary min-heap. Kept by hand so every step can show the
/// exact slot layout.
#[derive(Debug, Default)]
struct MinHeap {
    slots: Vec<i64>,
}

impl MinHeap {
    /// Returns the slot the value settled in.
    fn push(&mut self, value: i64) -> usize {
        self.slots.push(value);
        let mut i = self.slots.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.slots[parent] <= self.slots[i] {
                break;
            }
            self.slots.swap(parent, i);
            i = parent;
        }
        i
    }

    fn pop(&mut self) -> Option<i64> {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let min = self.slots.pop();
        let len = self.slots.len();
        let mut i = 0;
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if left < len && self.slots[left] < self.slots[smallest] {
                smallest = left;
            }
            if right < len && self.slots[right] < self.slots[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.slots.swap(i, smallest);
            i = smallest;
        }
        min
    }

    fn peek(&self) -> Option<i64> {
        self.slots.first().copied()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

fn snapshot(step: &mut Step, array: &[i64], heap: &MinHeap, k: usize) {
    step.add_structure(ARRAY, DataStructure::array(array, "Input"))
        .add_structure(HEAP, DataStructure::heap(&heap.slots, "Min-Heap").at(Position::Bottom))
        .set_var("k", &k)
        .set_var("heap", &heap.slots);
}

pub fn k_largest(array: &[i64], k: usize) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut heap = MinHeap::default();

    let step = recorder.push(
        StepType::Initialization,
        format!(
            "Find the {} largest elements of {} with a min-heap that keeps at most {} values.",
            k,
            bracketed(array),
            k
        ),
    );
    snapshot(step, array, &heap, k);

    if k > 0 {
        for (i, &value) in array.iter().enumerate() {
            if heap.len() < k {
                let slot = heap.push(value);
                let step = recorder.push(
                    StepType::HeapPush,
                    format!(
                        "The heap has room ({}/{}), so push {}.",
                        heap.len(),
                        k,
                        value
                    ),
                );
                snapshot(step, array, &heap, k);
                step.add_highlight(ARRAY, Highlight::indices([i], HighlightStyle::Current))
                    .add_highlight(HEAP, Highlight::indices([slot], HighlightStyle::Active))
                    .set_var("index", &i)
                    .set_context(
                        StepContext::new(Some(LoopKind::For), Operation::Push, HEAP).at(slot),
                    );
                continue;
            }

            // heap is full and k > 0, so the root exists
            let Some(min) = heap.peek() else { break };
            let step = recorder.push(
                StepType::Comparison,
                format!(
                    "The heap is full. Compare {} with the smallest kept value {}.",
                    value, min
                ),
            );
            snapshot(step, array, &heap, k);
            step.add_highlight(ARRAY, Highlight::indices([i], HighlightStyle::Current))
                .add_highlight(HEAP, Highlight::indices([0], HighlightStyle::Compare))
                .set_var("index", &i)
                .set_context(StepContext::new(Some(LoopKind::For), Operation::Compare, HEAP).at(0));

            if value <= min {
                let step = recorder.push(
                    StepType::Assignment,
                    format!("{} is not larger than {}, so skip it.", value, min),
                );
                snapshot(step, array, &heap, k);
                step.add_highlight(ARRAY, Highlight::indices([i], HighlightStyle::Visited))
                    .set_var("index", &i);
                continue;
            }

            heap.pop();
            let step = recorder.push(
                StepType::HeapPop,
                format!("{} is larger than {}, so remove {} from the heap.", value, min, min),
            );
            snapshot(step, array, &heap, k);
            step.add_highlight(ARRAY, Highlight::indices([i], HighlightStyle::Current))
                .set_var("index", &i)
                .set_var("removed", &min)
                .set_context(StepContext::new(Some(LoopKind::For), Operation::Pop, HEAP));

            let slot = heap.push(value);
            let step = recorder.push(StepType::HeapPush, format!("Push {} into the heap.", value));
            snapshot(step, array, &heap, k);
            step.add_highlight(ARRAY, Highlight::indices([i], HighlightStyle::Current))
                .add_highlight(HEAP, Highlight::indices([slot], HighlightStyle::Active))
                .set_var("index", &i)
                .set_context(StepContext::new(Some(LoopKind::For), Operation::Push, HEAP).at(slot));
        }
    }

    let mut result = heap.slots.clone();
    result.sort_unstable_by(|a, b| b.cmp(a));
    let explanation = if result.is_empty() {
        "There is nothing to keep, so the result is empty.".to_string()
    } else {
        format!(
            "The heap holds the {} largest elements: {}.",
            result.len(),
            join(&result)
        )
    };
    let step = recorder.push(StepType::Return, explanation);
    snapshot(step, array, &heap, k);
    step.add_highlight(HEAP, Highlight::indices(0..heap.len(), HighlightStyle::Match))
        .set_var("result", &result);

    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "k-largest-elements generated");
    steps
}
