//! Recursive factorial shown through an explicit call stack.

use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Step, StepContext, StepType,
};

const STACK: &str = "callStack";

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: u32 = 20;

fn snapshot(step: &mut Step, frames: &[u32]) {
    let labels: Vec<String> = frames.iter().map(|k| format!("factorial({})", k)).collect();
    step.add_structure(STACK, DataStructure::stack(&labels, "Call Stack"))
        .add_highlight(
            STACK,
            Highlight::indices(frames.len().checked_sub(1), HighlightStyle::Active),
        )
        .set_var("callStack", &labels);
}

pub fn factorial(n: u32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut frames: Vec<u32> = Vec::new();

    let step = recorder.push(StepType::Initialization, format!("Compute {}! recursively.", n));
    snapshot(step, &frames);
    step.set_var("n", &n);

    if n > MAX_FACTORIAL_INPUT {
        let step = recorder.push(
            StepType::Return,
            format!(
                "{}! does not fit in 64 bits ({}! is the largest that does), so there is no result.",
                n, MAX_FACTORIAL_INPUT
            ),
        );
        snapshot(step, &frames);
        step.set_var("n", &n)
            .set_var("result", &serde_json::Value::Null);
        return finish(recorder);
    }

    let mut k = n;
    loop {
        frames.push(k);
        if k <= 1 {
            let step = recorder.push(
                StepType::BaseCase,
                format!("factorial({}) is the base case and returns 1.", k),
            );
            snapshot(step, &frames);
            step.set_var("k", &k)
                .set_context(StepContext::new(Some(LoopKind::Recursion), Operation::Return, STACK));
            break;
        }
        let step = recorder.push(
            StepType::FunctionCall,
            format!(
                "Call factorial({}), which needs factorial({}) first.",
                k,
                k - 1
            ),
        );
        snapshot(step, &frames);
        step.set_var("k", &k)
            .set_context(StepContext::new(Some(LoopKind::Recursion), Operation::Push, STACK));
        k -= 1;
    }

    // the base frame returns 1 without multiplying
    frames.pop();
    let mut result: u64 = 1;
    while let Some(&k) = frames.last() {
        let previous = result;
        result = result.saturating_mul(u64::from(k));
        let step = recorder.push(
            StepType::FunctionReturn,
            format!(
                "factorial({}) returns {} * {} = {}.",
                k, k, previous, result
            ),
        );
        snapshot(step, &frames);
        step.set_var("k", &k)
            .set_var("partial", &result)
            .set_context(StepContext::new(Some(LoopKind::Recursion), Operation::Return, STACK));
        frames.pop();
    }

    let step = recorder.push(StepType::Return, format!("{}! = {}.", n, result));
    snapshot(step, &frames);
    step.set_var("n", &n).set_var("result", &result);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "factorial generated");
    steps
}
