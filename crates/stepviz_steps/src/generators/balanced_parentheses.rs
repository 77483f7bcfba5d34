use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Position, Step, StepContext,
    StepType,
};

const TEXT: &str = "input";
const STACK: &str = "stack";

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

fn is_opener(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

fn snapshot(step: &mut Step, text: &[char], stack: &[char]) {
    let frames: Vec<String> = stack.iter().map(|c| c.to_string()).collect();
    step.add_structure(TEXT, DataStructure::text(text, "Input"))
        .add_structure(STACK, DataStructure::stack(&frames, "Stack").at(Position::Bottom))
        .set_var("stack", &frames);
}

/// Checks `()`, `[]` and `{}` nesting. Other characters are skipped.
pub fn balanced_parentheses(text: &str) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let chars: Vec<char> = text.chars().collect();
    let mut stack: Vec<char> = Vec::new();

    let step = recorder.push(
        StepType::Initialization,
        format!("Check whether the brackets in \"{}\" are balanced.", text),
    );
    snapshot(step, &chars, &stack);

    for (i, &ch) in chars.iter().enumerate() {
        if is_opener(ch) {
            stack.push(ch);
            let step = recorder.push(
                StepType::StackPush,
                format!("'{}' opens a bracket, so push it onto the stack.", ch),
            );
            snapshot(step, &chars, &stack);
            step.add_highlight(TEXT, Highlight::indices([i], HighlightStyle::Current))
                .add_highlight(STACK, Highlight::indices([stack.len() - 1], HighlightStyle::Active))
                .set_var("index", &i)
                .set_context(StepContext::new(Some(LoopKind::For), Operation::Push, STACK).at(i));
            continue;
        }

        let Some(expected) = opener_for(ch) else {
            let step = recorder.push(
                StepType::Assignment,
                format!("'{}' is not a bracket, so skip it.", ch),
            );
            snapshot(step, &chars, &stack);
            step.add_highlight(TEXT, Highlight::indices([i], HighlightStyle::Visited))
                .set_var("index", &i);
            continue;
        };

        let Some(&top) = stack.last() else {
            let step = recorder.push(
                StepType::Return,
                format!(
                    "'{}' at index {} has no opening bracket to match, so the string is not balanced.",
                    ch, i
                ),
            );
            snapshot(step, &chars, &stack);
            step.add_highlight(TEXT, Highlight::indices([i], HighlightStyle::Match))
                .set_var("index", &i)
                .set_var("balanced", &false);
            return finish(recorder);
        };

        let step = recorder.push(
            StepType::Comparison,
            format!("Compare '{}' with the top of the stack '{}'.", ch, top),
        );
        snapshot(step, &chars, &stack);
        step.add_highlight(TEXT, Highlight::indices([i], HighlightStyle::Current))
            .add_highlight(STACK, Highlight::indices([stack.len() - 1], HighlightStyle::Compare))
            .set_var("index", &i)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Compare, STACK).at(i));

        if top != expected {
            let step = recorder.push(
                StepType::Return,
                format!(
                    "'{}' does not close '{}', so the string is not balanced.",
                    ch, top
                ),
            );
            snapshot(step, &chars, &stack);
            step.add_highlight(TEXT, Highlight::indices([i], HighlightStyle::Match))
                .add_highlight(STACK, Highlight::indices([stack.len() - 1], HighlightStyle::Match))
                .set_var("index", &i)
                .set_var("balanced", &false);
            return finish(recorder);
        }

        stack.pop();
        let step = recorder.push(
            StepType::StackPop,
            format!("'{}' closes '{}', so pop it from the stack.", ch, top),
        );
        snapshot(step, &chars, &stack);
        step.add_highlight(TEXT, Highlight::indices([i], HighlightStyle::Visited))
            .set_var("index", &i)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Pop, STACK).at(i));
    }

    let balanced = stack.is_empty();
    let explanation = if balanced {
        "Every bracket was matched and the stack is empty, so the string is balanced.".to_string()
    } else {
        format!(
            "{} opening bracket(s) were never closed, so the string is not balanced.",
            stack.len()
        )
    };
    let step = recorder.push(StepType::Return, explanation);
    snapshot(step, &chars, &stack);
    step.add_highlight(STACK, Highlight::indices(0..stack.len(), HighlightStyle::Match))
        .set_var("balanced", &balanced);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "balanced-parentheses generated");
    steps
}
