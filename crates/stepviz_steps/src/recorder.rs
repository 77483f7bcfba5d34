use crate::step::{Step, StepType};

/// Collects the steps of one generator run and hands out contiguous ids.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step and returns it so the caller can attach snapshots.
    pub fn push(&mut self, step_type: StepType, explanation: impl Into<String>) -> &mut Step {
        let id = self.steps.len();
        self.steps.push(Step::new(id, step_type, explanation.into()));
        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}
