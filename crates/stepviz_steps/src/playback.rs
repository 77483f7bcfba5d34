use crate::step::Step;

/// Cursor over a generated step sequence. Holds no timers; a renderer drives
/// it and reads [`Playback::current`].
#[derive(Debug, Clone, Default)]
pub struct Playback {
    steps: Vec<Step>,
    index: usize,
}

impl Playback {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.index)
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.steps.len()
    }

    /// Advances one step, staying on the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Step> {
        if !self.is_at_end() {
            self.index += 1;
        }
        self.current()
    }

    pub fn previous(&mut self) -> Option<&Step> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) -> Option<&Step> {
        self.index = index.min(self.steps.len().saturating_sub(1));
        self.current()
    }

    pub fn seek_end(&mut self) -> Option<&Step> {
        self.seek(usize::MAX)
    }

    pub fn reset(&mut self) -> Option<&Step> {
        self.index = 0;
        self.current()
    }
}
