use shared::ClassificationResult;
use thiserror::Error;

/// Which input affordance is active. Exactly one at a time; switching
/// abandons the current analysis but keeps the other modality's staged input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModality {
    Text,
    Image,
}

/// User-facing failure reasons. `Display` is the message shown in the error
/// panel; diagnostic detail is logged where the failure is observed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No text could be extracted from this image.")]
    NoTextFound,
    #[error("Failed to extract text from image. Please try again.")]
    ExtractionFailed,
    #[error("Failed to analyze text. Please try again.")]
    TransportFailed,
}

/// The single discriminated state of an analysis. Every panel in the results
/// column renders off this value, so loading/error/result/idle can never be
/// shown together.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Extracting,
    Submitting,
    Succeeded(ClassificationResult),
    Failed(AnalysisError),
}

/// Generation token captured when an async stage starts and threaded through
/// its completion message. Completions carrying a superseded token are
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle(u64);

/// The analysis lifecycle state machine. All mutation goes through the
/// methods below; completion methods return `false` when the completion is
/// stale (or arrives in a stage it does not belong to) and must be dropped.
#[derive(Debug, Default)]
pub struct Analysis {
    state: AnalysisState,
    generation: u64,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// An async stage is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, AnalysisState::Extracting | AnalysisState::Submitting)
    }

    /// Starts an extraction cycle for a freshly uploaded image. Supersedes
    /// any in-flight work.
    pub fn begin_extraction(&mut self) -> Cycle {
        self.state = AnalysisState::Extracting;
        self.next_cycle()
    }

    /// Starts a submission cycle for manually entered text. Supersedes any
    /// in-flight work.
    pub fn begin_submission(&mut self) -> Cycle {
        self.state = AnalysisState::Submitting;
        self.next_cycle()
    }

    /// Extraction produced text; the same cycle continues into submission.
    pub fn advance_to_submission(&mut self, cycle: Cycle) -> bool {
        if !self.accepts(cycle, AnalysisState::Extracting) {
            return false;
        }
        self.state = AnalysisState::Submitting;
        true
    }

    pub fn fail_extraction(&mut self, cycle: Cycle, error: AnalysisError) -> bool {
        if !self.accepts(cycle, AnalysisState::Extracting) {
            return false;
        }
        self.state = AnalysisState::Failed(error);
        true
    }

    pub fn complete(&mut self, cycle: Cycle, result: ClassificationResult) -> bool {
        if !self.accepts(cycle, AnalysisState::Submitting) {
            return false;
        }
        self.state = AnalysisState::Succeeded(result);
        true
    }

    pub fn fail_submission(&mut self, cycle: Cycle, error: AnalysisError) -> bool {
        if !self.accepts(cycle, AnalysisState::Submitting) {
            return false;
        }
        self.state = AnalysisState::Failed(error);
        true
    }

    /// Back to `Idle`. Bumps the generation so completions of abandoned
    /// stages can never be applied.
    pub fn reset(&mut self) {
        self.state = AnalysisState::Idle;
        self.generation += 1;
    }

    fn next_cycle(&mut self) -> Cycle {
        self.generation += 1;
        Cycle(self.generation)
    }

    fn accepts(&self, cycle: Cycle, expected: AnalysisState) -> bool {
        cycle.0 == self.generation && self.state == expected
    }
}
