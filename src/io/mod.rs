//! Progress and output abstractions
//!
//! Traits for the two things generation reports outward, so tests can
//! capture them.

use crate::models::errors::GenerationStage;

/// Notified after each generation stage finishes.
pub trait ProgressListener {
    fn on_stage_complete(&mut self, stage: GenerationStage, completed: usize, total: usize);
}

/// Reports progress through `tracing`.
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressListener for LogProgress {
    fn on_stage_complete(&mut self, stage: GenerationStage, completed: usize, total: usize) {
        tracing::info!(
            target: "stargen::progress",
            %stage,
            completed,
            total,
            "generation.progress"
        );
    }
}

/// Keeps every notification, in order.
#[derive(Debug, Default)]
pub struct StageRecorder {
    pub stages: Vec<GenerationStage>,
    pub completed: Vec<usize>,
    pub totals: Vec<usize>,
}

impl ProgressListener for StageRecorder {
    fn on_stage_complete(&mut self, stage: GenerationStage, completed: usize, total: usize) {
        self.stages.push(stage);
        self.completed.push(completed);
        self.totals.push(total);
    }
}

/// Trait for writing output to the user
pub trait OutputWriter {
    fn writeln(&mut self, message: &str);
}

/// Writes to stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Mock output writer for testing
    #[derive(Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn text(&self) -> String {
            self.messages.join("\n")
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }
}
