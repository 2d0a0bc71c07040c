use tracing::debug;

use crate::domain::models::file::{StagedFile, StagedSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    DragOver,
    Drop,
}

/// A drag-and-drop event delivered to the drop target.
#[derive(Debug)]
pub struct DropEvent {
    phase: DragPhase,
    files: Vec<StagedFile>,
    default_prevented: bool,
}

impl DropEvent {
    pub fn drag_over() -> Self {
        Self {
            phase: DragPhase::DragOver,
            files: Vec::new(),
            default_prevented: false,
        }
    }

    pub fn drop(files: Vec<StagedFile>) -> Self {
        Self {
            phase: DragPhase::Drop,
            files,
            default_prevented: false,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn take_files(&mut self) -> Vec<StagedFile> {
        std::mem::take(&mut self.files)
    }
}

/// Holds the files currently selected for the next batch.
///
/// Both the picker and the drop target replace the staged set outright.
/// Nothing is filtered here; the optimizer decides what it accepts.
#[derive(Debug, Default)]
pub struct FileStagingArea {
    staged: StagedSet,
}

impl FileStagingArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staged(&self) -> &StagedSet {
        &self.staged
    }

    pub fn select_files<I>(&mut self, source: I) -> &StagedSet
    where
        I: IntoIterator<Item = StagedFile>,
    {
        self.staged = source.into_iter().collect();
        debug!(
            files = self.staged.len(),
            bytes = self.staged.total_bytes(),
            "Staged set replaced"
        );
        &self.staged
    }

    pub fn accept_drop(&mut self, event: &mut DropEvent) -> &StagedSet {
        event.prevent_default();

        match event.phase() {
            DragPhase::DragOver => &self.staged,
            DragPhase::Drop => {
                let files = event.take_files();
                self.select_files(files)
            }
        }
    }
}
