use rahnuma_model::ProgramId;

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// Result of a remove attempt. An absent id is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotSaved,
}

/// The set of programs a session has bookmarked, in save order.
///
/// Membership is idempotent: saving an id twice never duplicates it.
#[derive(Debug, Clone, Default)]
pub struct SavedPrograms {
    ids: Vec<ProgramId>,
}

impl SavedPrograms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, id: ProgramId) -> SaveOutcome {
        if self.contains(id) {
            return SaveOutcome::AlreadySaved;
        }
        self.ids.push(id);
        SaveOutcome::Saved
    }

    pub fn remove(&mut self, id: ProgramId) -> RemoveOutcome {
        match self.ids.iter().position(|saved| *saved == id) {
            Some(index) => {
                self.ids.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotSaved,
        }
    }

    pub fn contains(&self, id: ProgramId) -> bool {
        self.ids.contains(&id)
    }

    /// Saved ids in the order they were saved.
    pub fn ids(&self) -> &[ProgramId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
