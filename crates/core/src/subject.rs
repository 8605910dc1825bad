//! Versioned subjects
//!
//! The engine never loads a subject's attributes. It only needs the
//! subject's identity (to scope store queries) and its current iteration
//! pointer (to answer navigation questions).

use crate::types::{Iteration, SubjectId};
use serde::{Deserialize, Serialize};

/// An entity owning a version history
pub trait Subject {
    /// Identity used to scope store queries
    fn subject_id(&self) -> SubjectId;

    /// Iteration the subject currently sits at
    fn current_iteration(&self) -> Iteration;
}

/// Plain subject position: identity plus current iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectHandle {
    /// Subject identity
    pub id: SubjectId,
    /// Current iteration pointer
    pub current: Iteration,
}

impl SubjectHandle {
    /// Create a handle positioned at `current`
    pub fn new(id: SubjectId, current: Iteration) -> Self {
        Self { id, current }
    }

    /// Same subject, moved to another iteration
    pub fn at(self, current: Iteration) -> Self {
        Self { current, ..self }
    }
}

impl Subject for SubjectHandle {
    fn subject_id(&self) -> SubjectId {
        self.id
    }

    fn current_iteration(&self) -> Iteration {
        self.current
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    fn subject_id(&self) -> SubjectId {
        (**self).subject_id()
    }

    fn current_iteration(&self) -> Iteration {
        (**self).current_iteration()
    }
}
