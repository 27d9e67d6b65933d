// src/comp.rs
// Composition validation: every scraped report must field the same group
// of jobs. The first accepted report establishes the composition; later
// reports either match it or get skipped by the driver.

/// Unordered collection of job identifiers, normalized by sorting.
/// Duplicates are significant (two of the same job is a different group
/// than one).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composition {
    jobs: Vec<String>,
}

impl Composition {
    pub fn new(mut jobs: Vec<String>) -> Self {
        jobs.sort();
        Self { jobs }
    }

    pub fn is_empty(&self) -> bool { self.jobs.is_empty() }
    pub fn len(&self) -> usize { self.jobs.len() }

    /// Sorted job list.
    pub fn jobs(&self) -> &[String] { &self.jobs }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompStatus {
    /// First composition seen; now the reference for the session.
    Established,
    Match,
    Mismatch,
}

/// Session-level composition check. Only the first `check` mutates state.
#[derive(Default)]
pub struct CompCheck {
    established: Option<Composition>,
}

impl CompCheck {
    pub fn new() -> Self { Self::default() }

    pub fn check(&mut self, comp: &Composition) -> CompStatus {
        match &self.established {
            None => {
                self.established = Some(comp.clone());
                CompStatus::Established
            }
            Some(reference) if reference == comp => CompStatus::Match,
            Some(_) => CompStatus::Mismatch,
        }
    }

    pub fn established(&self) -> Option<&Composition> {
        self.established.as_ref()
    }
}
