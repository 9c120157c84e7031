use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use validator::Validate;

use crate::models::Volunteer;

/// Errors that can occur when reading volunteer storage
///
/// `Display`/`Error` are implemented by hand because the `source` field of
/// `SourceFailure` holds the source's *name*, which thiserror's derive would
/// otherwise treat as the error's cause.
#[derive(Debug)]
pub enum DirectoryError {
    SourceFailure { source: String, message: String },

    InvalidProfile(validator::ValidationErrors),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::SourceFailure { source, message } => {
                write!(f, "volunteer source '{source}' failed: {message}")
            }
            DirectoryError::InvalidProfile(errors) => {
                write!(f, "invalid volunteer profile: {errors}")
            }
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::SourceFailure { .. } => None,
            DirectoryError::InvalidProfile(errors) => Some(errors),
        }
    }
}

impl From<validator::ValidationErrors> for DirectoryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DirectoryError::InvalidProfile(errors)
    }
}

/// A backend that can list volunteer profiles
///
/// Deployments wire in one source per store they use; the in-memory
/// registry below is the reference implementation. Failures propagate to
/// the caller instead of degrading to an empty list.
pub trait VolunteerSource: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    fn volunteers(&self) -> Result<Vec<Volunteer>, DirectoryError>;
}

impl<S: VolunteerSource + ?Sized> VolunteerSource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn volunteers(&self) -> Result<Vec<Volunteer>, DirectoryError> {
        (**self).volunteers()
    }
}

/// In-memory volunteer registry
///
/// Registration validates the profile and upserts by name, so a volunteer
/// re-registering updates their existing entry in place.
pub struct InMemoryVolunteers {
    entries: RwLock<Vec<Volunteer>>,
}

impl InMemoryVolunteers {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn with_volunteers(volunteers: Vec<Volunteer>) -> Self {
        Self {
            entries: RwLock::new(volunteers),
        }
    }

    /// Validate and store a profile, replacing any entry with the same name
    pub fn register(&self, volunteer: Volunteer) -> Result<(), DirectoryError> {
        volunteer.validate()?;

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match entries.iter_mut().find(|v| v.name == volunteer.name) {
            Some(existing) => {
                tracing::debug!("Updating volunteer profile for {}", volunteer.name);
                *existing = volunteer;
            }
            None => {
                tracing::debug!("Registering new volunteer {}", volunteer.name);
                entries.push(volunteer);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryVolunteers {
    fn default() -> Self {
        Self::new()
    }
}

impl VolunteerSource for InMemoryVolunteers {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn volunteers(&self) -> Result<Vec<Volunteer>, DirectoryError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.clone())
    }
}

/// Ordered collection of volunteer sources
///
/// Sources are queried in registration order and their lists concatenated.
/// The order is part of the matching contract: distance ties keep the
/// earliest candidate, so reordering sources can change match results.
pub struct VolunteerDirectory {
    sources: Vec<Box<dyn VolunteerSource>>,
}

impl VolunteerDirectory {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn add_source<S>(&mut self, source: S)
    where
        S: VolunteerSource + 'static,
    {
        self.sources.push(Box::new(source));
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// All volunteers from every source, preserving source order
    pub fn collect_all(&self) -> Result<Vec<Volunteer>, DirectoryError> {
        let mut all = Vec::new();
        for source in &self.sources {
            let mut batch = source.volunteers()?;
            tracing::debug!(
                "Source {} contributed {} volunteers",
                source.name(),
                batch.len()
            );
            all.append(&mut batch);
        }
        Ok(all)
    }

    /// First volunteer registered under the given name, if any
    pub fn find_by_name(&self, name: &str) -> Result<Option<Volunteer>, DirectoryError> {
        Ok(self.collect_all()?.into_iter().find(|v| v.name == name))
    }
}

impl Default for VolunteerDirectory {
    fn default() -> Self {
        Self::new()
    }
}
