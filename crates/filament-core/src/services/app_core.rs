//! `AppCore` - the primary application facade.
//!
//! Frontends receive an `AppCore` instance and use it to access all
//! functionality.

use crate::ports::Repos;

use super::{FilamentService, FilamentTypeService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete
/// repositories.
///
/// # Example
///
/// ```ignore
/// let repos = StoreFactory::build_repos(&paths);
/// let core = AppCore::new(repos);
///
/// let spools = core.filaments().get_all_filaments()?;
/// ```
pub struct AppCore {
    filaments: FilamentService,
    filament_types: FilamentTypeService,
}

impl AppCore {
    /// Create a new `AppCore` over the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            filaments: FilamentService::new(repos.filaments, repos.filament_types.clone()),
            filament_types: FilamentTypeService::new(repos.filament_types),
        }
    }

    /// Access the filament (spool) service.
    pub const fn filaments(&self) -> &FilamentService {
        &self.filaments
    }

    /// Access the filament type service.
    pub const fn filament_types(&self) -> &FilamentTypeService {
        &self.filament_types
    }
}
