//! Synchronous backend: owns the dashboard state and exposes every
//! operation the UI can trigger as a plain method. The UI never mutates
//! entries' balance fields directly; it edits raw cells and tells the
//! backend which row changed.

pub mod domain;
pub mod storage;

use std::path::Path;

use anyhow::Result;
use log::{info, warn};
use shared::DashboardState;

use domain::aggregation::{self, Totals};
use domain::{entry_service, projector};
use storage::JsonStore;

pub struct Backend {
    store: JsonStore,
    pub state: DashboardState,
}

impl Backend {
    /// Open the platform data directory and load any previously saved
    /// state. A corrupt state file is logged and ignored rather than
    /// blocking startup.
    pub fn new() -> Result<Self> {
        let store = JsonStore::from_project_dirs()?;
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: JsonStore) -> Self {
        let state = match store.load() {
            Ok(Some(saved)) => {
                info!("Loaded saved state with {} rows", saved.rows.len());
                saved
            }
            Ok(None) => DashboardState::default(),
            Err(e) => {
                warn!("Ignoring unreadable saved state: {:#}", e);
                DashboardState::default()
            }
        };
        Self { store, state }
    }

    /// Append the next month and re-project the whole sequence.
    pub fn add_month(&mut self) {
        let entry = entry_service::build_next_entry(
            &self.state.rows,
            &self.state.income_targets,
            &self.state.start_month,
        );
        self.state.rows.push(entry);
        self.recalculate();
    }

    /// A raw field on row `index` changed: re-project that row and every
    /// row after it.
    pub fn entry_edited(&mut self, index: usize) {
        self.state.rows = projector::project(&self.state.rows, index, &self.state.balances);
    }

    /// Re-project the whole sequence from the starting balances.
    pub fn recalculate(&mut self) {
        self.entry_edited(0);
    }

    pub fn totals(&self) -> Totals {
        aggregation::aggregate(&self.state.rows, &self.state.balances)
    }

    /// Write the current state to the local state file.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.state)?;
        Ok(())
    }

    /// Write the current state to a user-picked file.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        storage::write_state(path, &self.state)?;
        info!("Exported dashboard state to {}", path.display());
        Ok(())
    }

    /// Replace the current state with the contents of a user-picked file.
    /// On any read or parse failure the in-memory state is untouched.
    pub fn import_from(&mut self, path: &Path) -> Result<()> {
        let imported = storage::read_state(path)?;
        info!(
            "Imported {} rows from {}",
            imported.rows.len(),
            path.display()
        );
        self.state = imported;
        Ok(())
    }

    /// Clear all entries, restore the starting balances, and delete the
    /// saved state file. Income targets and start month are kept.
    pub fn reset(&mut self) -> Result<()> {
        self.state.rows.clear();
        self.state.balances = shared::BalanceSnapshot::default();
        self.store.delete()?;
        info!("Dashboard reset to starting balances");
        Ok(())
    }
}
