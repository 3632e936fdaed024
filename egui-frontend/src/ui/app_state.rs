//! # App State Module
//!
//! Central state for the dashboard app: the backend handle, the transient
//! success/error messages, and the reset confirmation flag. All UI
//! components are `impl` blocks on [`FinanceDashboardApp`], so everything
//! the screen shows flows through this one struct.

use anyhow::Result;
use log::{error, info};

use crate::backend::storage;
use crate::backend::Backend;

/// Main application struct for the egui finance dashboard.
pub struct FinanceDashboardApp {
    pub backend: Backend,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub show_reset_confirmation: bool,
}

impl FinanceDashboardApp {
    pub fn new() -> Result<Self> {
        let backend = Backend::new()?;
        Ok(Self {
            backend,
            error_message: None,
            success_message: None,
            show_reset_confirmation: false,
        })
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    // --- Action handlers, wired to the header buttons ---

    pub fn save_clicked(&mut self) {
        self.clear_messages();
        match self.backend.save() {
            Ok(()) => self.success_message = Some("Saved locally".to_string()),
            Err(e) => {
                error!("Save failed: {:#}", e);
                self.error_message = Some(format!("Save failed: {}", e));
            }
        }
    }

    pub fn export_clicked(&mut self) {
        self.clear_messages();
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(storage::default_export_name())
            .save_file()
        else {
            return; // dialog cancelled
        };
        match self.backend.export_to(&path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                error!("Export failed: {:#}", e);
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    pub fn import_clicked(&mut self) {
        self.clear_messages();
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return; // dialog cancelled
        };
        match self.backend.import_from(&path) {
            Ok(()) => {
                self.success_message = Some(format!("Imported {}", path.display()));
            }
            Err(e) => {
                error!("Import failed: {:#}", e);
                self.error_message = Some(format!("Invalid JSON file: {}", e));
            }
        }
    }

    pub fn reset_confirmed(&mut self) {
        self.clear_messages();
        self.show_reset_confirmation = false;
        match self.backend.reset() {
            Ok(()) => {
                info!("User reset all data");
                self.success_message = Some("All data reset".to_string());
            }
            Err(e) => {
                error!("Reset failed: {:#}", e);
                self.error_message = Some(format!("Reset failed: {}", e));
            }
        }
    }
}
