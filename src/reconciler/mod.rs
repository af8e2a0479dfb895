//! Keeps the pending selection and the cached file list in step with the
//! backend.
//!
//! The reconciler never touches the network itself. User actions return a
//! [`Command`] to run; the caller executes it and feeds the [`Outcome`] back
//! through [`Reconciler::apply`], which may ask for a follow-up command.

mod command;
mod dispatch;
mod in_flight;
mod notifier;

pub use command::{Command, Outcome};
pub use dispatch::Dispatcher;
use in_flight::{InFlight, InFlightKey};
pub use notifier::Notifier;

use crate::registry::{FileDescriptor, LocalFile};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

pub const MSG_SELECT_FILE: &str = "Please select a file";
pub const MSG_UPLOAD_OK: &str = "File uploaded successfully";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed";
pub const MSG_DELETE_OK: &str = "File deleted";
pub const MSG_DELETE_FAILED: &str = "Failed to delete";

pub fn delete_prompt(filename: &str) -> String {
    format!("Delete {}?", filename)
}

pub struct Reconciler<N: Notifier> {
    pending: Option<LocalFile>,
    files: Vec<FileDescriptor>,
    in_flight: InFlight,
    list_queued: bool,
    /// Names deleted while a list was running; that list may still carry them.
    deleted_during_list: HashSet<String>,
    notifier: N,
}

impl<N: Notifier> Reconciler<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            pending: None,
            files: Vec::new(),
            in_flight: InFlight::default(),
            list_queued: false,
            deleted_during_list: HashSet::new(),
            notifier,
        }
    }

    pub fn pending(&self) -> Option<&LocalFile> {
        self.pending.as_ref()
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetches the list from scratch. Also used for manual refresh.
    pub fn initialize(&mut self) -> Option<Command> {
        self.issue(Command::List)
    }

    pub fn select_file(&mut self, file: LocalFile) {
        debug!("Selected '{}' ({} bytes)", file.name, file.size);
        self.pending = Some(file);
    }

    pub fn confirm_upload(&mut self) -> Option<Command> {
        let Some(file) = self.pending.clone() else {
            self.notifier.alert(MSG_SELECT_FILE);
            return None;
        };
        self.issue(Command::Upload(file))
    }

    pub fn confirm_delete(&mut self, filename: &str) -> Option<Command> {
        if self.in_flight.contains(&InFlightKey::delete(filename)) {
            debug!("Delete of '{}' already running, ignoring", filename);
            return None;
        }
        if !self.notifier.confirm(&delete_prompt(filename)) {
            debug!("Delete of '{}' declined", filename);
            return None;
        }
        self.issue(Command::Delete(filename.to_string()))
    }

    /// Applies a finished command and returns the follow-up, if any.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Command> {
        self.in_flight.finish(&outcome.key());

        match outcome {
            Outcome::Listed(Ok(mut files)) => {
                let deleted = std::mem::take(&mut self.deleted_during_list);
                if !deleted.is_empty() {
                    files.retain(|f| !deleted.contains(&f.filename));
                }
                debug!("File list refreshed with {} entries", files.len());
                self.files = files;
                self.take_queued_list()
            }
            Outcome::Listed(Err(e)) => {
                warn!("Error fetching files: {}", e);
                self.deleted_during_list.clear();
                self.take_queued_list()
            }
            Outcome::Uploaded { file, result: Ok(()) } => {
                self.notifier.alert(MSG_UPLOAD_OK);
                if self.pending.as_ref() == Some(&file) {
                    self.pending = None;
                }
                self.issue(Command::List)
            }
            Outcome::Uploaded {
                file,
                result: Err(e),
            } => {
                error!("Upload of '{}' failed: {}", file.name, e);
                self.notifier.alert(MSG_UPLOAD_FAILED);
                None
            }
            Outcome::Deleted {
                filename,
                result: Ok(()),
            } => {
                self.files.retain(|f| f.filename != filename);
                if self.in_flight.contains(&InFlightKey::list()) {
                    self.deleted_during_list.insert(filename.clone());
                }
                info!("Removed '{}' from the file list", filename);
                self.notifier.alert(MSG_DELETE_OK);
                None
            }
            Outcome::Deleted {
                filename,
                result: Err(e),
            } => {
                error!("Delete error for '{}': {}", filename, e);
                self.notifier.alert(MSG_DELETE_FAILED);
                None
            }
        }
    }

    fn issue(&mut self, command: Command) -> Option<Command> {
        if self.in_flight.begin(command.key()) {
            return Some(command);
        }
        match command {
            // A running list may predate the change that asked for this one.
            Command::List => {
                debug!("List already running, queueing another");
                self.list_queued = true;
            }
            other => debug!("Ignoring duplicate request: {:?}", other.key()),
        }
        None
    }

    fn take_queued_list(&mut self) -> Option<Command> {
        if std::mem::take(&mut self.list_queued) {
            self.issue(Command::List)
        } else {
            None
        }
    }
}
