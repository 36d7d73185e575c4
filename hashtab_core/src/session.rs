//! Per-file inspection sessions
//!
//! A session owns the digest result slots for one selected file. It is
//! discarded and rebuilt when the selection changes; no slot outlives it.

use crate::EngineConfig;
use crate::compare::{self, ComparisonOutcome};
use crate::error::{AlgorithmError, Error, IoError, Result};
use crate::hashing::{AlgorithmDescriptor, AlgorithmRegistry, DigestEngine};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Outcome of a compute trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputeOutcome {
    /// Freshly computed by this call
    Computed(String),
    /// A previous computation already produced this value
    AlreadyComputed(String),
    /// A computation for this algorithm is still in flight
    AlreadyRunning,
}

/// Observable state of one algorithm's result slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    NotComputed,
    Running,
    Computed(String),
    Failed(String),
}

enum SlotState {
    Idle,
    Running,
    Done(String),
    Failed(String),
}

struct Slot {
    descriptor: AlgorithmDescriptor,
    state: Mutex<SlotState>,
}

/// Inspection session for one selected file
///
/// Slots are written at most once: a successful computation moves a slot
/// from unset to its final value and it never changes again. A failed
/// computation leaves the value unset and may be re-triggered manually.
pub struct FileSession {
    path: PathBuf,
    file_name: String,
    engine: DigestEngine,
    slots: Vec<Slot>,
}

impl std::fmt::Debug for FileSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSession")
            .field("path", &self.path)
            .field("algorithms", &self.slots.len())
            .finish()
    }
}

impl FileSession {
    /// Open a session for the file at `path`
    ///
    /// The path must name an existing regular file; directories and other
    /// file types are rejected. One result slot is created per registry
    /// descriptor, in presentation order.
    pub fn open(path: impl AsRef<Path>, config: &EngineConfig) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .map_err(|e| Error::Io(IoError::from_std(e).with_path(path)))?;
        if !metadata.is_file() {
            return Err(Error::Io(IoError::not_regular_file(path)));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let slots = AlgorithmRegistry::global()
            .descriptors()
            .into_iter()
            .map(|descriptor| Slot {
                descriptor,
                state: Mutex::new(SlotState::Idle),
            })
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            engine: DigestEngine::new(config),
            slots,
        })
    }

    /// Path of the inspected file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the inspected file
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Descriptors in presentation order
    pub fn descriptors(&self) -> Vec<&AlgorithmDescriptor> {
        self.slots.iter().map(|slot| &slot.descriptor).collect()
    }

    fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|slot| slot.descriptor.id().eq_ignore_ascii_case(id))
    }

    /// Current status of one algorithm's slot
    pub fn status(&self, id: &str) -> Option<SlotStatus> {
        let slot = self.slot(id)?;
        let state = slot.state.lock().unwrap();
        Some(match &*state {
            SlotState::Idle => SlotStatus::NotComputed,
            SlotState::Running => SlotStatus::Running,
            SlotState::Done(hex) => SlotStatus::Computed(hex.clone()),
            SlotState::Failed(message) => SlotStatus::Failed(message.clone()),
        })
    }

    /// Trigger the digest computation for `id`
    ///
    /// A completed slot replays its value and an in-flight computation is
    /// reported instead of restarted, so re-triggering is always safe.
    /// Different algorithms may be computed concurrently from separate
    /// threads; each computation opens its own file handle and no lock is
    /// held while reading.
    pub fn compute(&self, id: &str) -> Result<ComputeOutcome> {
        let slot = self
            .slot(id)
            .ok_or_else(|| AlgorithmError::unsupported(id))?;

        {
            let mut state = slot.state.lock().unwrap();
            match &*state {
                SlotState::Running => return Ok(ComputeOutcome::AlreadyRunning),
                SlotState::Done(hex) => return Ok(ComputeOutcome::AlreadyComputed(hex.clone())),
                SlotState::Idle | SlotState::Failed(_) => *state = SlotState::Running,
            }
        }

        match self
            .engine
            .digest_file(slot.descriptor.internal_name(), &self.path)
        {
            Ok(digest) => {
                let mut state = slot.state.lock().unwrap();
                *state = SlotState::Done(digest.hex.clone());
                debug!("{} computed for {}", slot.descriptor.id(), self.file_name);
                Ok(ComputeOutcome::Computed(digest.hex))
            }
            Err(err) => {
                let mut state = slot.state.lock().unwrap();
                *state = SlotState::Failed(err.to_string());
                warn!(
                    "{} failed for {}: {err}",
                    slot.descriptor.id(),
                    self.file_name
                );
                Err(err)
            }
        }
    }

    /// Evaluate a user-entered digest against the current results
    ///
    /// Purely reads the current slot snapshot; call it on every change of
    /// the comparison input.
    pub fn evaluate(&self, user_input: &str) -> ComparisonOutcome {
        let snapshot: Vec<(&AlgorithmDescriptor, Option<String>)> = self
            .slots
            .iter()
            .map(|slot| {
                let state = slot.state.lock().unwrap();
                let value = match &*state {
                    SlotState::Done(hex) => Some(hex.clone()),
                    _ => None,
                };
                (&slot.descriptor, value)
            })
            .collect();
        compare::evaluate(
            user_input,
            snapshot
                .iter()
                .map(|(descriptor, value)| (*descriptor, value.as_deref())),
        )
    }
}
