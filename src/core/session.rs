// Explicit session context replacing ambient globals: the text-entry
// counter, the current-model slot, and the last click position each have
// exactly one writer (keyboard wiring, model swap, click wiring).

use super::scene::NodeId;

pub const TEXT_ENTRY_CAP: u32 = 10;

/// Outcome of attempting to record a confirmed text entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryOutcome {
    /// Entry accepted. `swap_now` is true exactly once, on the entry that
    /// hits the cap.
    Created { swap_now: bool },
    /// Cap already reached; the attempt is silently ignored.
    CapReached,
}

pub struct Session {
    entry_count: u32,
    swap_started: bool,
    /// Root id of the primary displayed asset, once the initial load lands.
    pub current_model: Option<NodeId>,
    /// Last click position in CSS pixels; where the next input box opens.
    pub click_pos: (f32, f32),
}

impl Session {
    pub fn new() -> Self {
        Self {
            entry_count: 0,
            swap_started: false,
            current_model: None,
            click_pos: (0.0, 0.0),
        }
    }

    pub fn entry_count(&self) -> u32 {
        self.entry_count
    }

    pub fn at_cap(&self) -> bool {
        self.entry_count >= TEXT_ENTRY_CAP
    }

    /// Count a successful creation. The counter is monotonic for the session
    /// and the model swap fires on the capping entry only.
    pub fn register_entry(&mut self) -> EntryOutcome {
        if self.at_cap() {
            return EntryOutcome::CapReached;
        }
        self.entry_count += 1;
        let swap_now = self.entry_count == TEXT_ENTRY_CAP && !self.swap_started;
        if swap_now {
            self.swap_started = true;
        }
        EntryOutcome::Created { swap_now }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
