use core_types::Router;
use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    index: usize,
}

/// Router keeping a browser-like history stack in memory.
#[derive(Debug)]
pub struct HistoryRouter {
    history: Mutex<History>,
}

impl HistoryRouter {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![start.into()],
                index: 0,
            }),
        }
    }

    pub fn back(&self) -> bool {
        let mut history = self.history.lock();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    pub fn forward(&self) -> bool {
        let mut history = self.history.lock();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }

    /// Number of history entries. The start entry is never dropped, so this
    /// is at least one.
    pub fn depth(&self) -> usize {
        self.history.lock().entries.len()
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> String {
        let history = self.history.lock();
        history.entries[history.index].clone()
    }

    fn navigate(&self, path: &str) {
        let mut history = self.history.lock();
        if history.entries[history.index] == path {
            return;
        }
        let keep = history.index + 1;
        history.entries.truncate(keep);
        history.entries.push(path.to_string());
        history.index = keep;
        debug!(path, depth = history.entries.len(), "navigated");
    }
}
