//! View-state primitives shared by the resource views.
//!
//! `ResourceState` models one remote read per view: a loading flag, the
//! last successfully loaded data, and a missing marker for detail fetches
//! that found nothing. A failed read keeps whatever data was there before.

use serde::{Deserialize, Serialize};

/// Local state for a view's primary read.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    data: Option<T>,
    loading: bool,
    missing: bool,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            missing: false,
        }
    }
}

impl<T> ResourceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the read as in flight. Prior data stays visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.missing = false;
    }

    /// Replaces the data wholesale with a successful response.
    pub fn loaded(&mut self, value: T) {
        self.data = Some(value);
        self.loading = false;
        self.missing = false;
    }

    /// Records a failed read: prior data (if any) is left intact.
    pub fn failed(&mut self) {
        self.loading = false;
    }

    /// Records a detail fetch that found no record.
    pub fn not_found(&mut self) {
        self.data = None;
        self.loading = false;
        self.missing = true;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_missing(&self) -> bool {
        self.missing
    }

    pub fn get(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }
}

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient user-facing notice (the terminal equivalent of a toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Sink for transient notices. The views emit; the shell renders.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Explicit confirmation step required before delete-class actions.
pub trait ConfirmPrompt: Send + Sync {
    /// Returns true iff the user confirmed the action.
    fn confirm(&self, message: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_read_keeps_prior_data() {
        let mut state = ResourceState::new();
        state.loaded(vec![1, 2, 3]);

        state.begin();
        assert!(state.is_loading());
        // Prior data is still there while loading
        assert_eq!(state.get(), Some(&vec![1, 2, 3]));

        state.failed();
        assert!(!state.is_loading());
        assert_eq!(state.get(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_loaded_replaces_wholesale() {
        let mut state = ResourceState::new();
        state.loaded(vec![1]);
        state.begin();
        state.loaded(vec![2, 3]);
        assert_eq!(state.get(), Some(&vec![2, 3]));
    }

    #[test]
    fn test_not_found_clears_data() {
        let mut state = ResourceState::new();
        state.loaded("job".to_string());
        state.begin();
        state.not_found();
        assert!(state.is_missing());
        assert!(state.get().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_begin_clears_missing_marker() {
        let mut state: ResourceState<String> = ResourceState::new();
        state.not_found();
        state.begin();
        assert!(!state.is_missing());
    }
}
