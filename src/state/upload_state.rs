// src/state/upload_state.rs
use std::path::PathBuf;

/// A user-selected file that passed validation and is waiting for Analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Default)]
pub struct UploadState {
    pub candidate: Option<UploadCandidate>,
    /// Validation error or the message of a failed analyze call.
    pub error: Option<String>,
}

impl UploadState {
    /// Accepts a dropped or picked file. The extension check is a
    /// case-sensitive match on `.csv`; a rejected file discards any prior
    /// candidate rather than leaving a stale one behind the error.
    pub fn select_file(&mut self, path: PathBuf) {
        self.error = None;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        if !name.ends_with(".csv") {
            self.candidate = None;
            self.error = Some("Please upload a CSV file".to_string());
            return;
        }
        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        self.candidate = Some(UploadCandidate { path, name, size });
    }

    pub fn can_analyze(&self) -> bool {
        self.candidate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_csv() {
        let mut state = UploadState::default();
        state.select_file(PathBuf::from("reviews.csv"));
        assert!(state.can_analyze());
        assert_eq!(state.candidate.as_ref().unwrap().name, "reviews.csv");
        assert!(state.error.is_none());
    }

    #[test]
    fn rejects_uppercase_extension() {
        let mut state = UploadState::default();
        state.select_file(PathBuf::from("data.CSV"));
        assert!(!state.can_analyze());
        assert_eq!(state.error.as_deref(), Some("Please upload a CSV file"));
    }

    #[test]
    fn rejects_csv_prefix_with_other_extension() {
        let mut state = UploadState::default();
        state.select_file(PathBuf::from("data.csv.txt"));
        assert!(!state.can_analyze());
        assert!(state.error.is_some());
    }

    #[test]
    fn rejected_file_discards_previous_candidate() {
        let mut state = UploadState::default();
        state.select_file(PathBuf::from("reviews.csv"));
        assert!(state.can_analyze());

        state.select_file(PathBuf::from("notes.txt"));
        assert!(!state.can_analyze());
        assert!(state.candidate.is_none());
    }

    #[test]
    fn selecting_a_new_file_clears_a_prior_error() {
        let mut state = UploadState::default();
        state.select_file(PathBuf::from("notes.txt"));
        assert!(state.error.is_some());

        state.select_file(PathBuf::from("reviews.csv"));
        assert!(state.error.is_none());
        assert!(state.can_analyze());
    }
}
