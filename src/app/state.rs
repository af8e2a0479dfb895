use derivative::Derivative;

/// Window-only state; file data lives in the reconciler.
#[derive(Derivative, Clone)]
#[derivative(Debug, Default)]
pub struct UiState {
    pub backend_label: String,
    pub error_message: Option<String>,
    /// Load image previews from their URLs instead of showing icons.
    #[derivative(Default(value = "true"))]
    pub show_previews: bool,
}

impl UiState {
    pub fn new(backend_label: String) -> Self {
        Self {
            backend_label,
            ..Self::default()
        }
    }

    pub fn status_text(&self, file_count: usize, running: usize) -> String {
        let files = match file_count {
            1 => "1 file".to_string(),
            n => format!("{} files", n),
        };
        if running == 0 {
            files
        } else {
            format!("{} | ⏳ {} request(s) running", files, running)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = UiState::new("http://localhost:5000/".to_string());
        assert!(state.show_previews);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_status_text() {
        let state = UiState::default();
        assert_eq!(state.status_text(1, 0), "1 file");
        assert_eq!(state.status_text(3, 2), "3 files | ⏳ 2 request(s) running");
    }
}
