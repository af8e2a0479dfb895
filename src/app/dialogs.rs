use crate::reconciler::Notifier;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Native message boxes; each call blocks until the user dismisses it.
pub struct DialogNotifier {
    title: String,
}

impl DialogNotifier {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Notifier for DialogNotifier {
    fn alert(&self, message: &str) {
        MessageDialog::new()
            .set_title(self.title.as_str())
            .set_description(message)
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm(&self, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_title(self.title.as_str())
            .set_description(message)
            .set_level(MessageLevel::Warning)
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }
}
