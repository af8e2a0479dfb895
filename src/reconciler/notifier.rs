/// Blocking user notifications.
///
/// Both calls return only after the user dismissed the prompt.
pub trait Notifier {
    fn alert(&self, message: &str);

    /// Asks a yes/no question; `true` means the user agreed.
    fn confirm(&self, message: &str) -> bool;
}
