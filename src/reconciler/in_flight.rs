use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    List,
    Upload,
    Delete,
}

/// Identifies one running request: what it does and what it targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InFlightKey {
    pub kind: OperationKind,
    pub target: Option<String>,
}

impl InFlightKey {
    pub fn list() -> Self {
        Self {
            kind: OperationKind::List,
            target: None,
        }
    }

    /// Keyed by local path; equal names from different folders may overlap.
    pub fn upload(path: &Path) -> Self {
        Self {
            kind: OperationKind::Upload,
            target: Some(path.to_string_lossy().to_string()),
        }
    }

    pub fn delete(filename: &str) -> Self {
        Self {
            kind: OperationKind::Delete,
            target: Some(filename.to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct InFlight {
    keys: HashSet<InFlightKey>,
}

impl InFlight {
    /// Returns false if the key is already running.
    pub fn begin(&mut self, key: InFlightKey) -> bool {
        self.keys.insert(key)
    }

    pub fn finish(&mut self, key: &InFlightKey) {
        self.keys.remove(key);
    }

    pub fn contains(&self, key: &InFlightKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_rejected_until_finished() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.begin(InFlightKey::delete("cat.png")));
        assert!(!in_flight.begin(InFlightKey::delete("cat.png")));
        assert!(in_flight.begin(InFlightKey::delete("dog.png")));
        assert!(in_flight.begin(InFlightKey::upload(Path::new("/tmp/cat.png"))));
        assert_eq!(in_flight.len(), 3);

        in_flight.finish(&InFlightKey::delete("cat.png"));
        assert!(!in_flight.contains(&InFlightKey::delete("cat.png")));
        assert!(in_flight.begin(InFlightKey::delete("cat.png")));
    }
}
