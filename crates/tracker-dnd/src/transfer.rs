//! Gesture-scoped data, as the platform hands it to sources and targets.

/// Operations a source permits for its drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectAllowed {
    /// The dragged item leaves its origin.
    Move,
    /// Platform default until a source narrows it.
    #[default]
    All,
}

/// Key/value data attached to one drag gesture.
///
/// Kinds keep the order in which they were first set; `types()[0]` is what
/// targets inspect while hovering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: EffectAllowed,
}

impl DataTransfer {
    /// Creates an empty transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets data for `kind`, replacing any previous value in place.
    pub fn set_data(&mut self, kind: impl Into<String>, value: impl Into<String>) {
        let kind = kind.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((kind, value)),
        }
    }

    /// Gets the data stored under `kind`.
    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, v)| v.as_str())
    }

    /// Declared kinds, in the order they were set.
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Returns the permitted operation.
    pub fn effect_allowed(&self) -> EffectAllowed {
        self.effect_allowed
    }

    /// Sets the permitted operation.
    pub fn set_effect_allowed(&mut self, effect: EffectAllowed) {
        self.effect_allowed = effect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_keep_first_set_order() {
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/plain", "p1");
        transfer.set_data("text/uri-list", "https://example.com");
        transfer.set_data("text/plain", "p2");

        assert_eq!(transfer.types(), vec!["text/plain", "text/uri-list"]);
        assert_eq!(transfer.get_data("text/plain"), Some("p2"));
    }

    #[test]
    fn test_missing_kind() {
        let transfer = DataTransfer::new();
        assert!(transfer.types().is_empty());
        assert_eq!(transfer.get_data("text/plain"), None);
    }

    #[test]
    fn test_effect_defaults_to_all() {
        let mut transfer = DataTransfer::new();
        assert_eq!(transfer.effect_allowed(), EffectAllowed::All);

        transfer.set_effect_allowed(EffectAllowed::Move);
        assert_eq!(transfer.effect_allowed(), EffectAllowed::Move);
    }
}
