use crate::common::Form;

/// Read-only lookup of the configured forms by key.
#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
    forms: Vec<Form>,
}

impl FormRegistry {
    pub fn new(forms: Vec<Form>) -> Self {
        Self { forms }
    }

    /// Keys are matched exactly, including case.
    pub fn exists(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns the first form with the given key.
    pub fn lookup(&self, key: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.key == key)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl From<Vec<Form>> for FormRegistry {
    fn from(value: Vec<Form>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(key: &str, name: &str) -> Form {
        Form {
            key: key.to_string(),
            name: name.to_string(),
            to: vec!["owner@example.com".to_string()],
        }
    }

    #[test]
    fn exists_matches_configured_keys_only() {
        let registry = FormRegistry::new(vec![form("contact", "Contact Us"), form("jobs", "Jobs")]);

        assert!(registry.exists("contact"));
        assert!(registry.exists("jobs"));
        assert!(!registry.exists("missing"));
        assert!(!registry.exists("Contact"));
        assert!(!registry.exists(""));
    }

    #[test]
    fn empty_registry_has_no_forms() {
        let registry = FormRegistry::default();

        assert!(registry.is_empty());
        assert!(!registry.exists("contact"));
        assert_eq!(registry.lookup("contact"), None);
    }

    #[test]
    fn lookup_returns_first_match() {
        let registry = FormRegistry::from(vec![
            form("contact", "First"),
            form("contact", "Second"),
        ]);

        assert_eq!(registry.lookup("contact").map(|f| f.name.as_str()), Some("First"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn lookup_unknown_key_is_none() {
        let registry = FormRegistry::new(vec![form("contact", "Contact Us")]);

        assert!(registry.lookup("missing").is_none());
    }
}
