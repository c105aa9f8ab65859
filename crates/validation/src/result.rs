use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field name → message, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    /// Record an error for `field`. A field keeps its first message.
    pub(crate) fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, msg)| (*name, msg.as_str()))
    }

    pub fn first(&self) -> Option<(&'static str, &str)> {
        self.iter().next()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

/// Outcome of validating one field or one form.
///
/// Built once per call and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: FieldErrors,
}

impl ValidationResult {
    pub(crate) fn from_errors(errors: FieldErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message for `field`, if it failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_first_message() {
        let mut errors = FieldErrors::default();
        errors.insert("name", "Name is required");
        errors.insert("email", "Invalid email");
        errors.insert("name", "ignored");

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "email"]);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.first(), Some(("name", "Name is required")));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut errors = FieldErrors::default();
        errors.insert("phone", "Invalid phone");
        errors.insert("email", "Invalid email");
        let result = ValidationResult::from_errors(errors);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"is_valid":false,"errors":{"phone":"Invalid phone","email":"Invalid email"}}"#
        );
    }

    #[test]
    fn no_errors_means_valid() {
        let result = ValidationResult::from_errors(FieldErrors::default());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }
}
