use crate::config::settings::Settings;
use crate::core::{FieldClassifier, FieldDefinition, FieldKind};
use std::collections::HashSet;

/// Classifies fields by their external type name. Names are compared
/// case-insensitively; unknown types are plain fields.
#[derive(Debug, Clone)]
pub struct TypeNameClassifier {
    simple_repeaters: HashSet<String>,
    nested_repeaters: HashSet<String>,
}

impl TypeNameClassifier {
    pub fn new<S, N>(simple_repeaters: S, nested_repeaters: N) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            simple_repeaters: normalize(simple_repeaters),
            nested_repeaters: normalize(nested_repeaters),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.fields.simple_repeaters,
            &settings.fields.nested_repeaters,
        )
    }
}

impl Default for TypeNameClassifier {
    fn default() -> Self {
        Self::new(["matrix"], ["super_table"])
    }
}

impl FieldClassifier for TypeNameClassifier {
    fn classify(&self, field: &FieldDefinition) -> FieldKind {
        let field_type = field.field_type.to_lowercase();
        if self.nested_repeaters.contains(&field_type) {
            FieldKind::NestedRepeater
        } else if self.simple_repeaters.contains(&field_type) {
            FieldKind::SimpleRepeater
        } else {
            FieldKind::Scalar
        }
    }
}

fn normalize<I>(names: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kinds() {
        let classifier = TypeNameClassifier::default();
        assert_eq!(
            classifier.classify(&FieldDefinition::new("body", "plain_text")),
            FieldKind::Scalar
        );
        assert_eq!(
            classifier.classify(&FieldDefinition::new("blocks", "Matrix")),
            FieldKind::SimpleRepeater
        );
        assert_eq!(
            classifier.classify(&FieldDefinition::new("sections", "super_table")),
            FieldKind::NestedRepeater
        );
    }

    #[test]
    fn test_custom_type_names() {
        let classifier = TypeNameClassifier::new(["neo"], ["layout_builder", " Grid "]);
        assert_eq!(
            classifier.classify(&FieldDefinition::new("a", "neo")),
            FieldKind::SimpleRepeater
        );
        assert_eq!(
            classifier.classify(&FieldDefinition::new("b", "grid")),
            FieldKind::NestedRepeater
        );
        assert_eq!(
            classifier.classify(&FieldDefinition::new("c", "matrix")),
            FieldKind::Scalar
        );
    }
}
