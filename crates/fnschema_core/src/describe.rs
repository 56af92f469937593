//! Parameter description lookup.

use crate::annotation::MetadataItem;
use crate::docstring::Docstring;

/// Returns the human description for parameter `name`.
///
/// Sources, highest precedence first:
/// 1. the first `DocTag` metadata item,
/// 2. the first `PlainText` metadata item,
/// 3. the first `Field` item carrying a description,
/// 4. the docstring entry for `name`,
/// 5. the empty string.
#[must_use]
pub fn resolve_description(metadata: &[&MetadataItem], name: &str, docs: &Docstring) -> String {
    metadata
        .iter()
        .find_map(|item| match item {
            MetadataItem::DocTag(text) => Some(text.as_str()),
            _ => None,
        })
        .or_else(|| {
            metadata.iter().find_map(|item| match item {
                MetadataItem::PlainText(text) => Some(text.as_str()),
                _ => None,
            })
        })
        .or_else(|| {
            metadata.iter().find_map(|item| match item {
                MetadataItem::Field(field) => field.description.as_deref(),
                _ => None,
            })
        })
        .or_else(|| docs.param(name))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldInfo;

    fn docs() -> Docstring {
        Docstring::parse("Summary.\n\nArgs:\n    city: From the docstring.")
    }

    #[test]
    fn metadata_beats_docstring() {
        let item = MetadataItem::text("X");
        assert_eq!(resolve_description(&[&item], "city", &docs()), "X");
    }

    #[test]
    fn doc_tag_beats_plain_text_in_any_position() {
        let text = MetadataItem::text("plain");
        let tag = MetadataItem::doc("tagged");
        assert_eq!(resolve_description(&[&text, &tag], "city", &docs()), "tagged");
        assert_eq!(resolve_description(&[&tag, &text], "city", &docs()), "tagged");
    }

    #[test]
    fn first_of_each_kind_wins() {
        let first = MetadataItem::text("first");
        let second = MetadataItem::text("second");
        assert_eq!(resolve_description(&[&first, &second], "city", &docs()), "first");

        let first = MetadataItem::doc("first");
        let second = MetadataItem::doc("second");
        assert_eq!(resolve_description(&[&second, &first], "city", &docs()), "second");
    }

    #[test]
    fn field_description_beats_docstring_but_not_text() {
        let field = MetadataItem::from(FieldInfo::new().with_description("field"));
        let text = MetadataItem::doc("doc");
        assert_eq!(resolve_description(&[&field], "city", &docs()), "field");
        assert_eq!(resolve_description(&[&field, &text], "city", &docs()), "doc");
    }

    #[test]
    fn falls_back_to_docstring_then_empty() {
        assert_eq!(resolve_description(&[], "city", &docs()), "From the docstring.");
        assert_eq!(resolve_description(&[], "unit", &docs()), "");
    }

    #[test]
    fn ignores_unrelated_metadata() {
        let other = MetadataItem::Other;
        let members = MetadataItem::enum_class(["a"]);
        assert_eq!(resolve_description(&[&other, &members], "unit", &docs()), "");
    }
}
