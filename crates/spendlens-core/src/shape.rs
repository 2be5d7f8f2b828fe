//! Data shape classification
//!
//! Files come in two historical vocabularies: the legacy seed dataset and
//! files produced by the statement upload parser. The shape decides which
//! label table is used for display.

use tracing::debug;

use crate::models::{CategoryRecord, DataShape};

/// Legacy vocabulary (matched against the lower-cased label)
pub const SEED_KEYWORDS: &[&str] = &[
    "продукты",
    "развлечения",
    "одежда",
    "услуги",
    "медицина",
    "образование",
    "покупки",
];

/// Upload parser vocabulary (matched against the label as-is)
pub const NEW_KEYWORDS: &[&str] = &["Пополнения", "Такси (YANDEX.GO)", "Переводы"];

/// Classify a file by its category vocabulary
///
/// Seed is checked first, so a file that matches both vocabularies is `Seed`.
/// An empty list, or one matching neither, is `NewUpload`.
pub fn classify_shape(records: &[CategoryRecord]) -> DataShape {
    let shape = if records.iter().any(is_seed_label) {
        DataShape::Seed
    } else {
        DataShape::NewUpload
    };
    debug!(records = records.len(), shape = shape.as_str(), "Classified data shape");
    shape
}

/// Whether any record carries an upload-parser marker
pub fn has_new_vocabulary(records: &[CategoryRecord]) -> bool {
    records
        .iter()
        .any(|r| NEW_KEYWORDS.iter().any(|kw| r.category.contains(kw)))
}

fn is_seed_label(record: &CategoryRecord) -> bool {
    let label = record.category.to_lowercase();
    SEED_KEYWORDS.iter().any(|kw| label.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(category: &str) -> CategoryRecord {
        CategoryRecord::new(category, -100.0)
    }

    #[test]
    fn test_empty_is_new_upload() {
        assert_eq!(classify_shape(&[]), DataShape::NewUpload);
        assert!(!has_new_vocabulary(&[]));
    }

    #[test]
    fn test_seed_case_insensitive() {
        assert_eq!(classify_shape(&[rec("ПРОДУКТЫ")]), DataShape::Seed);
        assert_eq!(classify_shape(&[rec("Коммунальные услуги")]), DataShape::Seed);
        assert_eq!(classify_shape(&[rec("Покупки онлайн")]), DataShape::Seed);
    }

    #[test]
    fn test_new_upload_vocabulary() {
        let records = vec![rec("Пополнения"), rec("Такси (YANDEX.GO)")];
        assert_eq!(classify_shape(&records), DataShape::NewUpload);
        assert!(has_new_vocabulary(&records));
    }

    #[test]
    fn test_new_markers_are_case_sensitive() {
        assert!(!has_new_vocabulary(&[rec("пополнения")]));
        assert!(!has_new_vocabulary(&[rec("Такси (yandex.go)")]));
    }

    #[test]
    fn test_ambiguous_file_defaults_to_seed() {
        // "Продукты" is seed vocabulary even though upload files use it too
        let records = vec![rec("Пополнения"), rec("Продукты")];
        assert_eq!(classify_shape(&records), DataShape::Seed);
        assert!(has_new_vocabulary(&records));
    }

    #[test]
    fn test_unknown_vocabulary_is_new_upload() {
        let records = vec![rec("Кафе"), rec("misc")];
        assert_eq!(classify_shape(&records), DataShape::NewUpload);
        assert!(!has_new_vocabulary(&records));
    }
}
