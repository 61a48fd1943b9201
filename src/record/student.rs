//! Student record model

use serde::{Deserialize, Serialize};

/// Literal stored in every record's `docType` field
pub const DOC_TYPE: &str = "record";

/// A student record as stored on the ledger
///
/// Payload fields are opaque strings. No numeric coercion or validation is
/// performed on `age`, `grade` or `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "docType")]
    pub doc_type: String,
    pub name: String,
    pub age: String,
    pub grade: String,
    pub year: String,
}

impl StudentRecord {
    /// Create a record tagged with [`DOC_TYPE`]
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        grade: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: DOC_TYPE.to_string(),
            name: name.into(),
            age: age.into(),
            grade: grade.into(),
            year: year.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_doc_type() {
        let record = StudentRecord::new("Emily", "16", "76", "2");
        assert_eq!(record.doc_type, DOC_TYPE);
    }

    #[test]
    fn test_doc_type_field_name() {
        let record = StudentRecord::new("Emily", "16", "76", "2");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["docType"], DOC_TYPE);
        assert!(json.get("doc_type").is_none());
    }
}
