use crate::records::fixture::FixtureMetadata;
use indexmap::IndexMap;

/// Fixture name → outcome record, kept in declaration order.
pub type Manifest = IndexMap<String, FixtureMetadata>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixture::FixtureExpectation;

    fn expectation() -> FixtureExpectation {
        FixtureExpectation {
            description: "d".into(),
            station: "KLWX".into(),
            expected_vcp: None,
            expected_message_type: None,
            notes: String::new(),
            expect_failure: true,
        }
    }

    fn names(manifest: &Manifest) -> Vec<&str> {
        manifest.keys().map(String::as_str).collect()
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut manifest = Manifest::new();
        manifest.insert("b.ar2v".into(), FixtureMetadata::expected_failure("b.ar2v", &expectation()));
        manifest.insert("a.ar2v".into(), FixtureMetadata::expected_failure("a.ar2v", &expectation()));
        let text = serde_json::to_string(&manifest).unwrap();
        let b = text.find("\"b.ar2v\":").unwrap();
        let a = text.find("\"a.ar2v\":").unwrap();
        assert!(b < a);

        let back: Manifest = serde_json::from_str(&text).unwrap();
        assert_eq!(names(&back), vec!["b.ar2v", "a.ar2v"]);
    }

    #[test]
    fn reinserting_replaces_in_place() {
        let mut manifest = Manifest::new();
        manifest.insert("a".into(), FixtureMetadata::expected_failure("first", &expectation()));
        manifest.insert("b".into(), FixtureMetadata::expected_failure("b", &expectation()));
        manifest.insert("a".into(), FixtureMetadata::expected_failure("second", &expectation()));
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest["a"].filename(), "second");
        assert_eq!(names(&manifest), vec!["a", "b"]);
    }
}
