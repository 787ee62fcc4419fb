//! Parse the generated fixtures back with the rendering library's own
//! reader and check the fixture literals survived the trip to disk.

use std::path::Path;

use oxidize_pdf::parser::PdfReader;
use oxidize_pdf::text::TextExtractor;
use tempfile::TempDir;
use vault_fixtures::{generate, DocumentKind};

fn extract_text(path: &Path) -> String {
    let document = PdfReader::open_document(path).expect("open generated PDF");
    let mut extractor = TextExtractor::new();
    let pages = extractor
        .extract_from_document(&document)
        .expect("extract text");
    pages
        .iter()
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_policy_roundtrip() {
    let dir = TempDir::new().expect("create temp dir");
    let path = generate(DocumentKind::LifeInsurancePolicy, dir.path()).expect("generate policy");

    let text = extract_text(&path);
    assert!(text.contains("Legacy Life & Casualty"));
    assert!(text.contains("LH-99887766"));
    assert!(text.contains("John Robert Smith"));
    assert!(text.contains("Whole Life Insurance"));
    assert!(text.contains("TEST DOCUMENT"));
}

#[test]
fn test_will_roundtrip() {
    let dir = TempDir::new().expect("create temp dir");
    let path = generate(DocumentKind::LastWillAndTestament, dir.path()).expect("generate will");

    let text = extract_text(&path);
    assert!(text.contains("LAST WILL AND TESTAMENT"));
    assert!(text.contains("Sarah Smith-Jones"));
    assert!(text.contains("CLAUSE 4: FUNERAL ARRANGEMENTS"));
    assert!(text.contains("Notary Public"));
}

#[test]
fn test_state_id_roundtrip() {
    let dir = TempDir::new().expect("create temp dir");
    let path = generate(DocumentKind::StateIdCard, dir.path()).expect("generate state ID");

    let text = extract_text(&path);
    assert!(text.contains("State of Example"));
    assert!(text.contains("Driver License"));
    assert!(text.contains("EX-1987654321"));
    assert!(text.contains("123 Compassion Way"));
}

#[test]
fn test_generated_documents_parse_with_expected_page_counts() {
    let dir = TempDir::new().expect("create temp dir");

    for kind in DocumentKind::ALL {
        let path = generate(kind, dir.path()).expect("generate fixture");
        let document = PdfReader::open_document(&path).expect("open generated PDF");
        assert!(
            document.page_count().expect("read page count") >= 1,
            "{kind} rendered no pages"
        );
    }
}
