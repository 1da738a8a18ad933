use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use parrot::config::ParrotConfig;
use parrot::lexicon::memory::InMemoryLexicon;
use parrot::service::{ParaphraseService, ServiceError};
use parrot::upload::UploadGateway;

fn lexicon() -> Arc<InMemoryLexicon> {
    Arc::new(InMemoryLexicon::from_entries([
        ("cat", vec![vec!["feline"], vec!["tomcat"], vec!["pussycat"]]),
        ("story", vec![vec!["tale"], vec!["narrative"]]),
    ]))
}

#[test]
fn test_upload_extract_paraphrase_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = Arc::new(ParrotConfig::new().with_upload_dir(dir.path()));
    let service = ParaphraseService::new(config, lexicon());
    let mut rng = StdRng::seed_from_u64(4);

    let response = service.process_upload("pets.txt", b"A story about a cat.", &mut rng)?;

    assert_eq!(response.original, "A story about a cat.");
    assert_eq!(response.easy, "A tale about a feline.");
    // Four text strings, never an error, for a well-formed upload.
    assert!(!response.medium.is_empty());
    assert!(!response.hard.is_empty());
    Ok(())
}

#[test]
fn test_rejections_before_any_core_logic() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(
        ParrotConfig::new()
            .with_upload_dir(dir.path())
            .with_max_upload_bytes(8),
    );
    let service = ParaphraseService::new(config, lexicon());
    let mut rng = StdRng::seed_from_u64(4);

    assert!(matches!(
        service.process_upload("", b"text", &mut rng),
        Err(ServiceError::NoFileProvided)
    ));
    assert!(matches!(
        service.process_upload("doc.docx", b"text", &mut rng),
        Err(ServiceError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        service.process_upload("doc.txt", b"far too many bytes", &mut rng),
        Err(ServiceError::PayloadTooLarge { .. })
    ));

    // Nothing was stored for any rejected upload.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_blank_document_surfaces_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(ParrotConfig::new().with_upload_dir(dir.path()));
    let service = ParaphraseService::new(config, lexicon());
    let mut rng = StdRng::seed_from_u64(4);

    let err = service
        .process_upload("blank.txt", b" \n \t ", &mut rng)
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyDocument));
    assert_eq!(err.to_string(), "The document contains no text to paraphrase.");
}

#[test]
fn test_malformed_pdf_surfaces_extraction_failed() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(ParrotConfig::new().with_upload_dir(dir.path()));
    let service = ParaphraseService::new(config, lexicon());
    let mut rng = StdRng::seed_from_u64(4);

    // Valid extension, invalid content: the extractor fails and the
    // boundary reports it as "no text found", never a crash.
    let err = service
        .process_upload("broken.pdf", b"this is not a pdf", &mut rng)
        .unwrap_err();
    assert!(matches!(err, ServiceError::ExtractionFailed));
    assert_eq!(err.to_string(), "No text found in the uploaded document.");
}

#[test]
fn test_stored_uploads_live_under_the_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(ParrotConfig::new().with_upload_dir(dir.path()));
    let gateway = UploadGateway::new(config);

    let first = gateway.store("same.txt", b"one").unwrap();
    let second = gateway.store("same.txt", b"two").unwrap();

    assert!(first.starts_with(dir.path()));
    assert!(second.starts_with(dir.path()));
    // Repeated uploads of the same filename never collide.
    assert_ne!(first, second);
}

#[test]
fn test_path_traversal_names_are_defanged() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(ParrotConfig::new().with_upload_dir(dir.path()));
    let gateway = UploadGateway::new(config);

    let stored = gateway.store("../../escape.txt", b"payload").unwrap();
    assert!(stored.starts_with(dir.path()));
}

#[test]
fn test_response_serializes_for_the_presentation_layer() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(ParrotConfig::new().with_upload_dir(dir.path()));
    let service = ParaphraseService::new(config, lexicon());
    let mut rng = StdRng::seed_from_u64(4);

    let response = service
        .process_upload("pets.txt", b"the cat", &mut rng)
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    for key in ["original", "easy", "medium", "hard"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}
