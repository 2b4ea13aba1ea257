use std::fs;
use std::path::Path;

use paper_forge::document::{is_text_file, Document, DocumentError, DocumentId, DocumentLoader, LoadError};
use paper_forge::types::DocumentVersion;
use tempfile::tempdir;

#[test]
fn loads_txt_files_from_directory_sorted_by_id() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "Second file\n").unwrap();
    fs::write(dir.path().join("A.TXT"), "First file\nwith two lines\n").unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::create_dir(dir.path().join("nested.txt")).unwrap();

    let docs = DocumentLoader::new().load(dir.path()).unwrap();

    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a.txt", "b.txt"]);
    assert_eq!(docs[0].name, "A.TXT");
    assert_eq!(docs[0].lines, vec!["First file", "with two lines"]);
}

#[test]
fn loads_single_text_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Lecture.txt");
    fs::write(&path, "Line one\r\nLine two").unwrap();

    let docs = DocumentLoader::new().load(&path).unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id.as_str(), "lecture.txt");
    assert_eq!(docs[0].lines, vec!["Line one", "Line two"]);
    assert_eq!(
        docs[0].version,
        DocumentVersion::from_content(b"Line one\r\nLine two")
    );
}

#[test]
fn rejects_non_text_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("slides.pdf");
    fs::write(&path, "binary-ish").unwrap();

    let err = DocumentLoader::new().load(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotTextFile(_)));
}

#[test]
fn rejects_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "").unwrap();

    let err = DocumentLoader::new().load(&path).unwrap_err();
    assert!(matches!(err, LoadError::EmptyFile(_)));
}

#[test]
fn missing_path_is_not_found() {
    let dir = tempdir().unwrap();
    let err = DocumentLoader::new()
        .load(&dir.path().join("does-not-exist"))
        .unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}

#[test]
fn directory_without_text_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "nothing").unwrap();

    let err = DocumentLoader::new().load(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::NoDocuments(_)));
}

#[test]
fn input_path_is_trimmed_and_unquoted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quoted.txt");
    fs::write(&path, "Quoted content\n").unwrap();

    let input = format!("  \"{}\"  \n", path.display());
    let docs = DocumentLoader::new().load_input(&input).unwrap();
    assert_eq!(docs[0].lines, vec!["Quoted content"]);

    let err = DocumentLoader::new().load_input("   ").unwrap_err();
    assert!(matches!(err, LoadError::EmptyPath));

    let err = DocumentLoader::new().load_input("\"  \"").unwrap_err();
    assert!(matches!(err, LoadError::EmptyPath));
}

#[test]
fn invalid_utf8_is_rejected() {
    let id = DocumentId::from_file_name(Path::new("bad.txt")).unwrap();
    let result = Document::ingest(id, "bad.txt", vec![0, 159, 146, 150]);
    assert!(matches!(result, Err(DocumentError::InvalidUtf8(_))));

    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, [0u8, 159, 146, 150]).unwrap();
    let err = DocumentLoader::new().load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Document(DocumentError::InvalidUtf8(_))));
}

#[test]
fn same_content_same_version() {
    let a = Document::ingest(
        DocumentId::from_file_name(Path::new("a.txt")).unwrap(),
        "a.txt",
        b"Hello world".to_vec(),
    )
    .unwrap();
    let b = Document::ingest(
        DocumentId::from_file_name(Path::new("b.txt")).unwrap(),
        "b.txt",
        b"Hello world".to_vec(),
    )
    .unwrap();

    assert_eq!(a.version, b.version);
    assert_ne!(a.id, b.id);
}

#[test]
fn document_id_normalization() {
    let id = DocumentId::from_path(Path::new("corpus"), Path::new("corpus/Week1/Notes.TXT")).unwrap();
    assert_eq!(id.as_str(), "week1/notes.txt");

    assert!(DocumentId::from_path(Path::new("corpus"), Path::new("other/a.txt")).is_err());
}

#[test]
fn text_file_detection_ignores_case() {
    assert!(is_text_file(Path::new("a.txt")));
    assert!(is_text_file(Path::new("dir/B.TxT")));
    assert!(!is_text_file(Path::new("a.txt.bak")));
    assert!(!is_text_file(Path::new("txt")));
}

#[cfg(unix)]
#[test]
fn file_with_non_utf8_name_is_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "Readable notes\n").unwrap();
    fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.txt")), "Hidden notes\n").unwrap();

    let docs = DocumentLoader::new().load(dir.path()).unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id.as_str(), "good.txt");
}

#[cfg(target_os = "linux")]
#[test]
fn case_colliding_ids_order_by_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "lower case\n").unwrap();
    fs::write(dir.path().join("Notes.txt"), "upper case\n").unwrap();

    let docs = DocumentLoader::new().load(dir.path()).unwrap();

    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Notes.txt", "notes.txt"]);
    assert_eq!(docs[0].id, docs[1].id);
}
