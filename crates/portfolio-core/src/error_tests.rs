//! Error module tests

use crate::error::{Error, UploadStage};

#[test]
fn test_project_not_found_error() {
    let error = Error::ProjectNotFound { index: 5, len: 3 };
    assert_eq!(error.code(), "E002");
    assert_eq!(
        error.suggestion(),
        Some("Use a position between 0 and 2".to_string())
    );
    assert!(error.to_string().contains("position 5"));
    assert!(error.is_client_error());
}

#[test]
fn test_project_not_found_in_empty_store() {
    let error = Error::ProjectNotFound { index: 0, len: 0 };
    assert_eq!(
        error.suggestion(),
        Some("Add a project first at /add-project".to_string())
    );
}

#[test]
fn test_invalid_project_id_error() {
    let error = Error::InvalidProjectId("abc".to_string());
    assert_eq!(error.code(), "E003");
    assert_eq!(error.suggestion(), None);
    assert!(error.to_string().contains("'abc'"));
}

#[test]
fn test_form_parse_error() {
    let error = Error::FormParse("unexpected end of stream".to_string());
    assert_eq!(error.code(), "E801");
    assert!(error.is_client_error());
}

#[test]
fn test_upload_stage_display() {
    assert_eq!(UploadStage::UploadFile.to_string(), "upload file");
    assert_eq!(UploadStage::TargetFile.to_string(), "target file");
    assert_eq!(UploadStage::CopyFile.to_string(), "copy file");
}

#[test]
fn test_upload_failed_error() {
    let missing = Error::upload(UploadStage::UploadFile, "no such file");
    assert_eq!(missing.code(), "E900");
    assert!(missing.is_client_error());
    assert!(missing.suggestion().is_some());

    let write = Error::upload(UploadStage::CopyFile, "disk full");
    assert!(!write.is_client_error());
    assert_eq!(write.suggestion(), None);
    assert_eq!(write.to_string(), "Image upload failed (copy file): disk full");
}

#[test]
fn test_payload_too_large_error() {
    let error = Error::PayloadTooLarge("length limit exceeded".to_string());
    assert_eq!(error.code(), "E802");
    assert!(error.is_client_error());
    assert!(error.suggestion().unwrap().contains("server.max_upload_bytes"));
}

#[test]
fn test_config_error_is_server_side() {
    let error = Error::ConfigError("upload directory is outside the public directory".to_string());
    assert_eq!(error.code(), "E600");
    assert!(!error.is_client_error());
    assert!(error.suggestion().unwrap().contains("storage.public_dir"));
}
