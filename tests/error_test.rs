//! Error display and conversion

use kisan::common;
use kisan::image_file::read_image;
use kisan::KisanError;
use std::path::Path;

/// Reading a missing image
#[tokio::test]
async fn test_read_nonexistent_image() {
    let result = read_image(Path::new("/nonexistent/path/leaf.jpg")).await;
    assert!(matches!(result, Err(KisanError::FileNotFound(_))));
}

#[test]
fn test_error_display() {
    let errors = vec![
        KisanError::Config("no home".to_string()),
        KisanError::FileNotFound("leaf.jpg".to_string()),
        KisanError::UnsupportedImage("notes.txt".to_string()),
        KisanError::Status { status: 500, body: "worker crashed".to_string() },
        KisanError::Common(common::Error::NoFileSelected),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_status_message() {
    let err = KisanError::Status { status: 404, body: "not found".to_string() };
    assert_eq!(err.to_string(), "HTTP error! status: 404 not found");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: KisanError = io_err.into();

    assert!(matches!(err, KisanError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: KisanError = json_err.into();

    assert!(matches!(err, KisanError::JsonParse(_)));
}

/// Shared errors display unchanged
#[test]
fn test_common_error_transparent() {
    let err: KisanError = common::Error::NoFileSelected.into();
    assert!(matches!(err, KisanError::Common(_)));
    assert_eq!(err.to_string(), "Please select a file first!");
}

#[test]
fn test_into_common() {
    let err = KisanError::Status { status: 503, body: String::new() };
    assert!(matches!(err.into_common(), common::Error::Http { status: 503 }));

    let err = KisanError::UnsupportedImage("notes.txt".into());
    assert!(matches!(err.into_common(), common::Error::NotAnImage(name) if name == "notes.txt"));

    let err = KisanError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
    assert!(matches!(err.into_common(), common::Error::Network(_)));

    let err = KisanError::Common(common::Error::EmptyMessage);
    assert!(matches!(err.into_common(), common::Error::EmptyMessage));
}
