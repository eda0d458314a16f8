use crate::shipper::{TailRead, read_new_lines};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[tokio::test]
async fn reads_from_offset_to_end_dropping_blank_lines() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    std::fs::write(&path, "first\nsecond\n\n   \r\nthird\r\n").unwrap();

    // Act
    let read = read_new_lines(&path, 6).await.unwrap();

    // Assert
    assert_eq!(
        read,
        TailRead::Batch {
            lines: vec!["second".to_string(), "third".to_string()],
            end_offset: 26,
        }
    );
}

#[tokio::test]
async fn nothing_new_at_end_of_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    std::fs::write(&path, "only\n").unwrap();

    // Act
    let read = read_new_lines(&path, 5).await.unwrap();

    // Assert
    assert_eq!(
        read,
        TailRead::Batch {
            lines: vec![],
            end_offset: 5,
        }
    );
}

#[tokio::test]
async fn unfinished_last_line_is_held_back() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    std::fs::write(&path, "done\nhalf a li").unwrap();

    // Act
    let first = read_new_lines(&path, 0).await.unwrap();
    std::fs::write(&path, "done\nhalf a line\n").unwrap();
    let second = read_new_lines(&path, 5).await.unwrap();

    // Assert
    assert_eq!(
        first,
        TailRead::Batch {
            lines: vec!["done".to_string()],
            end_offset: 5,
        }
    );
    assert_eq!(
        second,
        TailRead::Batch {
            lines: vec!["half a line".to_string()],
            end_offset: 17,
        }
    );
}

#[tokio::test]
async fn shrunk_file_reports_rotation() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    std::fs::write(&path, "new\n").unwrap();

    // Act
    let read = read_new_lines(&path, 500).await.unwrap();

    // Assert
    assert_eq!(read, TailRead::Rotated { size: 4 });
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = read_new_lines(&dir.path().join("gone.log"), 0)
        .await
        .unwrap_err();

    // Assert
    assert!(err.to_string().contains("gone.log"));
}
