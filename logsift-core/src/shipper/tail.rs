use crate::shipper::ShipperError;
use std::io::SeekFrom;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailRead {
    /// The file shrank below the cursor.
    Rotated { size: u64 },
    /// Non-blank complete lines from the cursor on. `end_offset` is the file
    /// position just past the last newline read.
    Batch { lines: Vec<String>, end_offset: u64 },
}

/// Reads every complete line appended to `path` since `offset`.
///
/// Bytes after the last newline are left for a later read, so a line written
/// in several pieces is only shipped once it is finished.
pub async fn read_new_lines(path: &Path, offset: u64) -> Result<TailRead, ShipperError> {
    let read_err = |source| ShipperError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::open(path).await.map_err(read_err)?;
    let size = file.metadata().await.map_err(read_err)?.len();

    if size < offset {
        return Ok(TailRead::Rotated { size });
    }

    file.seek(SeekFrom::Start(offset)).await.map_err(read_err)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).await.map_err(read_err)?;

    let complete = buf
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    buf.truncate(complete);

    let text = String::from_utf8_lossy(&buf);
    let lines = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();

    Ok(TailRead::Batch {
        lines,
        end_offset: offset + buf.len() as u64,
    })
}
