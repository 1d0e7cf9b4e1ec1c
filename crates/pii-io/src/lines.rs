use std::path::Path;

use pii_core::Pii;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

use crate::error::{IoError, Result};

/// Read a file into lines, line terminators (`\n` or `\r\n`) stripped
pub async fn read_data(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let read_err = |source| IoError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).await.map_err(read_err)?;
    let mut lines = BufReader::new(file).lines();
    let mut result = Vec::new();

    while let Some(line) = lines.next_line().await.map_err(read_err)? {
        result.push(line);
    }

    tracing::debug!(path = %path.display(), lines = result.len(), "read lines");
    Ok(result)
}

/// Read a file and wrap each line for inspection
pub async fn read_pii(path: impl AsRef<Path>) -> Result<Vec<Pii>> {
    let lines = read_data(path).await?;
    Ok(lines.into_iter().map(Pii::from).collect())
}

/// Write each line followed by `\n`, truncating any existing file.
///
/// Returns the number of lines written.
pub async fn write_data<I, S>(path: impl AsRef<Path>, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let write_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).await.map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;

    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .await
            .map_err(write_err)?;
        writer.write_all(b"\n").await.map_err(write_err)?;
        count += 1;
    }

    writer.flush().await.map_err(write_err)?;

    tracing::debug!(path = %path.display(), lines = count, "wrote lines");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_write_data.txt");
        let expected = vec!["this", "is", "some", "test", "data"];

        let count = write_data(&path, &expected).await.unwrap();
        assert_eq!(count, expected.len());

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "this\nis\nsome\ntest\ndata\n");

        let actual = read_data(&path).await.unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_read_strips_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        std::fs::write(&path, "first\r\nsecond\r\nlast").unwrap();

        let lines = read_data(&path).await.unwrap();
        assert_eq!(lines, vec!["first", "second", "last"]);
    }

    #[tokio::test]
    async fn test_read_pii_wraps_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "John Doe\nnothing here\n").unwrap();

        let texts = read_pii(&path).await.unwrap();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].has_name());
        assert!(!texts[1].has_pii());
    }

    #[tokio::test]
    async fn test_write_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        let count = write_data(&path, Vec::<String>::new()).await.unwrap();
        assert_eq!(count, 0);
        assert!(read_data(&path).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_data(dir.path().join("missing.txt")).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, IoError::Read { .. }));
    }

    #[tokio::test]
    async fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        let err = write_data(&path, ["line"]).await.unwrap_err();
        assert!(matches!(err, IoError::Write { .. }));
    }
}
