//! File publisher with atomic replace semantics.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio_stream::{Stream, StreamExt};

use crate::fetch::FetchError;
use crate::transform::{DirectivePair, HEADER_DATA, HEADER_ZONE};

use super::PublishError;

/// Publishes directive artifacts using write-temp-then-rename.
///
/// The complete artifact (two-line header plus every directive pair) is
/// written to the temporary path, flushed, and only then renamed onto
/// the target path. The rename is atomic when both paths share a
/// volume, so a concurrent reader of the target observes either the
/// prior complete artifact or the new one, never a mixture.
#[derive(Debug, Clone)]
pub struct FilePublisher {
    target: PathBuf,
    temp: PathBuf,
}

impl FilePublisher {
    /// Creates a publisher for the given target and temporary paths.
    ///
    /// The paths are assumed pre-validated: the temporary file must live
    /// in the same directory as the target for the rename to be atomic.
    #[must_use]
    pub fn new(target: impl Into<PathBuf>, temp: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            temp: temp.into(),
        }
    }

    /// Returns the published file path.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Returns the temporary file path.
    #[must_use]
    pub fn temp(&self) -> &Path {
        &self.temp
    }

    /// Writes the full artifact and atomically promotes it to the target.
    ///
    /// Returns the number of directive pairs written (the header is not
    /// counted). On any error the target path is left untouched; the
    /// temporary file is truncated and overwritten by the next attempt.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Write`] on temporary-file I/O failure,
    /// [`PublishError::Source`] when the directive stream yields an
    /// error, and [`PublishError::Replace`] when the final rename fails.
    pub async fn publish<S>(&self, directives: S) -> Result<u64, PublishError>
    where
        S: Stream<Item = Result<DirectivePair, FetchError>> + Send,
    {
        let file = File::create(&self.temp).await.map_err(PublishError::Write)?;
        let mut output = BufWriter::new(file);

        write_line(&mut output, HEADER_ZONE).await?;
        write_line(&mut output, HEADER_DATA).await?;

        let mut processed: u64 = 0;
        tokio::pin!(directives);
        while let Some(item) = directives.next().await {
            let pair = item?;
            write_line(&mut output, &pair.zone_line()).await?;
            write_line(&mut output, &pair.data_line()).await?;
            processed += 1;
        }

        output.flush().await.map_err(PublishError::Write)?;
        drop(output);

        tokio::fs::rename(&self.temp, &self.target)
            .await
            .map_err(PublishError::Replace)?;

        tracing::debug!(processed, target = %self.target.display(), "Published blocklist artifact");
        Ok(processed)
    }
}

async fn write_line(output: &mut BufWriter<File>, line: &str) -> Result<(), PublishError> {
    output
        .write_all(line.as_bytes())
        .await
        .map_err(PublishError::Write)?;
    output.write_all(b"\n").await.map_err(PublishError::Write)
}
