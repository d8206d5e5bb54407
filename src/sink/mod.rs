use std::fs;
use std::path::PathBuf;

use crate::error::RelayError;
use crate::monitor::TrackSink;

/// Writes the current track line to a file, replacing any previous
/// content.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TrackSink for FileSink {
    fn publish(&mut self, line: &str) -> Result<(), RelayError> {
        fs::write(&self.path, line).map_err(|source| RelayError::Sink {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trackinfo.txt");
        let mut sink = FileSink::new(path.clone());

        sink.publish("< Artist: A | Track: One >    ").unwrap();
        sink.publish("< Artist: A | Track: Two >    ").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "< Artist: A | Track: Two >    "
        );
    }

    #[test]
    fn test_publish_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("trackinfo.txt");
        let mut sink = FileSink::new(path);

        assert!(matches!(
            sink.publish("line"),
            Err(RelayError::Sink { .. })
        ));
    }
}
