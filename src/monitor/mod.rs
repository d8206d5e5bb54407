use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::info;

use crate::error::RelayError;
use crate::track::{RawMetadata, TrackIdentity};

/// One poll's worth of raw metadata from the bus.
pub trait MetadataSource {
    async fn fetch(&mut self) -> Result<RawMetadata, RelayError>;
}

/// Destination for the formatted track line. Overwrite semantics.
pub trait TrackSink {
    fn publish(&mut self, line: &str) -> Result<(), RelayError>;
}

/// Poll-compare-publish loop. Owns the comparison baseline; failures from
/// either collaborator are handed back to the caller undecided.
pub struct Monitor<S, K> {
    source: S,
    sink: K,
    interval: Duration,
    stop: Arc<AtomicBool>,
}

impl<S: MetadataSource, K: TrackSink> Monitor<S, K> {
    pub fn new(source: S, sink: K, interval: Duration, stop: Arc<AtomicBool>) -> Self {
        Self {
            source,
            sink,
            interval,
            stop,
        }
    }

    /// Run until the stop flag is observed at the top of a cycle, or a
    /// fetch/publish failure ends the loop early.
    ///
    /// The baseline starts empty, so the first non-empty track always
    /// publishes, while a player that reports no metadata at all stays
    /// quiet until something changes.
    pub async fn run(&mut self) -> Result<(), RelayError> {
        let mut last_published = TrackIdentity::default();

        info!("Now monitoring the bus for track metadata");

        while !self.stop.load(Ordering::SeqCst) {
            let raw = self.source.fetch().await?;
            let candidate = TrackIdentity::from_metadata(&raw);

            if candidate != last_published {
                self.sink.publish(&candidate.display_line())?;
                info!("Now playing: {} - {}", candidate.artist, candidate.title);
                last_published = candidate;
            }

            tokio::time::sleep(self.interval).await;
        }

        info!("Stop requested, exiting");
        Ok(())
    }
}
