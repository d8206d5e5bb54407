use zbus::proxy::CacheProperties;
use zbus::{Connection, proxy};

use crate::error::RelayError;
use crate::monitor::MetadataSource;
use crate::track::RawMetadata;

/// Property access for the player half of the MPRIS interface. Only the
/// metadata property is consumed here.
#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_path = "/org/mpris/MediaPlayer2",
    gen_blocking = false
)]
trait MediaPlayer2Player {
    /// Current track metadata
    #[zbus(property)]
    fn metadata(&self) -> zbus::Result<RawMetadata>;
}

/// Session-bus client bound to a single player destination.
pub struct BusClient {
    proxy: MediaPlayer2PlayerProxy<'static>,
}

impl BusClient {
    /// Connect to the session bus and bind the player proxy. Caching is
    /// disabled so every fetch is a live round-trip; the player itself is
    /// not contacted until the first fetch.
    pub async fn connect(bus_name: &str) -> Result<Self, RelayError> {
        let connection = Connection::session().await?;
        let proxy = MediaPlayer2PlayerProxy::builder(&connection)
            .destination(bus_name.to_string())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self { proxy })
    }
}

impl MetadataSource for BusClient {
    async fn fetch(&mut self) -> Result<RawMetadata, RelayError> {
        Ok(self.proxy.metadata().await?)
    }
}
