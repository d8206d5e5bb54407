use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "trackline")]
#[command(about = "Publishes the currently playing MPRIS track to a text file")]
#[command(version)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(short, long, env = "TRACKLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bus name of the player to watch, e.g. org.mpris.MediaPlayer2.audacious
    #[arg(short, long)]
    pub player: Option<String>,

    /// File the current track line is written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seconds between polls of the player's metadata
    #[arg(short, long)]
    pub interval: Option<u64>,
}
