use anyhow::Context;
use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing_subscriber::EnvFilter;

mod assets;
mod game;
mod runtime;
mod terminal;

use game::world::World;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let asset_dir = env::var("ANT_GAME_ASSETS")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("assets"));
  let catalog = assets::load(&asset_dir)?;
  tracing::info!("assets loaded from {}", asset_dir.display());

  let (events_tx, events_rx) = mpsc::unbounded_channel();
  let (audio_tx, audio_rx) = mpsc::unbounded_channel();

  let world = World::new(&catalog, audio_tx);
  let (frames_tx, frames_rx) = watch::channel(world.frame(runtime::now_millis()));

  let guard = terminal::init().context("initializing terminal")?;
  let stop = Arc::new(AtomicBool::new(false));
  terminal::spawn_input_thread(events_tx, Arc::clone(&stop));
  let renderer = tokio::spawn(terminal::run_renderer(frames_rx));
  let audio = tokio::spawn(terminal::run_audio(audio_rx, catalog.sounds));

  runtime::run(world, events_rx, frames_tx).await;

  stop.store(true, Ordering::Relaxed);
  let _ = renderer.await;
  let _ = audio.await;
  drop(guard);

  Ok(())
}
