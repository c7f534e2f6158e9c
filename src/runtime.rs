use crate::game::constants::TICK_MS;
use crate::game::types::{Frame, InputEvent};
use crate::game::world::World;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;

pub fn now_millis() -> i64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .unwrap_or_default()
    .as_millis() as i64
}

pub async fn run(
  mut world: World,
  mut events: UnboundedReceiver<InputEvent>,
  frames: watch::Sender<Frame>,
) {
  let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));
  loop {
    tokio::select! {
      _ = ticker.tick() => {
        let now = now_millis();
        world.tick(now);
        let _ = frames.send(world.frame(now));
      }
      event = events.recv() => {
        match event {
          Some(InputEvent::Click(position)) => world.handle_click(position),
          Some(InputEvent::Escape) | Some(InputEvent::Quit) | None => break,
        }
      }
    }
  }
}
