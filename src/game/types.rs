use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
  Starting,
  Playing,
  Dying,
  GameOver,
}

#[derive(Debug, Clone)]
pub struct Ant {
  pub position: Point,
  pub speed: f64,
  pub direction: f64,
  pub target: Option<u32>,
  pub frame_index: usize,
  pub size: f64,
}

#[derive(Debug, Clone)]
pub struct Food {
  pub id: u32,
  pub position: Point,
  pub variant: usize,
}

#[derive(Debug, Clone)]
pub struct Poison {
  pub id: u32,
  pub position: Point,
  pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
  Die,
  GameOver,
  Eat,
  Soundtrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
  Play(Sound),
  PlayLooping { sound: Sound, fade_in_ms: u64 },
  Stop(Sound),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
  Quit,
  Escape,
  Click(Point),
}

#[derive(Debug, Clone, Serialize)]
pub struct AntSnapshot {
  pub position: Point,
  pub direction: f64,
  pub frame_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodSnapshot {
  pub position: Point,
  pub variant: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoisonSnapshot {
  pub position: Point,
}

#[derive(Debug, Clone, Serialize)]
pub struct Frame {
  pub now: i64,
  pub state: GameState,
  pub score: i64,
  pub lives: u32,
  pub width: f64,
  pub height: f64,
  pub ant: AntSnapshot,
  pub food: Vec<FoodSnapshot>,
  pub poison: Vec<PoisonSnapshot>,
}
