use super::ant::{advance, choose_food, create_ant};
use super::constants::{
  ANT_CLEARANCE, BOARD_HEIGHT, BOARD_WIDTH, ENTITY_CLEARANCE, EXTRA_POISON_INTERVAL,
  EXTRA_POISON_SCORE_CAP, FOOD_VARIANTS, MIN_POISON, NUM_FOOD, POINTS_PER_FOOD,
  SOUNDTRACK_FADE_IN_MS, SPAWN_MARGIN, SPEED_UP_INTERVAL, START_LIVES, START_SPEED,
  TIMER_GRACE_MS,
};
use super::input::parse_click;
use super::math::distance;
use super::types::{
  Ant, AntSnapshot, AudioCommand, Food, FoodSnapshot, Frame, GameState, Poison, PoisonSnapshot,
  Point, Sound,
};
use crate::assets::{AssetCatalog, SoundManifest};
use rand::Rng;
use tokio::sync::mpsc::UnboundedSender;


pub struct World {
  state: GameState,
  score: i64,
  lives: u32,
  width: f64,
  height: f64,
  ant: Ant,
  food: Vec<Food>,
  poison: Vec<Poison>,
  next_entity_id: u32,
  resume_at: Option<i64>,
  restart_at: Option<i64>,
  poison_size: f64,
  sounds: SoundManifest,
  audio: UnboundedSender<AudioCommand>,
}

impl World {
  pub fn new(catalog: &AssetCatalog, audio: UnboundedSender<AudioCommand>) -> World {
    let center = Point {
      x: BOARD_WIDTH / 2.0,
      y: BOARD_HEIGHT / 2.0,
    };
    World {
      state: GameState::Starting,
      score: 0,
      lives: START_LIVES,
      width: BOARD_WIDTH,
      height: BOARD_HEIGHT,
      ant: create_ant(center, catalog.sprites.ant.size()),
      food: Vec::new(),
      poison: Vec::new(),
      next_entity_id: 0,
      resume_at: None,
      restart_at: None,
      poison_size: catalog.sprites.poison.size(),
      sounds: catalog.sounds,
      audio,
    }
  }

  pub fn tick(&mut self, now: i64) {
    if self.fire_due_timers(now) {
      return;
    }
    if self.state != GameState::Playing {
      return;
    }
    self.move_ant();
    self.check_ant_eating();
    self.check_ant_poisoned(now);
  }

  pub fn handle_click(&mut self, position: Point) {
    let Some(position) = parse_click(position) else { return };
    match self.state {
      GameState::Playing => self.clear_poison_at(position),
      GameState::Starting => self.restart(),
      GameState::Dying | GameState::GameOver => {}
    }
  }

  pub fn frame(&self, now: i64) -> Frame {
    Frame {
      now,
      state: self.state,
      score: self.score,
      lives: self.lives,
      width: self.width,
      height: self.height,
      ant: AntSnapshot {
        position: self.ant.position,
        direction: self.ant.direction,
        frame_index: self.ant.frame_index,
      },
      food: self
        .food
        .iter()
        .map(|item| FoodSnapshot {
          position: item.position,
          variant: item.variant,
        })
        .collect(),
      poison: self
        .poison
        .iter()
        .map(|item| PoisonSnapshot {
          position: item.position,
        })
        .collect(),
    }
  }

  fn fire_due_timers(&mut self, now: i64) -> bool {
    if let Some(at) = self.resume_at {
      if now >= at {
        self.resume_at = None;
        if self.lives == 0 {
          self.game_over(now);
        } else {
          self.start();
        }
        return true;
      }
    }
    if let Some(at) = self.restart_at {
      if now >= at {
        self.restart_at = None;
        self.state = GameState::Starting;
        return true;
      }
    }
    false
  }

  fn restart(&mut self) {
    self.lives = START_LIVES;
    self.score = 0;
    self.ant.speed = START_SPEED;
    self.start();
  }

  fn start(&mut self) {
    self.play(AudioCommand::PlayLooping {
      sound: Sound::Soundtrack,
      fade_in_ms: SOUNDTRACK_FADE_IN_MS,
    });
    self.ant.position = Point {
      x: self.width / 2.0,
      y: self.height / 2.0,
    };

    self.food.clear();
    for _ in 0..NUM_FOOD {
      let item = self.new_food();
      self.food.push(item);
    }

    // The whole poison layout is rebuilt each time play resumes, not topped up
    // to the target count.
    let poison_count = MIN_POISON + (self.score / EXTRA_POISON_INTERVAL) as usize;
    self.poison.clear();
    for _ in 0..poison_count {
      let item = self.new_poison();
      self.poison.push(item);
    }

    choose_food(&mut self.ant, &self.food);
    self.state = GameState::Playing;
    tracing::debug!(score = self.score, lives = self.lives, "round started");
  }

  fn die(&mut self, now: i64) {
    self.play(AudioCommand::Stop(Sound::Soundtrack));
    self.lives = self.lives.saturating_sub(1);
    self.state = GameState::Dying;
    self.play(AudioCommand::Play(Sound::Die));
    self.resume_at = Some(now + self.sounds.duration_ms(Sound::Die) + TIMER_GRACE_MS);
    tracing::debug!(lives = self.lives, "ant poisoned");
  }

  fn game_over(&mut self, now: i64) {
    self.state = GameState::GameOver;
    self.play(AudioCommand::Play(Sound::GameOver));
    self.restart_at = Some(now + self.sounds.duration_ms(Sound::GameOver) + TIMER_GRACE_MS);
    tracing::debug!(score = self.score, "game over");
  }

  fn move_ant(&mut self) {
    let Some(target) = self.target_position() else { return };
    advance(&mut self.ant, target);
  }

  fn target_position(&self) -> Option<Point> {
    let id = self.ant.target?;
    self
      .food
      .iter()
      .find(|item| item.id == id)
      .map(|item| item.position)
  }

  fn check_ant_eating(&mut self) {
    let Some(id) = self.ant.target else { return };
    let Some(target) = self.target_position() else { return };
    if distance(self.ant.position, target) >= self.ant.speed {
      return;
    }

    self.remove_food(id);
    self.score += POINTS_PER_FOOD;
    if self.score % SPEED_UP_INTERVAL == 0 {
      self.ant.speed += 1.0;
    }
    if self.score % EXTRA_POISON_INTERVAL == 0 && self.score < EXTRA_POISON_SCORE_CAP {
      let item = self.new_poison();
      self.poison.push(item);
    }
    let item = self.new_food();
    self.food.push(item);
    choose_food(&mut self.ant, &self.food);
    self.play(AudioCommand::Play(Sound::Eat));
  }

  fn check_ant_poisoned(&mut self, now: i64) {
    let touched = self
      .poison
      .iter()
      .any(|item| distance(self.ant.position, item.position) < (self.ant.size + item.size) / 3.0);
    if touched {
      self.die(now);
    }
  }

  fn clear_poison_at(&mut self, click: Point) {
    let hit: Vec<u32> = self
      .poison
      .iter()
      .filter(|item| distance(item.position, click) < item.size / 2.0)
      .map(|item| item.id)
      .collect();
    for id in hit {
      self.remove_poison(id);
      let replacement = self.new_poison();
      self.poison.push(replacement);
    }
  }

  fn remove_food(&mut self, id: u32) {
    self.food.retain(|item| item.id != id);
  }

  fn remove_poison(&mut self, id: u32) {
    self.poison.retain(|item| item.id != id);
  }

  fn new_food(&mut self) -> Food {
    let variant = rand::thread_rng().gen_range(0..FOOD_VARIANTS);
    Food {
      id: self.next_id(),
      position: self.good_position(),
      variant,
    }
  }

  fn new_poison(&mut self) -> Poison {
    Poison {
      id: self.next_id(),
      position: self.good_position(),
      size: self.poison_size,
    }
  }

  fn next_id(&mut self) -> u32 {
    let id = self.next_entity_id;
    self.next_entity_id = self.next_entity_id.wrapping_add(1);
    id
  }

  fn good_position(&self) -> Point {
    let mut rng = rand::thread_rng();
    loop {
      let candidate = Point {
        x: rng.gen_range(SPAWN_MARGIN..=self.width - SPAWN_MARGIN),
        y: rng.gen_range(SPAWN_MARGIN..=self.height - SPAWN_MARGIN),
      };
      if distance(self.ant.position, candidate) < ANT_CLEARANCE {
        continue;
      }
      let crowded = self
        .food
        .iter()
        .map(|item| item.position)
        .chain(self.poison.iter().map(|item| item.position))
        .any(|position| distance(position, candidate) < ENTITY_CLEARANCE);
      if !crowded {
        return candidate;
      }
    }
  }

  fn play(&self, command: AudioCommand) {
    let _ = self.audio.send(command);
  }
}
