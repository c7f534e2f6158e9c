pub const BOARD_WIDTH: f64 = 800.0;
pub const BOARD_HEIGHT: f64 = 600.0;
pub const TICK_RATE: u64 = 30;
pub const TICK_MS: u64 = 1000 / TICK_RATE;
pub const START_SPEED: f64 = 5.0;
pub const TURN_RATE: f64 = std::f64::consts::PI / 75.0;
pub const ANIMATION_FRAMES: usize = 3;
pub const NUM_FOOD: usize = 4;
pub const MIN_POISON: usize = 6;
pub const FOOD_VARIANTS: usize = 3;
pub const SPAWN_MARGIN: f64 = 50.0;
pub const ANT_CLEARANCE: f64 = 200.0;
pub const ENTITY_CLEARANCE: f64 = 50.0;
pub const START_LIVES: u32 = 3;
pub const POINTS_PER_FOOD: i64 = 100;
pub const SPEED_UP_INTERVAL: i64 = 1000;
pub const EXTRA_POISON_INTERVAL: i64 = 5000;
pub const EXTRA_POISON_SCORE_CAP: i64 = 30000;
pub const TIMER_GRACE_MS: i64 = 1000;
pub const SOUNDTRACK_FADE_IN_MS: u64 = 1000;
