use crate::assets::SoundManifest;
use crate::game::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::math::clamp;
use crate::game::types::{AudioCommand, Frame, GameState, InputEvent, Point};
use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
  self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
  MouseButton, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
  disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
  LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::f64::consts::TAU;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;

const HEADING_GLYPHS: [char; 8] = ['→', '↘', '↓', '↙', '←', '↖', '↑', '↗'];
const POISON_COLOR: Color = Color::Rgb {
  r: 170,
  g: 60,
  b: 200,
};
const HUD_COLOR: Color = Color::Rgb {
  r: 111,
  g: 78,
  b: 55,
};
const ANT_COLORS: [Color; 3] = [
  Color::Rgb {
    r: 111,
    g: 78,
    b: 55,
  },
  Color::Rgb {
    r: 139,
    g: 98,
    b: 69,
  },
  Color::Rgb {
    r: 87,
    g: 61,
    b: 43,
  },
];

pub struct TerminalGuard;

pub fn init() -> Result<TerminalGuard> {
  enable_raw_mode()?;
  execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
  Ok(TerminalGuard)
}

impl Drop for TerminalGuard {
  fn drop(&mut self) {
    let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
  }
}

pub fn spawn_input_thread(events: UnboundedSender<InputEvent>, stop: Arc<AtomicBool>) {
  thread::spawn(move || {
    while !stop.load(Ordering::Relaxed) {
      match event::poll(Duration::from_millis(100)) {
        Ok(true) => {}
        Ok(false) => continue,
        Err(_) => break,
      }
      let Ok(event) = event::read() else { break };
      let mapped = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
          KeyCode::Esc => Some(InputEvent::Escape),
          KeyCode::Char('q') => Some(InputEvent::Quit),
          KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
          }
          _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
          let (cols, rows) = size().unwrap_or((80, 24));
          Some(InputEvent::Click(cell_to_board(
            mouse.column,
            mouse.row,
            cols,
            rows,
          )))
        }
        _ => None,
      };
      let Some(mapped) = mapped else { continue };
      if events.send(mapped).is_err() {
        break;
      }
    }
  });
}

pub async fn run_renderer(mut frames: watch::Receiver<Frame>) {
  while frames.changed().await.is_ok() {
    let frame = frames.borrow_and_update().clone();
    if let Err(error) = draw(&frame) {
      tracing::warn!(%error, "terminal draw failed");
      break;
    }
  }
}

pub async fn run_audio(mut commands: UnboundedReceiver<AudioCommand>, sounds: SoundManifest) {
  while let Some(command) = commands.recv().await {
    match command {
      AudioCommand::Play(sound) => {
        tracing::debug!(?sound, duration_ms = sounds.duration_ms(sound), "audio play");
      }
      AudioCommand::PlayLooping { sound, fade_in_ms } => {
        tracing::debug!(
          ?sound,
          fade_in_ms,
          duration_ms = sounds.duration_ms(sound),
          "audio loop"
        );
      }
      AudioCommand::Stop(sound) => {
        tracing::debug!(?sound, "audio stop");
      }
    }
  }
}

fn draw(frame: &Frame) -> Result<()> {
  let (cols, rows) = size()?;
  let mut out = io::stdout();
  queue!(out, Clear(ClearType::All))?;

  for item in &frame.food {
    let (col, row) = board_to_cell(item.position, frame.width, frame.height, cols, rows);
    queue!(
      out,
      MoveTo(col, row),
      SetForegroundColor(food_color(item.variant)),
      Print(food_glyph(item.variant))
    )?;
  }

  for item in &frame.poison {
    let (col, row) = board_to_cell(item.position, frame.width, frame.height, cols, rows);
    queue!(
      out,
      MoveTo(col, row),
      SetForegroundColor(POISON_COLOR),
      Print('x')
    )?;
  }

  let (col, row) = board_to_cell(frame.ant.position, frame.width, frame.height, cols, rows);
  queue!(
    out,
    MoveTo(col, row),
    SetForegroundColor(ANT_COLORS[frame.ant.frame_index % ANT_COLORS.len()]),
    Print(heading_glyph(frame.ant.direction))
  )?;

  queue!(
    out,
    MoveTo(0, 0),
    SetForegroundColor(HUD_COLOR),
    Print("I".repeat(frame.lives as usize))
  )?;
  let score = frame.score.to_string();
  let score_col = cols.saturating_sub(score.len() as u16 + 1);
  queue!(out, MoveTo(score_col, 0), Print(score))?;

  match frame.state {
    GameState::GameOver => draw_banner(&mut out, "Game Over", Color::Red, cols, rows)?,
    GameState::Starting => draw_banner(&mut out, "Click to Play", HUD_COLOR, cols, rows)?,
    GameState::Playing | GameState::Dying => {}
  }

  queue!(out, ResetColor)?;
  out.flush()?;
  Ok(())
}

fn draw_banner(out: &mut impl Write, text: &str, color: Color, cols: u16, rows: u16) -> Result<()> {
  let col = (cols / 2).saturating_sub(text.len() as u16 / 2);
  let row = rows / 3;
  queue!(out, MoveTo(col, row), SetForegroundColor(color), Print(text))?;
  Ok(())
}

fn heading_glyph(direction: f64) -> char {
  let octant = (direction.rem_euclid(TAU) / (TAU / 8.0)).round() as usize % HEADING_GLYPHS.len();
  HEADING_GLYPHS[octant]
}

fn food_glyph(variant: usize) -> char {
  ['%', 'o', 'O'][variant % 3]
}

fn food_color(variant: usize) -> Color {
  match variant % 3 {
    0 => Color::Rgb {
      r: 222,
      g: 184,
      b: 135,
    },
    1 => Color::Rgb {
      r: 142,
      g: 196,
      b: 66,
    },
    _ => Color::Rgb {
      r: 255,
      g: 149,
      b: 38,
    },
  }
}

fn board_to_cell(position: Point, width: f64, height: f64, cols: u16, rows: u16) -> (u16, u16) {
  let col_span = cols.saturating_sub(1).max(1) as f64;
  let row_span = rows.saturating_sub(2).max(1) as f64;
  let col = clamp(position.x / width, 0.0, 1.0) * col_span;
  let row = 1.0 + clamp(position.y / height, 0.0, 1.0) * row_span;
  (col.round() as u16, row.round() as u16)
}

fn cell_to_board(col: u16, row: u16, cols: u16, rows: u16) -> Point {
  let col_span = cols.saturating_sub(1).max(1) as f64;
  let row_span = rows.saturating_sub(2).max(1) as f64;
  let x = clamp(col as f64 / col_span, 0.0, 1.0) * BOARD_WIDTH;
  let y = clamp((row as f64 - 1.0) / row_span, 0.0, 1.0) * BOARD_HEIGHT;
  Point { x, y }
}
