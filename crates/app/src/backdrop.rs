//! Drifting embers drawn behind the game frame.
//!
//! The backdrop steps on its own fixed timestep and knows nothing about the
//! game. It only ever hands out display cells.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Fixed step interval in milliseconds.
pub const TICK_MS: u32 = 50;
/// Longest frame gap the backdrop will catch up on.
const MAX_CATCH_UP_MS: u32 = 500;
const EMBER_GLYPHS: [char; 3] = ['.', '*', '\''];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmberCell {
    pub column: usize,
    pub row: usize,
    pub glyph: char,
    /// 0 is nearly faded, 3 is brightest.
    pub heat: u8,
}

#[derive(Clone, Debug)]
struct Ember {
    column: usize,
    /// Rows from the bottom edge.
    height: usize,
    rise_every: u8,
    countdown: u8,
    glyph: char,
}

#[derive(Clone, Debug)]
pub struct Backdrop {
    columns: usize,
    rows: usize,
    embers: Vec<Ember>,
    elapsed_ms: u32,
    ticks: u64,
    rng: ChaCha8Rng,
}

impl Backdrop {
    pub fn new(columns: usize, rows: usize, count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let embers =
            (0..count).map(|_| spawn_ember(&mut rng, columns, rows.max(1), true)).collect();
        Self { columns, rows: rows.max(1), embers, elapsed_ms: 0, ticks: 0, rng }
    }

    /// Feeds wall-clock time in; runs as many fixed steps as it covers.
    pub fn update(&mut self, frame_ms: u32) {
        self.elapsed_ms = (self.elapsed_ms + frame_ms).min(MAX_CATCH_UP_MS);
        while self.elapsed_ms >= TICK_MS {
            self.elapsed_ms -= TICK_MS;
            self.step();
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Resizes the field; embers outside the new bounds are respawned.
    pub fn resize(&mut self, columns: usize, rows: usize) {
        if (columns, rows.max(1)) == (self.columns, self.rows) {
            return;
        }
        self.columns = columns;
        self.rows = rows.max(1);
        for ember in &mut self.embers {
            if ember.column >= columns || ember.height >= self.rows {
                *ember = spawn_ember(&mut self.rng, columns, self.rows, true);
            }
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = EmberCell> + '_ {
        self.embers.iter().filter(|ember| ember.column < self.columns).map(|ember| {
            let row = self.rows - 1 - ember.height;
            let heat = 3 - (ember.height * 4 / self.rows).min(3) as u8;
            EmberCell { column: ember.column, row, glyph: ember.glyph, heat }
        })
    }

    fn step(&mut self) {
        self.ticks += 1;
        for idx in 0..self.embers.len() {
            let ember = &mut self.embers[idx];
            if ember.countdown > 0 {
                ember.countdown -= 1;
                continue;
            }
            ember.countdown = ember.rise_every;
            ember.height += 1;
            if ember.height >= self.rows {
                self.embers[idx] = spawn_ember(&mut self.rng, self.columns, self.rows, false);
            }
        }
    }
}

fn spawn_ember(rng: &mut ChaCha8Rng, columns: usize, rows: usize, anywhere: bool) -> Ember {
    let column = if columns == 0 { 0 } else { (rng.next_u64() % columns as u64) as usize };
    let height = if anywhere { (rng.next_u64() % rows as u64) as usize } else { 0 };
    let rise_every = (rng.next_u64() % 4) as u8;
    let glyph = EMBER_GLYPHS[(rng.next_u64() % EMBER_GLYPHS.len() as u64) as usize];
    Ember { column, height, rise_every, countdown: rise_every, glyph }
}
