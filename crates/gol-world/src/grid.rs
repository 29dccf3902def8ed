//! Flat toroidal cell buffer.

use crate::pattern::Pattern;
use crate::rule::Rule;
use gol_core::{Cell, Direction, Error, Position, RenderConfig, Result, SeedConfig, UniverseConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// A 2D toroidal grid stored row-major as `row * width + col`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid with unchecked dimensions. [`Grid::from_config`] is the
    /// public constructor.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
        }
    }

    /// Create a seeded grid from universe configuration
    pub fn from_config(config: &UniverseConfig) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::new(config.width, config.height);
        grid.seed(&config.seed)?;
        Ok(grid)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Replace the contents according to `seed`
    pub fn seed(&mut self, seed: &SeedConfig) -> Result<()> {
        seed.validate()?;
        self.clear();

        match seed {
            SeedConfig::Modulo { moduli } => self.fill_modulo(moduli),
            SeedConfig::Random { seed, density } => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                self.fill_random(&mut rng, *density);
            }
            SeedConfig::Pattern { name, row, col } => {
                let pattern =
                    Pattern::by_name(name).ok_or_else(|| Error::UnknownPattern(name.clone()))?;
                self.stamp(pattern, Position::new(*row, *col));
            }
            SeedConfig::Cells { cells } => {
                for &pos in cells {
                    self.set(pos, Cell::Alive);
                }
            }
            SeedConfig::Empty => {}
        }

        Ok(())
    }

    /// Cell `i` becomes alive iff `i % m == 0` for some non-zero `m`
    pub fn fill_modulo(&mut self, moduli: &[u32]) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let i = i as u64;
            *cell = Cell::from(moduli.iter().any(|&m| m != 0 && i % u64::from(m) == 0));
        }
    }

    /// Each cell is alive with probability `density`
    pub fn fill_random(&mut self, rng: &mut ChaCha8Rng, density: f64) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.gen::<f64>() < density);
        }
    }

    /// Set the pattern's cells alive with its top-left corner at `origin`
    pub fn stamp(&mut self, pattern: &Pattern, origin: Position) {
        for &(drow, dcol) in pattern.cells {
            self.set(origin.add(drow, dcol), Cell::Alive);
        }
    }

    /// Get cell at position (with toroidal wrapping)
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.pos_to_index(pos)]
    }

    /// Set cell at position (with toroidal wrapping)
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let index = self.pos_to_index(pos);
        self.cells[index] = cell;
    }

    pub fn toggle(&mut self, pos: Position) {
        let index = self.pos_to_index(pos);
        self.cells[index] = self.cells[index].toggled();
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The eight wrapped neighbour positions of `pos`, in [`Direction::all`] order.
    ///
    /// On grids narrower or shorter than three cells the same position can
    /// appear more than once.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let pos = pos.wrap(self.width, self.height);
        self.neighbor_coords(pos.row as u32, pos.col as u32)
            .into_iter()
            .map(|(row, col)| Position::new(row as i32, col as i32))
    }

    /// Live cells among the eight toroidal neighbours of `pos`
    pub fn live_neighbor_count(&self, pos: Position) -> u8 {
        let pos = pos.wrap(self.width, self.height);
        self.count_at(pos.row as u32, pos.col as u32)
    }

    fn count_at(&self, row: u32, col: u32) -> u8 {
        self.neighbor_coords(row, col)
            .into_iter()
            .map(|(r, c)| self.cells[self.index(r, c)] as u8)
            .sum()
    }

    /// Wrapped `(row, col)` for each of the eight directions around an in-range cell
    fn neighbor_coords(&self, row: u32, col: u32) -> [(u32, u32); 8] {
        let north = if row == 0 { self.height - 1 } else { row - 1 };
        let south = if row + 1 == self.height { 0 } else { row + 1 };
        let west = if col == 0 { self.width - 1 } else { col - 1 };
        let east = if col + 1 == self.width { 0 } else { col + 1 };

        Direction::all().map(|direction| {
            let (drow, dcol) = direction.to_delta();
            let r = match drow {
                -1 => north,
                1 => south,
                _ => row,
            };
            let c = match dcol {
                -1 => west,
                1 => east,
                _ => col,
            };
            (r, c)
        })
    }

    /// Write the next generation of `self` into `next`.
    ///
    /// Every cell is read from `self` only, so the update is simultaneous.
    pub fn evolve_into(&self, rule: &Rule, next: &mut Grid) {
        debug_assert_eq!((self.width, self.height), (next.width, next.height));

        for row in 0..self.height {
            for col in 0..self.width {
                let index = self.index(row, col);
                let neighbors = self.count_at(row, col);
                next.cells[index] = rule.next(self.cells[index], neighbors);
            }
        }
    }

    /// One line per row, one glyph per cell, each line ending in `\n`
    pub fn render(&self, glyphs: &RenderConfig) -> String {
        let glyph_len = glyphs.alive.len_utf8().max(glyphs.dead.len_utf8());
        let mut out = String::with_capacity(self.cells.len() * glyph_len + self.height as usize);

        for line in self.cells.chunks(self.width as usize) {
            for cell in line {
                out.push(if cell.is_alive() { glyphs.alive } else { glyphs.dead });
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        let wrapped = pos.wrap(self.width, self.height);
        self.index(wrapped.row as u32, wrapped.col as u32)
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index / width) as i32, (index % width) as i32)
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.index_to_pos(i), cell))
    }
}
