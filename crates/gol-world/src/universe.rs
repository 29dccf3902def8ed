//! The automaton engine.
//!
//! A [`Universe`] owns two equally sized grids. Each tick reads the current
//! grid, writes the next generation into the other one, then swaps them, so
//! no allocation happens after construction.

use crate::grid::Grid;
use crate::pattern::Pattern;
use crate::rule::Rule;
use gol_core::{
    Cell, Error, Position, RenderConfig, Result, UniverseConfig, DEFAULT_HEIGHT,
    DEFAULT_MODULI, DEFAULT_WIDTH,
};
use std::fmt;
use std::mem;
use tracing::{debug, instrument, trace, warn};

#[derive(Debug, Clone)]
pub struct Universe {
    current: Grid,
    next: Grid,
    rule: Rule,
    glyphs: RenderConfig,
    generation: u64,
}

impl Universe {
    /// 64x64 universe where cell `i` starts alive iff `i % 2 == 0 || i % 7 == 0`
    pub fn new() -> Self {
        let mut current = Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        current.fill_modulo(&DEFAULT_MODULI);
        Self::from_parts(current, Rule::conway(), RenderConfig::default())
    }

    pub fn with_config(config: &UniverseConfig) -> Result<Self> {
        let rule = Rule::parse(&config.rule)?;
        let current = Grid::from_config(config)?;

        debug!(
            width = config.width,
            height = config.height,
            seed = config.seed.kind(),
            rule = %rule,
            population = current.live_count(),
            "Universe created"
        );

        Ok(Self::from_parts(current, rule, config.render))
    }

    /// Wrap an existing grid; the second buffer is allocated here.
    pub fn from_grid(current: Grid, rule: Rule, glyphs: RenderConfig) -> Result<Self> {
        if current.is_empty() {
            warn!(
                width = current.width(),
                height = current.height(),
                "Rejecting empty grid"
            );
            return Err(Error::InvalidDimensions {
                width: current.width(),
                height: current.height(),
            });
        }
        Ok(Self::from_parts(current, rule, glyphs))
    }

    fn from_parts(current: Grid, rule: Rule, glyphs: RenderConfig) -> Self {
        let next = Grid::new(current.width(), current.height());
        Self {
            current,
            next,
            rule,
            glyphs,
            generation: 0,
        }
    }

    /// Advance exactly one generation
    pub fn tick(&mut self) {
        self.current.evolve_into(&self.rule, &mut self.next);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.current.live_count(),
            "Tick"
        );
    }

    #[instrument(skip(self), fields(from = self.generation))]
    pub fn tick_n(&mut self, generations: u64) {
        for _ in 0..generations {
            self.tick();
        }
        debug!(
            generation = self.generation,
            population = self.live_count(),
            "Advanced {} generations",
            generations
        );
    }

    /// Textual snapshot using the configured glyphs
    pub fn render(&self) -> String {
        self.current.render(&self.glyphs)
    }

    pub fn render_with(&self, glyphs: &RenderConfig) -> String {
        self.current.render(glyphs)
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        (self.current.width(), self.current.height())
    }

    pub fn width(&self) -> u32 {
        self.current.width()
    }

    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// Number of completed ticks
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn cells(&self) -> &[Cell] {
        self.current.cells()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.current.get(pos)
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.current.set(pos, cell);
    }

    pub fn toggle(&mut self, pos: Position) {
        self.current.toggle(pos);
    }

    pub fn live_count(&self) -> usize {
        self.current.live_count()
    }

    pub fn live_neighbor_count(&self, pos: Position) -> u8 {
        self.current.live_neighbor_count(pos)
    }

    /// Kill every cell. The generation counter is kept.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    pub fn insert_pattern(&mut self, pattern: &Pattern, origin: Position) {
        self.current.stamp(pattern, origin);
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
