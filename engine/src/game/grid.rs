use std::collections::HashSet;
use std::collections::VecDeque;

use crate::log;
use super::session_rng::SessionRng;
use super::types::{CellState, EndReason, Point};

pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 64;

/// Square cell matrix plus the food lifecycle. Knows nothing about
/// movement or direction; the snake is stamped in from outside each tick.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, String> {
        // An initial three-segment body cannot legally exist below 3x3.
        if size < MIN_GRID_SIZE {
            return Err(format!(
                "Grid size must be at least {}, got {}",
                MIN_GRID_SIZE, size
            ));
        }
        Ok(Self {
            size,
            cells: vec![CellState::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major readout for the renderer.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn cell(&self, point: Point) -> CellState {
        self.cells[self.index(point)]
    }

    fn index(&self, point: Point) -> usize {
        point.row * self.size + point.col
    }

    /// Samples random cells until one outside `occupied` is found and marks
    /// it as food. When the body covers the whole grid there is nothing to
    /// sample, which is reported as `GridFull` instead of looping forever.
    pub fn place_food(
        &mut self,
        occupied: &HashSet<Point>,
        rng: &mut SessionRng,
    ) -> Result<Point, EndReason> {
        if occupied.len() >= self.size * self.size {
            return Err(EndReason::GridFull);
        }

        loop {
            let pos = Point::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if occupied.contains(&pos) {
                continue;
            }

            let index = self.index(pos);
            self.cells[index] = CellState::Food;
            log!("Food spawned at ({}, {})", pos.row, pos.col);
            return Ok(pos);
        }
    }

    pub fn food_position(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|cell| *cell == CellState::Food)
            .map(|index| Point::new(index / self.size, index % self.size))
    }

    pub fn clear_food(&mut self) {
        if let Some(pos) = self.food_position() {
            let index = self.index(pos);
            self.cells[index] = CellState::Empty;
        }
    }

    /// Resets body and head cells back to empty, leaving food in place.
    /// Called once per tick before the moved body is stamped in again.
    pub fn clear_transient_marks(&mut self) {
        for cell in &mut self.cells {
            if matches!(cell, CellState::Body | CellState::Head) {
                *cell = CellState::Empty;
            }
        }
    }

    /// Stamps the body into the grid: every segment except the last becomes
    /// `Body`, the last one `Head`.
    pub fn mark_body(&mut self, body: &VecDeque<Point>) {
        for point in body {
            let index = self.index(*point);
            self.cells[index] = CellState::Body;
        }
        if let Some(head) = body.back() {
            let index = self.index(*head);
            self.cells[index] = CellState::Head;
        }
    }
}
