use engine::game::{CellState, Renderer};

/// Draws each frame as an N x N character block, redrawing in place with
/// ANSI cursor control. Stands in for the physical LED matrix.
pub struct TerminalRenderer {
    size: usize,
    frame: Vec<CellState>,
    color: bool,
    first_frame: bool,
}

impl TerminalRenderer {
    pub fn new(size: usize, color: bool) -> Self {
        Self {
            size,
            frame: vec![CellState::Empty; size * size],
            color,
            first_frame: true,
        }
    }

    fn symbol(cell: CellState, color: bool) -> &'static str {
        if color {
            match cell {
                CellState::Empty => "\x1b[2m· \x1b[0m",
                CellState::Body => "\x1b[32m██\x1b[0m",
                CellState::Head => "\x1b[92m██\x1b[0m",
                CellState::Food => "\x1b[31m██\x1b[0m",
            }
        } else {
            match cell {
                CellState::Empty => "· ",
                CellState::Body => "o ",
                CellState::Head => "@ ",
                CellState::Food => "* ",
            }
        }
    }
}

impl Renderer for TerminalRenderer {
    fn set_pixel(&mut self, index: usize, cell: CellState) {
        if index < self.frame.len() {
            self.frame[index] = cell;
        }
    }

    fn present(&mut self) {
        let mut output = String::new();
        if self.first_frame {
            output.push_str("\x1b[2J");
            self.first_frame = false;
        }
        output.push_str("\x1b[H");

        for row in 0..self.size {
            for col in 0..self.size {
                output.push_str(Self::symbol(self.frame[row * self.size + col], self.color));
            }
            output.push('\n');
        }

        print!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct_per_cell_state() {
        for color in [false, true] {
            let symbols = [
                TerminalRenderer::symbol(CellState::Empty, color),
                TerminalRenderer::symbol(CellState::Body, color),
                TerminalRenderer::symbol(CellState::Head, color),
                TerminalRenderer::symbol(CellState::Food, color),
            ];
            for i in 0..symbols.len() {
                for j in (i + 1)..symbols.len() {
                    assert_ne!(symbols[i], symbols[j]);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_pixel_is_ignored() {
        let mut renderer = TerminalRenderer::new(3, false);
        renderer.set_pixel(100, CellState::Food);
        assert!(renderer.frame.iter().all(|c| *c == CellState::Empty));
    }

    #[test]
    fn test_set_pixel_is_row_major() {
        let mut renderer = TerminalRenderer::new(3, false);
        renderer.set_pixel(5, CellState::Head);
        assert_eq!(renderer.frame[5], CellState::Head);
        assert_eq!(renderer.frame.iter().filter(|c| **c != CellState::Empty).count(), 1);
    }
}
