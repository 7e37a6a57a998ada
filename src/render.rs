//! Fixed-grid ASCII projection
//!
//! Projects a state onto a 5-row text grid for human debugging. Purely a
//! view: rendering has no effect on simulation semantics. The dino always
//! occupies column 3; the rightmost column of every row is a wall glyph and
//! the bottom row is the ground line.

use crate::sim::GameState;

/// Grid height in rows
pub const GRID_ROWS: usize = 5;
/// Grid width in characters, wall column included
pub const GRID_COLS: usize = 46;
/// Fixed column the dino occupies
pub const DINO_COLUMN: i32 = 3;

const GROUND_ROW: usize = GRID_ROWS - 1;

/// Render the state as a newline-terminated grid string.
pub fn render(state: &GameState) -> String {
    let mut grid = [[' '; GRID_COLS]; GRID_ROWS];
    for (row_index, row) in grid.iter_mut().enumerate() {
        if row_index == GROUND_ROW {
            row[..GRID_COLS - 1].fill('.');
        }
        row[GRID_COLS - 1] = '#';
    }

    for i in 0..state.h {
        put(&mut grid, state.y + i, DINO_COLUMN, 'D');
    }
    // Obstacles draw last and may overwrite the dino on a collision frame.
    for obstacle in &state.obstacles {
        let glyph = if obstacle.y == 0 { '|' } else { '<' };
        for i in 0..obstacle.h {
            for j in 0..obstacle.w {
                put(
                    &mut grid,
                    obstacle.y + i,
                    DINO_COLUMN + obstacle.distance + j,
                    glyph,
                );
            }
        }
    }

    let mut out = String::with_capacity(GRID_ROWS * (GRID_COLS + 1));
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Write one glyph at (altitude, column), clipping anything off the grid.
fn put(grid: &mut [[char; GRID_COLS]; GRID_ROWS], altitude: i32, col: i32, glyph: char) {
    let row = GROUND_ROW as i32 - altitude;
    if (0..GRID_ROWS as i32).contains(&row) && (0..GRID_COLS as i32).contains(&col) {
        grid[row as usize][col as usize] = glyph;
    }
}
