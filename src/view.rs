use crate::consts;
use crate::game::{GameState, Grid, Position, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Widget drawing one snapshot of the game: a score bar, the bordered grid
/// with the snake & food on it, and a prompt once the game is over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board<'a> {
    grid: Grid,
    snapshot: &'a Snapshot,
}

impl<'a> Board<'a> {
    pub(crate) fn new(grid: Grid, snapshot: &'a Snapshot) -> Board<'a> {
        Board { grid, snapshot }
    }

    /// Size of the grid in terminal cells, not counting the border
    fn level_size(&self) -> Size {
        let (cell_width, cell_height) = cell_dimensions(self.grid);
        Size {
            width: self.grid.width.saturating_mul(cell_width),
            height: self.grid.height.saturating_mul(cell_height),
        }
    }

    fn collided(&self) -> bool {
        let snap = self.snapshot;
        snap.state == GameState::GameOver
            && snap.head().is_some_and(|head| {
                !self.grid.contains(head) || snap.segments.iter().skip(1).any(|&p| p == head)
            })
    }
}

impl Widget for &Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(" Score: {}", self.snapshot.score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let mut block_size = self.level_size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            grid: self.grid,
            buf,
        };
        level.draw_cell(self.snapshot.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &p in &self.snapshot.segments {
            level.draw_cell(p, consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(head) = self.snapshot.head() {
            if self.collided() {
                level.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            }
        }

        if self.snapshot.state == GameState::GameOver {
            Span::from(" — GAME OVER —").render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

/// Width & height in terminal cells of one grid cell
pub(crate) fn cell_dimensions(grid: Grid) -> (u16, u16) {
    let width = grid.cell_size.max(1);
    let height = (grid.cell_size / consts::CELL_ASPECT).max(1);
    (width, height)
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    grid: Grid,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Fill the terminal cells covered by grid cell `pos`.  Cells off the
    /// grid are not drawn.
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if !self.grid.contains(pos) {
            return;
        }
        let (cell_width, cell_height) = cell_dimensions(self.grid);
        let Some((col, _)) = self.grid.cell_origin(pos) else {
            return;
        };
        let Ok(col) = u16::try_from(col) else {
            return;
        };
        let Some(row) = u16::try_from(pos.y)
            .ok()
            .and_then(|y| y.checked_mul(cell_height))
        else {
            return;
        };
        let cell = Rect {
            x: self.area.x.saturating_add(col),
            y: self.area.y.saturating_add(row),
            width: cell_width,
            height: cell_height,
        }
        .intersection(self.area);
        for p in cell.positions() {
            if let Some(c) = self.buf.cell_mut(p) {
                c.set_char(symbol);
                c.set_style(Style::reset().patch(style));
            }
        }
    }
}
