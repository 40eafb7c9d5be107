use std::fmt;

/// A cell coordinate.  Coordinates are signed so that a head which has run
/// off the edge of the grid can still be represented.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The bounded playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    /// Number of cells per row
    pub(crate) width: u16,

    /// Number of rows
    pub(crate) height: u16,

    /// Size of one cell in drawing units
    pub(crate) cell_size: u16,
}

impl Grid {
    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..i32::from(self.width)).contains(&pos.x) && (0..i32::from(self.height)).contains(&pos.y)
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Return the drawing-space origin of the cell at `pos`, or `None` if it
    /// does not fit in an `i32`
    pub(crate) fn cell_origin(self, pos: Position) -> Option<(i32, i32)> {
        let size = i32::from(self.cell_size);
        Some((pos.x.checked_mul(size)?, pos.y.checked_mul(size)?))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            width: 30,
            height: 24,
            cell_size: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(29, 23), true)]
    #[case(Position::new(15, 7), true)]
    #[case(Position::new(-1, 5), false)]
    #[case(Position::new(5, -1), false)]
    #[case(Position::new(30, 5), false)]
    #[case(Position::new(5, 24), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(Grid::default().contains(pos), inside);
    }

    #[test]
    fn positions_cover_grid() {
        let grid = Grid {
            width: 3,
            height: 2,
            cell_size: 1,
        };
        assert_eq!(
            grid.positions().collect::<Vec<_>>(),
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn cell_origin_scales() {
        let grid = Grid {
            width: 30,
            height: 24,
            cell_size: 20,
        };
        assert_eq!(grid.cell_origin(Position::new(3, 5)), Some((60, 100)));
    }

    #[test]
    fn cell_origin_overflow() {
        let grid = Grid {
            width: 30,
            height: 24,
            cell_size: u16::MAX,
        };
        assert_eq!(grid.cell_origin(Position::new(i32::MAX, 0)), None);
        assert_eq!(grid.cell_origin(Position::new(0, -40000)), None);
    }
}
