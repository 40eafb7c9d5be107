use super::direction::Direction;
use super::grid::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The body is stored head-first: index 0 is the head and the last element is
/// the tip of the tail.  The body is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells in the snake, head first
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) heading: Direction,
}

impl Snake {
    /// Create a snake occupying `cells` (head first) and moving in `heading`.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub(super) fn new<I: IntoIterator<Item = Position>>(cells: I, heading: Direction) -> Snake {
        let body = VecDeque::from_iter(cells);
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Snake { body, heading }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.body[0]
    }

    pub(super) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Push a new head one cell along the current heading and return its
    /// position.  The tail is left in place; call [`Snake::retract()`] to
    /// keep the length unchanged.
    pub(super) fn extend(&mut self) -> Position {
        let head = self.heading.advance(self.head());
        self.body.push_front(head);
        head
    }

    /// Drop the last cell of the tail.  The head is never removed.
    pub(super) fn retract(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Does the head share a cell with any other segment?
    pub(super) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }
}
