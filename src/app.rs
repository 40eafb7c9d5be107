use crate::command::Command;
use crate::game::{GameState, GridFull, Simulation, Tick};
use crate::view::Board;
use anyhow::Context;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Drives a [`Simulation`]: ticks it at a fixed period, feeds it the
/// commands typed since the last tick, and draws it.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::StdRng> {
    sim: Simulation<R>,
    tick_period: Duration,
    /// Commands received since the last tick, oldest first
    queue: VecDeque<Command>,
    next_tick: Option<Instant>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(sim: Simulation<R>, tick_period: Duration) -> App<R> {
        App {
            sim,
            tick_period,
            queue: VecDeque::new(),
            next_tick: None,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> anyhow::Result<()> {
        while self.sim.is_active() {
            terminal
                .draw(|frame| self.draw(frame))
                .context("failed to draw to terminal")?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next input event or the next tick, whichever
    /// comes first
    fn process_input(&mut self) -> anyhow::Result<()> {
        let period = self.tick_period;
        let when = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + period);
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait).context("failed to poll for terminal events")? {
            self.next_tick = None;
            let _ = self.step()?;
        } else {
            self.handle_event(read().context("failed to read terminal event")?);
        }
        Ok(())
    }

    /// Apply all queued commands in the order they arrived, then advance the
    /// simulation by one tick.  A restart takes the place of that tick so
    /// that the fresh snake is drawn before it moves.
    fn step(&mut self) -> Result<Tick, GridFull> {
        let mut restarted = false;
        while let Some(cmd) = self.queue.pop_front() {
            if cmd == Command::Restart {
                self.sim.restart()?;
                restarted = true;
            } else if let Some(d) = cmd.direction() {
                self.sim.set_direction(d);
            }
        }
        if restarted {
            Ok(Tick::Idle)
        } else {
            Ok(self.sim.tick())
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        let snapshot = self.sim.snapshot();
        frame.render_widget(&Board::new(self.sim.grid(), &snapshot), frame.area());
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return;
        };
        let accepted = match cmd {
            // Quitting shouldn't have to wait for the next tick
            Command::Quit => {
                self.sim.quit();
                return;
            }
            Command::Restart => self.sim.state() == GameState::GameOver,
            _ => self.sim.state() == GameState::Running,
        };
        if accepted {
            self.queue.push_back(cmd);
        } else {
            log::debug!("Dropping {cmd:?} while {:?}", self.sim.state());
        }
    }
}
