mod board;
mod countdown;
mod direction;
mod snake;
use self::board::Board;
use self::countdown::Countdown;
use self::direction::Direction;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::highscores::SaveError;
use crate::menu::MainMenu;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// The game screen: session state plus the update loop and its timers
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    food: Position,
    board: Board,
    eaten: u32,
    tick_period: Duration,
    state: GameState,
    countdown: Option<Countdown>,
    next_tick: Option<Instant>,
    warning: Option<String>,
    globals: Globals,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, mut rng: R) -> Game<R> {
        let mut board = Board::new(consts::BOARD_SIZE);
        if globals.options.obstacles {
            board.scatter_obstacles(&mut rng);
        }
        let food = board.random_cell(&mut rng);
        let tick_period = globals.options.difficulty.tick_period();
        Game {
            rng,
            snake: Snake::new(consts::START_CELL),
            food,
            board,
            eaten: 0,
            tick_period,
            state: GameState::Running,
            countdown: None,
            next_tick: None,
            warning: None,
            globals,
        }
    }

    /// Wait for the next timer deadline or input event, whichever comes
    /// first, and act on it.  Returns `Some` if the application should switch
    /// to another screen.
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            let tick_period = self.tick_period;
            let mut when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + tick_period);
            if let Some(deadline) = self.countdown.as_ref().and_then(Countdown::deadline) {
                when = when.min(deadline);
            }
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let now = Instant::now();
                if self.countdown.as_ref().is_some_and(|c| c.due(now)) {
                    self.second_elapsed();
                }
                if self.running() && self.next_tick.is_some_and(|t| t <= now) {
                    self.advance();
                    self.next_tick = None;
                }
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// One step of the update loop.  Until the first directional key press,
    /// ticks leave the session untouched (the screen still repaints).
    fn advance(&mut self) {
        if !self.running() || self.snake.heading().is_none() {
            return;
        }
        if self.snake.head() == self.food {
            self.snake.grow();
            self.eaten += 1;
            self.food = self.board.random_cell(&mut self.rng);
            if self.globals.options.difficulty.speeds_up()
                && self.eaten % consts::SPEEDUP_EVERY == 0
            {
                self.tick_period = self
                    .tick_period
                    .saturating_sub(consts::SPEEDUP_STEP)
                    .max(consts::MIN_TICK_PERIOD);
            }
            if self.timed() && self.eaten >= consts::FOOD_TARGET {
                self.finish(true);
                return;
            }
        }
        if !self.snake.advance(self.board.size()) {
            self.finish(false);
            return;
        }
        let head = self.snake.head();
        let hit_obstacle = self.board.obstacles().contains(&head);
        let hit_body = self.snake.body().contains(&head);
        if hit_obstacle || hit_body {
            self.finish(false);
        }
    }

    /// One firing of the limited-time countdown
    fn second_elapsed(&mut self) {
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };
        let remaining = countdown.second_elapsed();
        if self.eaten >= consts::FOOD_TARGET {
            self.finish(true);
        } else if remaining == 0 {
            self.finish(false);
        }
    }

    fn steer(&mut self, direction: Direction) {
        // The first directional press starts the session, and with it the
        // countdown in a limited-time game.
        if self.snake.heading().is_none() && self.timed() {
            self.countdown = Some(Countdown::start(consts::TIME_LIMIT_SECONDS));
        }
        self.snake.steer(direction);
    }

    /// Stop all timers and enter the terminal state
    fn finish(&mut self, win: bool) {
        self.state = GameState::Over { win };
        self.next_tick = None;
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.stop();
        }
        self.record_score();
    }

    fn record_score(&mut self) {
        let Some(score) = NonZeroU32::new(self.eaten) else {
            return;
        };
        let options = self.globals.options;
        if Some(score) <= self.globals.scores.get(options) {
            return;
        }
        self.globals.scores.set(options, score);
        if !self.globals.config.save_scores() {
            return;
        }
        let r = match self.globals.config.scores_file() {
            Some(path) => self.globals.scores.save(&path),
            None => Err(SaveError::no_path()),
        };
        if let Err(e) = r {
            self.warning = Some(e.to_string());
        }
    }

    /// "Play Again": keep the configuration and the obstacle layout, reset
    /// everything else
    fn reset(&mut self) {
        self.snake = Snake::new(consts::START_CELL);
        self.food = self.board.random_cell(&mut self.rng);
        self.eaten = 0;
        self.tick_period = self.globals.options.difficulty.tick_period();
        self.state = GameState::Running;
        self.countdown = None;
        self.next_tick = None;
        self.warning = None;
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.steer(Direction::North),
                Command::Left => self.steer(Direction::West),
                Command::Down => self.steer(Direction::South),
                Command::Right => self.steer(Direction::East),
                _ => (),
            },
            GameState::Over { .. } => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => self.reset(),
                Command::M => return Some(Screen::Main(MainMenu::new(self.globals.clone()))),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn timed(&self) -> bool {
        self.globals.options.mode.timed()
    }

    fn score_line(&self) -> Line<'static> {
        let mut line = Line::default();
        line.push_span(format!(" Score: {}", self.eaten));
        if let Some(best) = self.globals.scores.get(self.globals.options) {
            line.push_span(format!("  Best: {best}"));
        }
        if self.timed() {
            let remaining = self
                .countdown
                .as_ref()
                .map_or(consts::TIME_LIMIT_SECONDS, Countdown::remaining);
            line.push_span(format!(
                "  Time left: {remaining}s  Food: {eaten}/{target}",
                eaten = self.eaten,
                target = consts::FOOD_TARGET
            ));
        }
        line.style(consts::SCORE_BAR_STYLE)
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        self.score_line().render(score_area, buf);

        let mut block_size = self.board.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            area: level_area,
            buf,
        };
        level.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &pos in self.board.obstacles() {
            level.draw_cell(pos, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        for &pos in self.snake.body() {
            level.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head = self.snake.head();
        let collided = matches!(self.state, GameState::Over { win: false })
            && (self.board.obstacles().contains(&head) || self.snake.body().contains(&head));
        if collided {
            level.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            level.draw_cell(head, self.snake.head_symbol(), consts::SNAKE_STYLE);
        }

        if let GameState::Over { win } = self.state {
            let (msg, style) = if win {
                (" — YOU WIN! —", consts::WIN_STYLE)
            } else {
                (" — GAME OVER —", consts::GAME_OVER_STYLE)
            };
            let mut msg1 = Line::from(Span::styled(msg, style));
            if let Some(warning) = self.warning.as_deref() {
                msg1.push_span(format!("  ({warning})"));
            }
            msg1.render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Choose One: Play Again ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Main Menu ("),
                Span::styled("m", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Over { win: bool },
}
