//! The game controller.

use smallvec::SmallVec;

use crate::core::{
    Board, CardIndex, GameConfig, GameRng, GameState, Millis, Phase, Result, Timings,
};
use crate::render::{render, Animation, BoardView, Scene};
use crate::schedule::{Epoch, Fired, Stopwatch, TimerHandle, TimerQueue};

use super::input::Input;
use super::messages;
use super::outcome::{IgnoreReason, Outcome};
use super::timer::GameTimer;

/// Face-up cards waiting to be compared. Never more than two.
pub type Selection = SmallVec<[CardIndex; 2]>;

/// One memory game.
///
/// Owns the board, counters, presentation overlay and every pending timer.
/// Clicks apply synchronously; everything delayed goes through the timer
/// queue, which the host drives with `advance`.
///
/// ## Lifecycle
///
/// - `Game::new`: validate config, deal, start the preview
/// - `Game::reset`: cancel all timers, deal again, replay the preview
/// - `Game::destroy`: cancel all timers and drop the game
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    state: GameState,
    selection: Selection,
    scene: Scene,
    timers: TimerQueue<GameTimer>,
    stopwatch: Stopwatch,
    message_clear: Option<TimerHandle>,
}

impl Game {
    /// Build a game and start its preview.
    ///
    /// Fails if the configuration is malformed; nothing is truncated or
    /// padded to make it fit.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = GameRng::from_seed_or_entropy(config.seed);
        log::debug!(
            "new game: {} pairs, seed {}",
            config.pair_count,
            rng.seed()
        );

        let mut game = Self {
            stopwatch: Stopwatch::new(config.timings.tick),
            config,
            rng,
            board: Board::default(),
            state: GameState::new(),
            selection: Selection::new(),
            scene: Scene::default(),
            timers: TimerQueue::new(),
            message_clear: None,
        };
        game.start_round();
        Ok(game)
    }

    // === Accessors ===

    /// Configuration the game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Counters and phase.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cards waiting for comparison.
    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        &self.selection
    }

    /// Presentation overlay.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Seed used for dealing.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current time on the game clock.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    /// Timer generation; bumped on every reset.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.timers.epoch()
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Time until the next timer fires, if any is pending.
    #[must_use]
    pub fn time_to_next_timer(&self) -> Option<Millis> {
        self.timers
            .next_due()
            .map(|due| due.saturating_sub(self.timers.now()))
    }

    /// O(1) copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Project the current state into a drawable view.
    #[must_use]
    pub fn view(&self) -> BoardView {
        render(&self.board, &self.state, &self.scene)
    }

    // === Lifecycle ===

    /// Throw away the current game and deal a new one.
    ///
    /// Every pending timer of the old game is cancelled before the new board
    /// exists, so none of them can touch it.
    pub fn reset(&mut self) {
        let dropped = self.timers.cancel_all();
        self.stopwatch.detach();
        self.message_clear = None;
        log::info!(
            "reset after {} moves, {} pending timers dropped",
            self.state.moves,
            dropped
        );
        self.start_round();
    }

    /// Cancel every pending timer and drop the game.
    pub fn destroy(mut self) {
        let dropped = self.timers.cancel_all();
        self.stopwatch.detach();
        log::debug!("game destroyed, {dropped} pending timers dropped");
    }

    fn start_round(&mut self) {
        self.board = Board::deal(&self.config.images, &mut self.rng);
        self.scene = Scene::new(self.board.len());
        self.state = GameState::new();
        self.selection.clear();
        self.schedule_preview();
    }

    fn schedule_preview(&mut self) {
        let timings = self.config.timings;
        let count = self.board.len();
        let reveal_at = timings.reveal_at(count);
        let conceal_at = timings.conceal_at(count);

        for i in 0..count {
            let index = CardIndex::new(i);
            let turn = Timings::staggered(timings.preview_stagger, i);
            self.timers.schedule(
                Timings::staggered(timings.deal_stagger, i),
                GameTimer::Deal(index),
            );
            self.timers.schedule(
                reveal_at.saturating_add(turn),
                GameTimer::PreviewReveal(index),
            );
            self.timers.schedule(
                conceal_at.saturating_add(turn),
                GameTimer::PreviewConceal(index),
            );
        }
        self.timers
            .schedule(timings.preview_duration(count), GameTimer::PreviewDone);
    }

    // === Input ===

    /// Feed one resolved input to the game.
    pub fn dispatch(&mut self, input: Input) -> Outcome {
        match input {
            Input::Card(raw) => self.click(raw),
            Input::Reset => {
                self.reset();
                Outcome::Reset
            }
            Input::Invalid => Outcome::Ignored(IgnoreReason::Unresolved),
        }
    }

    /// Click the card at board position `raw`.
    pub fn click(&mut self, raw: usize) -> Outcome {
        let phase = self.state.phase;
        if phase.is_locked() {
            log::trace!("click on {raw} ignored while {phase}");
            return Outcome::Ignored(IgnoreReason::Locked(phase));
        }

        let Some(index) = self.board.index(raw) else {
            return Outcome::Ignored(IgnoreReason::OutOfRange);
        };
        if self.selection.contains(&index) {
            return Outcome::Ignored(IgnoreReason::SameCard);
        }
        if !self.board.flip(index) {
            return Outcome::Ignored(IgnoreReason::AlreadyRevealed);
        }

        self.selection.push(index);
        if self.selection.len() == 1 {
            self.first_flipped(index)
        } else {
            let first = self.selection[0];
            self.compare(first, index)
        }
    }

    fn first_flipped(&mut self, index: CardIndex) -> Outcome {
        self.state.phase = Phase::OneSelected;
        self.state.started = true;
        if self.stopwatch.start(&mut self.timers, GameTimer::Tick) {
            log::debug!("clock started");
        }
        Outcome::Flipped(index)
    }

    fn compare(&mut self, first: CardIndex, second: CardIndex) -> Outcome {
        self.state.moves += 1;
        self.state.phase = Phase::CheckingPair;

        if self.board.same_image(first, second) {
            self.pair_found(first, second)
        } else {
            log::debug!("mismatch {first} / {second}, move {}", self.state.moves);
            self.timers.schedule(
                self.config.timings.mismatch_delay,
                GameTimer::MismatchShake(first, second),
            );
            Outcome::Mismatched(first, second)
        }
    }

    fn pair_found(&mut self, first: CardIndex, second: CardIndex) -> Outcome {
        let pulse = self.config.timings.pulse;
        for index in [first, second] {
            self.board.mark_matched(index);
            self.scene.animate(index, Animation::Pulse);
            self.timers
                .schedule(pulse, GameTimer::Finish(index, Animation::Pulse));
        }
        self.selection.clear();
        self.state.matches += 1;
        log::debug!(
            "pair {first} / {second} found, {}/{}",
            self.state.matches,
            self.config.pair_count
        );

        if self.state.matches as usize == self.config.pair_count {
            self.win()
        } else {
            self.state.phase = Phase::Ready;
            self.show_message(messages::PAIR_FOUND);
            Outcome::Matched(first, second)
        }
    }

    fn win(&mut self) -> Outcome {
        self.state.phase = Phase::Won;
        self.stopwatch.stop(&mut self.timers);

        let stagger = self.config.timings.bounce_stagger;
        for i in 0..self.board.len() {
            self.timers.schedule(
                Timings::staggered(stagger, i),
                GameTimer::Bounce(CardIndex::new(i)),
            );
        }

        let GameState {
            moves,
            elapsed_seconds,
            ..
        } = self.state;
        log::info!("won with {moves} moves in {elapsed_seconds}s");
        self.show_message(messages::victory(moves, elapsed_seconds));
        Outcome::Won {
            moves,
            elapsed_seconds,
        }
    }

    fn show_message(&mut self, text: impl Into<String>) {
        if let Some(previous) = self.message_clear.take() {
            self.timers.cancel(previous);
        }
        self.scene.set_message(text);
        self.message_clear = Some(
            self.timers
                .schedule(self.config.timings.message, GameTimer::ClearMessage),
        );
    }

    // === Timers ===

    /// Move the game clock forward, firing every timer that comes due.
    pub fn advance(&mut self, elapsed: Millis) {
        let deadline = self.timers.now().saturating_add(elapsed);
        while let Some(fired) = self.timers.pop_due(deadline) {
            self.on_timer(fired);
        }
        self.timers.settle_at(deadline);
    }

    fn on_timer(&mut self, fired: Fired<GameTimer>) {
        if fired.handle.epoch != self.timers.epoch() {
            log::trace!("stale {:?} from {:?} dropped", fired.payload, fired.handle.epoch);
            return;
        }

        match fired.payload {
            GameTimer::Deal(index) => {
                self.scene.deal(index);
                self.timers.schedule(
                    self.config.timings.deal_settle,
                    GameTimer::Finish(index, Animation::Deal),
                );
            }
            GameTimer::PreviewReveal(index) => self.scene.set_peek(index, true),
            GameTimer::PreviewConceal(index) => self.scene.set_peek(index, false),
            GameTimer::PreviewDone => {
                self.scene.settle();
                self.state.phase = Phase::Ready;
                log::debug!("preview done, accepting input");
                self.show_message(messages::GAME_STARTED);
            }
            GameTimer::MismatchShake(first, second) => {
                for index in [first, second] {
                    self.scene.animate(index, Animation::Shake);
                }
                self.timers.schedule(
                    self.config.timings.shake,
                    GameTimer::MismatchResolve(first, second),
                );
            }
            GameTimer::MismatchResolve(first, second) => {
                if self.state.phase != Phase::CheckingPair {
                    return;
                }
                for index in [first, second] {
                    self.scene.finish(index, Animation::Shake);
                    self.board.conceal(index);
                }
                self.selection.clear();
                self.state.phase = Phase::Ready;
            }
            GameTimer::Bounce(index) => {
                self.scene.animate(index, Animation::Bounce);
                self.timers.schedule(
                    self.config.timings.bounce,
                    GameTimer::Finish(index, Animation::Bounce),
                );
            }
            GameTimer::Finish(index, animation) => {
                self.scene.finish(index, animation);
            }
            GameTimer::Tick => {
                if self
                    .stopwatch
                    .on_tick(&mut self.timers, fired.handle, GameTimer::Tick)
                {
                    self.state.elapsed_seconds += 1;
                }
            }
            GameTimer::ClearMessage => {
                if self.message_clear == Some(fired.handle) {
                    self.message_clear = None;
                    self.scene.clear_message();
                }
            }
        }
    }
}
