//! The `Game` aggregate: players, turn order and command handling.
//!
//! `run_command` is the single mutation entry point. It never fails: rule
//! violations are narrated into the event log and leave state unchanged.
//! Landing resolution and bankruptcy live in `landing.rs`.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::command::{ChatRouter, Command, CommandRouter};
use super::state::{GameOutcome, PendingAction, PendingKind, Phase, PlayerView, SpaceView, StateSnapshot};
use crate::board::Board;
use crate::core::{EventLog, GameConfig, GameOptions, GameRng, GameRngState, Player, Result};

/// One match, from the first join to the last bankruptcy.
///
/// Hosts own their `Game` instances; nothing here is global. A new match is a
/// new `Game`.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    /// Join order until `start`, then the shuffled turn order.
    pub(super) players: Vec<Player>,
    /// Name -> index into `players`. Rebuilt whenever `players` is reordered
    /// or shrinks.
    pub(super) index: FxHashMap<String, usize>,
    /// Index into `players` of whoever rolls next.
    pub(super) current: usize,
    pub(super) phase: Phase,
    pub(super) pending: Option<PendingAction>,
    pub(super) outcome: Option<GameOutcome>,
    pub(super) log: EventLog,
    pub(super) rng: GameRng,
}

impl Game {
    /// Create a game on a freshly generated board, seeded from entropy.
    pub fn new(config: GameConfig, options: GameOptions) -> Result<Self> {
        let seed = GameRng::from_entropy().seed();
        Self::with_seed(config, options, seed)
    }

    /// Create a game whose board, turn order, dice and chance draws all
    /// derive from `seed`.
    pub fn with_seed(config: GameConfig, options: GameOptions, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let size = options.board_size.unwrap_or(config.board_size);
        let board = Board::generate(size, &options.images, &mut rng)?;

        Ok(Self::assemble(config, board, rng))
    }

    /// Create a game on a prebuilt board.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, board, GameRng::new(seed)))
    }

    fn assemble(config: GameConfig, board: Board, rng: GameRng) -> Self {
        info!(board_size = board.size(), seed = rng.seed(), "Created game");
        Self {
            config,
            board,
            players: Vec::new(),
            index: FxHashMap::default(),
            current: 0,
            phase: Phase::Waiting,
            pending: None,
            outcome: None,
            log: EventLog::new(),
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|&i| &self.players[i])
    }

    /// Whose turn it is, while the game is in progress.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::InProgress => self.players.get(self.current),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// How the game ended, once finished.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Position of the game's RNG, for checking that two games replayed in
    /// lockstep.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Return narration accumulated since the last drain and advance past it.
    pub fn drain_log(&mut self) -> Vec<String> {
        self.log.drain()
    }

    /// Whether the name index exactly mirrors the player list.
    #[must_use]
    pub fn index_in_sync(&self) -> bool {
        self.index.len() == self.players.len()
            && self
                .players
                .iter()
                .enumerate()
                .all(|(i, p)| self.index.get(&p.name) == Some(&i))
    }

    /// Snapshot for rendering. Does not drain the log.
    #[must_use]
    pub fn get_state(&self) -> StateSnapshot {
        StateSnapshot {
            game_state: self.phase,
            players: self
                .players
                .iter()
                .map(|p| PlayerView::new(p, self.property_names(p)))
                .collect(),
            board: self.board.spaces().iter().map(SpaceView::from_space).collect(),
            current_player_name: self.current_player().map(|p| p.name.clone()),
            pending_action: self.pending.clone(),
            log: self.log.pending(),
        }
    }

    // === Command entry points ===

    /// Route a raw chat message with the `!command` router and run it.
    pub fn submit(&mut self, message: &str, player_name: &str) {
        self.submit_with(&ChatRouter, message, player_name);
    }

    /// Route a raw message with `router` and run the result.
    pub fn submit_with<R: CommandRouter>(&mut self, router: &R, message: &str, player_name: &str) {
        match router.route(message, self.phase) {
            Some(command) => self.run_command(command, player_name),
            None => {
                debug!(player = player_name, message, "Unroutable message");
                self.log.push(format!(
                    "Invalid command or not allowed in current state: '{}'",
                    message
                ));
            }
        }
    }

    /// Apply a command on behalf of `player_name`.
    pub fn run_command(&mut self, command: Command, player_name: &str) {
        debug!(%command, player = player_name, phase = ?self.phase, "Running command");

        if self.phase == Phase::Finished && !matches!(command, Command::Status | Command::Board) {
            self.reject(command, player_name, "The game is over.");
            return;
        }

        match command {
            Command::Join => self.join(player_name),
            Command::Start => self.start(player_name),
            Command::Roll => self.roll(player_name),
            Command::Buy => self.buy(player_name),
            Command::Pass => self.pass(player_name),
            Command::Status => self.status(player_name),
            Command::Board => self.show_board(),
        }

        debug_assert!(self.index_in_sync(), "player index out of sync");
    }

    // === Commands ===

    fn join(&mut self, name: &str) {
        if self.phase != Phase::Waiting {
            return self.reject(Command::Join, name, "Cannot join a game that is already in progress.");
        }
        if name.trim().is_empty() {
            return self.reject(Command::Join, name, "A player name is required to join.");
        }
        if self.index.contains_key(name) {
            let msg = format!("Player {} is already in the game.", name);
            return self.reject(Command::Join, name, msg);
        }
        if self.players.len() >= self.config.max_players {
            let msg = format!(
                "The game is full. Cannot add more than {} players.",
                self.config.max_players
            );
            return self.reject(Command::Join, name, msg);
        }

        self.index.insert(name.to_string(), self.players.len());
        self.players.push(Player::new(name, self.config.starting_money));

        info!(player = name, count = self.players.len(), "Player joined");
        self.log.push(format!(
            "Player {} has joined the game. Total players: {}",
            name,
            self.players.len()
        ));
    }

    fn start(&mut self, name: &str) {
        if self.phase != Phase::Waiting {
            return self.reject(Command::Start, name, "The game has already started.");
        }
        if self.players.len() < self.config.min_players {
            let msg = format!("Need at least {} players to start.", self.config.min_players);
            return self.reject(Command::Start, name, msg);
        }

        self.rng.shuffle(&mut self.players);
        self.rebuild_index();
        self.current = 0;
        self.phase = Phase::InProgress;

        let order = self.player_names().join(", ");
        info!(%order, "Game started");
        self.log.push(format!("The game has started! Player order: {}", order));
        self.log.push(format!("It's {}'s turn.", self.players[0].name));
    }

    fn roll(&mut self, name: &str) {
        if self.phase != Phase::InProgress {
            return self.reject(Command::Roll, name, "The game has not started yet.");
        }
        if let Some(pending) = &self.pending {
            let msg = format!(
                "There is a pending action for {}. Please resolve it with !buy or !pass.",
                pending.player_name
            );
            return self.reject(Command::Roll, name, msg);
        }
        let current = &self.players[self.current].name;
        if current != name {
            let msg = format!("It's not your turn, {}. It's {}'s turn.", name, current);
            return self.reject(Command::Roll, name, msg);
        }

        let die1 = self.rng.roll_die();
        let die2 = self.rng.roll_die();
        let total = die1 + die2;
        self.log.push(format!("{} rolled a {} + {} = {}.", name, die1, die2, total));

        self.play_roll(total as usize);
    }

    /// Move the current player `steps` spaces, resolve the landing, and end
    /// the turn unless a decision is pending or the game is over.
    pub(super) fn play_roll(&mut self, steps: usize) {
        let mover = self.current;
        let size = self.board.size();
        let pass_go_money = self.config.pass_go_money;

        let player = &mut self.players[mover];
        let name = player.name.clone();
        let passed_go = player.move_by(steps, size);
        if passed_go {
            player.receive(pass_go_money);
        }
        let position = player.position;

        debug!(player = %name, steps, position, passed_go, "Moved");
        if passed_go {
            self.log.push(format!("{} passed GO and collected ${}.", name, pass_go_money));
        }
        self.log.push(format!(
            "{} landed on {}.",
            name,
            self.board.spaces()[position].name
        ));

        self.resolve_landing(mover);

        if self.phase != Phase::InProgress || self.pending.is_some() {
            return;
        }

        match self.index.get(&name).copied() {
            Some(i) => {
                let status = self.status_line(i);
                self.log.push(format!("Status: {}", status));
                self.end_turn();
            }
            // The mover went bankrupt and the turn already points at their
            // successor.
            None => self.announce_turn(),
        }
    }

    fn buy(&mut self, name: &str) {
        let Some(pending) = self.pending_for(Command::Buy, name) else {
            return;
        };

        let position = pending.space_position;
        let Some(&i) = self.index.get(name) else {
            return;
        };

        let space_name = self.board.spaces()[position].name.clone();
        let bought = match self.board.property_mut(position) {
            // Affordability is checked first: a failed purchase never
            // bankrupts the buyer.
            Some(property) if self.players[i].money >= property.price => {
                let price = property.price;
                self.players[i].buy_property(position, property).then_some(price)
            }
            _ => None,
        };

        match bought {
            Some(price) => {
                info!(player = name, property = %space_name, price, "Property bought");
                self.log.push(format!("{} has bought {} for ${}!", name, space_name, price));
            }
            None => {
                debug!(player = name, property = %space_name, "Purchase unaffordable");
                self.log.push(format!(
                    "{} does not have enough money to buy {}.",
                    name, space_name
                ));
            }
        }

        self.pending = None;
        let status = self.status_line(i);
        self.log.push(format!("Status: {}", status));
        self.end_turn();
    }

    fn pass(&mut self, name: &str) {
        if self.pending_for(Command::Pass, name).is_none() {
            return;
        }

        debug!(player = name, "Declined purchase");
        self.log.push(format!("{} decided not to buy the property.", name));
        self.pending = None;
        self.end_turn();
    }

    fn status(&mut self, name: &str) {
        match self.index.get(name).copied() {
            Some(i) => {
                let status = self.status_line(i);
                self.log.push(status);
            }
            None => self.log.push(format!("Player {} not found in the game.", name)),
        }
    }

    fn show_board(&mut self) {
        self.log.push("--- Current Board State ---");
        for line in self.board.display().lines() {
            self.log.push(line);
        }
        self.log.push("-------------------------");
    }

    // === Helpers ===

    /// The pending decision if it belongs to `name`; otherwise log why
    /// `command` is rejected.
    fn pending_for(&mut self, command: Command, name: &str) -> Option<PendingAction> {
        let owed_by_caller = self
            .pending
            .as_ref()
            .map(|p| p.kind == PendingKind::BuyOrPass && p.player_name == name);

        match owed_by_caller {
            Some(true) => self.pending.clone(),
            Some(false) => {
                let msg = format!("It is not your turn to {}, {}.", command, name);
                self.reject(command, name, msg);
                None
            }
            None => {
                let msg = format!("There is nothing to {} right now.", command);
                self.reject(command, name, msg);
                None
            }
        }
    }

    fn reject(&mut self, command: Command, player: &str, msg: impl Into<String>) {
        let msg = msg.into();
        debug!(%command, player, reason = %msg, "Rejected command");
        self.log.push(msg);
    }

    pub(super) fn end_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.announce_turn();
    }

    pub(super) fn announce_turn(&mut self) {
        let next = &self.players[self.current].name;
        debug!(player = %next, "Turn advanced");
        self.log.push(format!("It's now {}'s turn.", next));
    }

    pub(super) fn rebuild_index(&mut self) {
        self.index = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
    }

    fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    fn property_names(&self, player: &Player) -> Vec<String> {
        player
            .properties
            .iter()
            .map(|&pos| self.board.spaces()[pos].name.clone())
            .collect()
    }

    /// `Player: <name>, Money: $<money>, Properties: <names or None>`.
    pub(super) fn status_line(&self, i: usize) -> String {
        let player = &self.players[i];
        let names = self.property_names(player);
        let properties = if names.is_empty() {
            "None".to_string()
        } else {
            names.join(", ")
        };
        format!(
            "Player: {}, Money: ${}, Properties: {}",
            player.name, player.money, properties
        )
    }
}
