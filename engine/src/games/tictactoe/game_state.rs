use super::board::Board;
use super::bot_controller::{best_move_for, try_select_move};
use super::score_tally::ScoreTally;
use super::types::{CELL_COUNT, CellIndex, Mark, Outcome};
use super::win_detector::evaluate;

/// One human-versus-computer session: the live board, whose turn it is, and
/// the win tally that survives "play again".
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: Outcome,
    last_move: Option<CellIndex>,
    tally: ScoreTally,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::Cross,
            status: Outcome::InProgress,
            last_move: None,
            tally: ScoreTally::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn is_player_turn(&self) -> bool {
        self.status == Outcome::InProgress && self.current_mark == Mark::Cross
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.last_move
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Places the human's cross at `index`.
    pub fn place_mark(&mut self, index: CellIndex) -> Result<Outcome, String> {
        self.ensure_turn(Mark::Cross)?;

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_valid_move(index) {
            return Err("Cell is already marked".to_string());
        }

        Ok(self.apply(index))
    }

    /// Lets the engine place the computer's circle and returns where it went.
    pub fn play_computer_turn(&mut self) -> Result<CellIndex, String> {
        self.ensure_turn(Mark::Circle)?;

        let index = try_select_move(&self.board).map_err(|e| e.to_string())?;
        self.apply(index);
        Ok(index)
    }

    /// Best move for the human on the current board.
    pub fn hint(&self) -> Result<CellIndex, String> {
        self.ensure_turn(Mark::Cross)?;
        best_move_for(&self.board, Mark::Cross).map_err(|e| e.to_string())
    }

    /// Starts a new game with the human to move. The tally is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::Cross;
        self.status = Outcome::InProgress;
        self.last_move = None;
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), String> {
        if self.status != Outcome::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != mark {
            return Err("Not your turn".to_string());
        }

        Ok(())
    }

    fn apply(&mut self, index: CellIndex) -> Outcome {
        self.board = self.board.with_mark(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == Outcome::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        self.status
    }

    fn check_game_over(&mut self) {
        self.status = evaluate(&self.board);
        self.tally.record(self.status);
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.board = board;
        self.current_mark = board.next_mark();
        self.status = evaluate(&board);
    }
}
