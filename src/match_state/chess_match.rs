//! Match state machine.
//!
//! `ChessMatch` owns the board and the turn state (turn number, side to move,
//! check and checkmate flags, captured pieces, move history). Every public
//! operation either succeeds completely or leaves the match untouched: moves
//! that would expose the mover's king are executed, tested and rolled back
//! before `SelfCheckForbidden` is returned.
//!
//! Checkmate detection is brute force. For each pseudo-legal move of the side
//! in check the move is executed on the real board, the king is re-tested and
//! the move is undone through its `UndoState`. The first escape ends the
//! search.

use log::{debug, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_mask::BoardMask;
use crate::game_state::chess_piece::Piece;
use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_PLACEMENT};
use crate::game_state::chess_types::{ChessPosition, Color, PieceKind, Position};
use crate::game_state::undo_state::{MatchUndoState, UndoState};
use crate::match_state::check_inspection::{attackers_to_square, is_in_check, king_position};
use crate::match_state::move_apply::{make_move, undo_move};
use crate::utils::placement_generator::generate_placement;
use crate::utils::placement_parser::parse_placement;

#[derive(Debug, Clone)]
pub struct ChessMatch {
    board: Board,
    turn: u32,
    current_player: Color,
    check: bool,
    check_mate: bool,
    captured_pieces: Vec<Piece>,
    history: Vec<MatchUndoState>,
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessMatch {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let board = parse_placement(STARTING_PLACEMENT)
            .expect("starting placement should always parse");
        Self::with_board(board, Color::White)
    }

    /// Custom setup from a piece-placement string.
    ///
    /// Each color needs exactly one king, and the side not to move must not
    /// already be in check. The check and checkmate flags are computed for
    /// `current_player`.
    pub fn from_placement(placement: &str, current_player: Color) -> Result<Self, ChessErrors> {
        let board = parse_placement(placement)?;

        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            match kings {
                0 => return Err(ChessErrors::MissingKing(color)),
                1 => {}
                n => {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "{color} has {n} kings"
                    )))
                }
            }
        }

        let waiting = current_player.opposite();
        if is_in_check(&board, waiting)? {
            return Err(ChessErrors::InvalidPlacement(format!(
                "{waiting} is in check but {current_player} is to move"
            )));
        }

        let mut chess_match = Self::with_board(board, current_player);
        chess_match.check = is_in_check(&chess_match.board, current_player)?;
        chess_match.check_mate = chess_match.check && chess_match.test_check_mate(current_player)?;
        Ok(chess_match)
    }

    fn with_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            turn: 1,
            current_player,
            check: false,
            check_mate: false,
            captured_pieces: Vec::new(),
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn check(&self) -> bool {
        self.check
    }

    #[inline]
    pub fn check_mate(&self) -> bool {
        self.check_mate
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Captured pieces, oldest capture first.
    #[inline]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured_pieces
    }

    pub fn pieces_on_board(&self) -> Vec<Piece> {
        self.board.pieces().map(|(_, piece)| *piece).collect()
    }

    /// Read-only snapshot of the grid, row 0 being rank 8.
    pub fn pieces(&self) -> [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        self.board.grid()
    }

    pub fn placement(&self) -> String {
        generate_placement(&self.board)
    }

    /// Movement mask of the piece on `source_position`.
    ///
    /// Fails when the square is empty or the piece cannot move at all. Whose
    /// turn it is does not matter here.
    pub fn possible_moves(&self, source_position: ChessPosition) -> Result<BoardMask, ChessErrors> {
        let piece = self.validate_source_position(source_position, false)?;
        Ok(piece.possible_moves(&self.board, source_position.to_position()))
    }

    /// Movement mask of the piece on `source_position` without the
    /// destinations that would leave its own king attacked. May be empty.
    pub fn legal_moves(&mut self, source_position: ChessPosition) -> Result<BoardMask, ChessErrors> {
        let source = source_position.to_position();
        let piece = *self
            .board
            .piece(source)
            .ok_or(ChessErrors::NoPieceAtSource(source_position))?;

        let mut legal = BoardMask::EMPTY;
        for target in piece.possible_moves(&self.board, source) {
            if !self.leaves_king_in_check(source, target, piece.color())? {
                legal.insert(target);
            }
        }
        Ok(legal)
    }

    /// Every legal `(source, target)` pair for the side to move.
    pub fn all_legal_moves(&mut self) -> Result<Vec<(ChessPosition, ChessPosition)>, ChessErrors> {
        let sources: Vec<Position> = self
            .board
            .pieces_of(self.current_player)
            .map(|(position, _)| position)
            .collect();

        let mut moves = Vec::new();
        for source in sources {
            let source_position = ChessPosition::from_position(source);
            for target in self.legal_moves(source_position)? {
                moves.push((source_position, ChessPosition::from_position(target)));
            }
        }
        Ok(moves)
    }

    /// Moves the current player's piece from `source_position` to
    /// `target_position` and returns the captured piece, if any.
    ///
    /// On success the turn passes to the opponent unless the move mates, in
    /// which case the match ends with the turn unchanged.
    pub fn perform_move(
        &mut self,
        source_position: ChessPosition,
        target_position: ChessPosition,
    ) -> Result<Option<Piece>, ChessErrors> {
        if self.check_mate {
            return Err(ChessErrors::MatchIsOver);
        }

        let source = source_position.to_position();
        let target = target_position.to_position();
        self.validate_source_position(source_position, true)?;
        self.validate_target_position(source_position, target_position)?;

        let mover = self.current_player;
        let undo = self.execute_move(source, target)?;

        match is_in_check(&self.board, mover) {
            Ok(false) => {}
            Ok(true) => {
                self.rollback_move(&undo)?;
                trace!("rejected {source_position}-{target_position}: {mover} king would be attacked");
                return Err(ChessErrors::SelfCheckForbidden);
            }
            Err(err) => {
                self.rollback_move(&undo)?;
                return Err(err);
            }
        }

        self.history.push(MatchUndoState {
            undo,
            prev_turn: self.turn,
            prev_current_player: mover,
            prev_check: self.check,
            prev_check_mate: self.check_mate,
        });

        let opponent = mover.opposite();
        self.check = is_in_check(&self.board, opponent)?;
        self.check_mate = self.check && self.test_check_mate(opponent)?;

        debug!(
            "turn {} {mover}: {source_position}-{target_position}{}",
            self.turn,
            match (self.check_mate, self.check) {
                (true, _) => "#",
                (false, true) => "+",
                _ => "",
            }
        );

        if self.check {
            self.log_checkers(opponent)?;
        }

        if self.check_mate {
            debug!("checkmate: {mover} wins on turn {}", self.turn);
        } else {
            self.next_turn();
        }

        Ok(undo.captured_piece)
    }

    /// Takes back the last committed move, restoring board, counters, captured
    /// pieces and flags exactly.
    pub fn undo_last_move(&mut self) -> Result<(), ChessErrors> {
        let record = self.history.pop().ok_or(ChessErrors::NothingToUndo)?;
        self.rollback_move(&record.undo)?;
        self.turn = record.prev_turn;
        self.current_player = record.prev_current_player;
        self.check = record.prev_check;
        self.check_mate = record.prev_check_mate;
        debug!(
            "took back {}-{}",
            ChessPosition::from_position(record.undo.source),
            ChessPosition::from_position(record.undo.target)
        );
        Ok(())
    }

    /// Number of committed moves that can be taken back.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True when `color` is in check and no move of any of its pieces removes
    /// the check.
    pub fn test_check_mate(&mut self, color: Color) -> Result<bool, ChessErrors> {
        if !is_in_check(&self.board, color)? {
            return Ok(false);
        }

        let candidates: Vec<(Position, BoardMask)> = self
            .board
            .pieces_of(color)
            .map(|(position, piece)| (position, piece.possible_moves(&self.board, position)))
            .collect();

        for (source, mask) in candidates {
            for target in mask {
                if !self.leaves_king_in_check(source, target, color)? {
                    trace!(
                        "{color} escapes check with {}-{}",
                        ChessPosition::from_position(source),
                        ChessPosition::from_position(target)
                    );
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    fn validate_source_position(
        &self,
        source_position: ChessPosition,
        check_owner: bool,
    ) -> Result<Piece, ChessErrors> {
        let source = source_position.to_position();
        let piece = *self
            .board
            .piece(source)
            .ok_or(ChessErrors::NoPieceAtSource(source_position))?;

        if check_owner && piece.color() != self.current_player {
            return Err(ChessErrors::NotYourPiece {
                position: source_position,
                color: piece.color(),
            });
        }

        if !piece.is_there_any_possible_move(&self.board, source) {
            return Err(ChessErrors::NoLegalMoves(source_position));
        }

        Ok(piece)
    }

    fn validate_target_position(
        &self,
        source_position: ChessPosition,
        target_position: ChessPosition,
    ) -> Result<(), ChessErrors> {
        let source = source_position.to_position();
        let piece = self
            .board
            .piece(source)
            .ok_or(ChessErrors::NoPieceAtSource(source_position))?;

        if !piece.possible_move(&self.board, source, target_position.to_position()) {
            return Err(ChessErrors::IllegalTarget {
                from: source_position,
                to: target_position,
            });
        }
        Ok(())
    }

    /// Executes a move and records any capture.
    fn execute_move(&mut self, source: Position, target: Position) -> Result<UndoState, ChessErrors> {
        let undo = make_move(&mut self.board, source, target)?;
        if let Some(captured) = undo.captured_piece {
            self.captured_pieces.push(captured);
        }
        Ok(undo)
    }

    fn rollback_move(&mut self, undo: &UndoState) -> Result<(), ChessErrors> {
        undo_move(&mut self.board, undo)?;
        if let Some(captured) = undo.captured_piece {
            if let Some(index) = self
                .captured_pieces
                .iter()
                .rposition(|piece| piece.id() == captured.id())
            {
                self.captured_pieces.remove(index);
            }
        }
        Ok(())
    }

    /// Speculatively plays `source`-`target` and reports whether `color`'s king
    /// is attacked afterwards. The board is restored before returning.
    fn leaves_king_in_check(
        &mut self,
        source: Position,
        target: Position,
        color: Color,
    ) -> Result<bool, ChessErrors> {
        let undo = self.execute_move(source, target)?;
        let in_check = is_in_check(&self.board, color);
        self.rollback_move(&undo)?;
        in_check
    }

    fn log_checkers(&self, color: Color) -> Result<(), ChessErrors> {
        if !log::log_enabled!(log::Level::Trace) {
            return Ok(());
        }
        let king = king_position(&self.board, color)?;
        for (position, piece) in attackers_to_square(&self.board, king, color.opposite()) {
            trace!(
                "{color} king on {} attacked by {piece} on {}",
                ChessPosition::from_position(king),
                ChessPosition::from_position(position)
            );
        }
        Ok(())
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opposite();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STANDARD_PIECE_COUNT;

    fn at(square: &str) -> ChessPosition {
        square.parse().expect("test square should parse")
    }

    fn play(chess_match: &mut ChessMatch, moves: &[(&str, &str)]) -> Result<(), ChessErrors> {
        for (source, target) in moves {
            chess_match.perform_move(at(source), at(target))?;
        }
        Ok(())
    }

    fn move_counts(chess_match: &ChessMatch) -> Vec<(u8, u32)> {
        chess_match
            .pieces_on_board()
            .iter()
            .map(|piece| (piece.id(), piece.move_count()))
            .collect()
    }

    #[test]
    fn new_match_starts_with_white_on_turn_one() {
        let chess_match = ChessMatch::new();
        assert_eq!(chess_match.turn(), 1);
        assert_eq!(chess_match.current_player(), Color::White);
        assert!(!chess_match.check());
        assert!(!chess_match.check_mate());
        assert_eq!(chess_match.pieces_on_board().len(), STANDARD_PIECE_COUNT);
        assert!(chess_match.captured_pieces().is_empty());
        assert_eq!(chess_match.placement(), STARTING_PLACEMENT);

        let grid = chess_match.pieces();
        assert_eq!(grid[0][4].map(|p| (p.kind(), p.color())), Some((PieceKind::King, Color::Black)));
        assert_eq!(grid[7][3].map(|p| (p.kind(), p.color())), Some((PieceKind::Queen, Color::White)));
        assert!(grid[4][4].is_none());
    }

    #[test]
    fn pawn_double_step_passes_the_turn() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::new();
        let captured = chess_match.perform_move(at("E2"), at("E4"))?;

        assert_eq!(captured, None);
        assert_eq!(chess_match.turn(), 2);
        assert_eq!(chess_match.current_player(), Color::Black);
        assert!(!chess_match.check());
        assert_eq!(chess_match.placement(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
        Ok(())
    }

    #[test]
    fn blocked_rook_has_no_moves() {
        let mut chess_match = ChessMatch::new();
        let a1 = at("A1").to_position();
        let rook = *chess_match.board().piece(a1).expect("rook on A1");
        let mask = rook.possible_moves(chess_match.board(), a1);
        assert!(mask.is_empty());
        assert_eq!(mask.to_grid(), [[false; 8]; 8]);

        assert_eq!(
            chess_match.possible_moves(at("A1")),
            Err(ChessErrors::NoLegalMoves(at("A1")))
        );
        assert_eq!(
            chess_match.perform_move(at("A1"), at("A3")),
            Err(ChessErrors::NoLegalMoves(at("A1")))
        );
    }

    #[test]
    fn possible_moves_is_a_pure_query() -> Result<(), ChessErrors> {
        let chess_match = ChessMatch::new();
        let first = chess_match.possible_moves(at("B1"))?;
        let second = chess_match.possible_moves(at("B1"))?;
        assert_eq!(first, second);
        assert_eq!(first.count(), 2);
        assert!(first.contains(at("A3").to_position()));
        assert!(first.contains(at("C3").to_position()));

        // Opponent pieces can be queried too.
        assert_eq!(chess_match.possible_moves(at("G8"))?.count(), 2);
        Ok(())
    }

    #[test]
    fn source_and_target_validation() {
        let mut chess_match = ChessMatch::new();
        assert_eq!(
            chess_match.perform_move(at("E4"), at("E5")),
            Err(ChessErrors::NoPieceAtSource(at("E4")))
        );
        assert_eq!(
            chess_match.possible_moves(at("E4")),
            Err(ChessErrors::NoPieceAtSource(at("E4")))
        );
        assert_eq!(
            chess_match.perform_move(at("E7"), at("E5")),
            Err(ChessErrors::NotYourPiece {
                position: at("E7"),
                color: Color::Black
            })
        );
        assert_eq!(
            chess_match.perform_move(at("E2"), at("E5")),
            Err(ChessErrors::IllegalTarget {
                from: at("E2"),
                to: at("E5")
            })
        );
        assert_eq!(chess_match.turn(), 1);
        assert_eq!(chess_match.placement(), STARTING_PLACEMENT);
    }

    #[test]
    fn players_alternate_once_per_move() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::new();
        let moves = [("E2", "E4"), ("E7", "E5"), ("G1", "F3"), ("B8", "C6"), ("F1", "C4")];
        for (index, (source, target)) in moves.iter().enumerate() {
            let mover = chess_match.current_player();
            chess_match.perform_move(at(source), at(target))?;
            assert_eq!(chess_match.turn(), index as u32 + 2);
            assert_eq!(chess_match.current_player(), mover.opposite());
        }
        Ok(())
    }

    #[test]
    fn capture_moves_piece_to_captured_set() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::new();
        play(&mut chess_match, &[("E2", "E4"), ("D7", "D5")])?;

        let captured = chess_match
            .perform_move(at("E4"), at("D5"))?
            .expect("black pawn should be captured");
        assert_eq!(captured.kind(), PieceKind::Pawn);
        assert_eq!(captured.color(), Color::Black);
        assert_eq!(chess_match.captured_pieces(), &[captured]);
        assert_eq!(chess_match.pieces_on_board().len(), STANDARD_PIECE_COUNT - 1);

        let moved = chess_match
            .board()
            .piece(at("D5").to_position())
            .expect("white pawn on D5");
        assert_eq!(moved.move_count(), 2);
        Ok(())
    }

    #[test]
    fn back_rank_mate_ends_the_match() -> Result<(), ChessErrors> {
        let mut chess_match =
            ChessMatch::from_placement("3rkr2/3p1p2/3P4/8/7Q/8/8/K7", Color::White)?;
        assert!(!chess_match.check());

        let captured = chess_match.perform_move(at("H4"), at("E7"))?;
        assert_eq!(captured, None);
        assert!(chess_match.check());
        assert!(chess_match.check_mate());
        assert_eq!(chess_match.turn(), 1);
        assert_eq!(chess_match.current_player(), Color::White);

        assert_eq!(
            chess_match.perform_move(at("A1"), at("A2")),
            Err(ChessErrors::MatchIsOver)
        );
        Ok(())
    }

    #[test]
    fn fools_mate_from_the_opening() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::new();
        play(
            &mut chess_match,
            &[("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")],
        )?;
        assert!(chess_match.check_mate());
        assert_eq!(chess_match.turn(), 4);
        assert_eq!(chess_match.current_player(), Color::Black);
        Ok(())
    }

    #[test]
    fn only_the_blocking_move_resolves_check() -> Result<(), ChessErrors> {
        let placement = "7k/8/8/8/2R5/8/PP6/K6r";
        let mut chess_match = ChessMatch::from_placement(placement, Color::White)?;
        assert!(chess_match.check());
        assert!(!chess_match.check_mate());

        let before_counts = move_counts(&chess_match);
        let sources: Vec<Position> = chess_match
            .board()
            .pieces_of(Color::White)
            .map(|(position, _)| position)
            .collect();
        let mut rejected = 0;
        for source in sources {
            let source_position = ChessPosition::from_position(source);
            for target in chess_match.possible_moves(source_position)? {
                let target_position = ChessPosition::from_position(target);
                if source_position == at("C4") && target_position == at("C1") {
                    continue;
                }
                assert_eq!(
                    chess_match.perform_move(source_position, target_position),
                    Err(ChessErrors::SelfCheckForbidden),
                    "{source_position}-{target_position} should not resolve the check"
                );
                assert_eq!(chess_match.placement(), placement);
                assert_eq!(move_counts(&chess_match), before_counts);
                assert!(chess_match.captured_pieces().is_empty());
                rejected += 1;
            }
        }
        assert!(rejected >= 4);

        chess_match.perform_move(at("C4"), at("C1"))?;
        assert!(!chess_match.check());
        assert_eq!(chess_match.turn(), 2);
        assert_eq!(chess_match.current_player(), Color::Black);
        Ok(())
    }

    #[test]
    fn capturing_the_checker_resolves_check() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::from_placement("6k1/8/8/8/8/8/PP5R/K6r", Color::White)?;
        assert!(chess_match.check());
        assert_eq!(chess_match.all_legal_moves()?, vec![(at("H2"), at("H1"))]);

        assert_eq!(
            chess_match.perform_move(at("H2"), at("G2")),
            Err(ChessErrors::SelfCheckForbidden)
        );
        assert!(chess_match.captured_pieces().is_empty());

        let captured = chess_match
            .perform_move(at("H2"), at("H1"))?
            .expect("black rook should be captured");
        assert_eq!(captured.kind(), PieceKind::Rook);
        assert_eq!(captured.color(), Color::Black);
        assert!(!chess_match.check());
        assert_eq!(chess_match.captured_pieces(), &[captured]);
        assert_eq!(chess_match.current_player(), Color::Black);
        Ok(())
    }

    #[test]
    fn placed_pawn_off_home_row_has_no_double_step() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::from_placement("4k3/8/8/8/4P3/8/8/4K3", Color::White)?;
        assert_eq!(
            chess_match.possible_moves(at("E4"))?,
            BoardMask::from_position(at("E5").to_position())
        );
        assert_eq!(
            chess_match.perform_move(at("E4"), at("E6")),
            Err(ChessErrors::IllegalTarget {
                from: at("E4"),
                to: at("E6")
            })
        );
        chess_match.perform_move(at("E4"), at("E5"))?;
        Ok(())
    }

    #[test]
    fn self_check_rejection_restores_captures() -> Result<(), ChessErrors> {
        // The white rook on E2 is pinned; taking the bishop on B2 would expose
        // the king.
        let placement = "4r1k1/8/8/8/8/8/1b2R3/4K3";
        let mut chess_match = ChessMatch::from_placement(placement, Color::White)?;
        let before_counts = move_counts(&chess_match);

        assert_eq!(
            chess_match.perform_move(at("E2"), at("B2")),
            Err(ChessErrors::SelfCheckForbidden)
        );
        assert_eq!(chess_match.placement(), placement);
        assert_eq!(move_counts(&chess_match), before_counts);
        assert!(chess_match.captured_pieces().is_empty());
        assert_eq!(chess_match.turn(), 1);
        assert_eq!(chess_match.history_len(), 0);
        Ok(())
    }

    #[test]
    fn legal_moves_drop_self_check_destinations() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::from_placement("4r1k1/8/8/8/8/8/4R3/4K3", Color::White)?;
        assert_eq!(chess_match.possible_moves(at("E2"))?.count(), 13);

        let legal = chess_match.legal_moves(at("E2"))?;
        assert_eq!(legal.count(), 6);
        assert!(legal.contains(at("E8").to_position()));
        assert!(!legal.contains(at("D2").to_position()));
        assert_eq!(chess_match.placement(), "4r1k1/8/8/8/8/8/4R3/4K3");
        Ok(())
    }

    #[test]
    fn all_legal_moves_from_the_start() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::new();
        assert_eq!(chess_match.all_legal_moves()?.len(), 20);
        Ok(())
    }

    #[test]
    fn undo_restores_the_previous_state() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::new();
        play(&mut chess_match, &[("E2", "E4"), ("D7", "D5")])?;
        let placement = chess_match.placement();
        let counts = move_counts(&chess_match);

        chess_match.perform_move(at("E4"), at("D5"))?;
        chess_match.undo_last_move()?;

        assert_eq!(chess_match.placement(), placement);
        assert_eq!(move_counts(&chess_match), counts);
        assert!(chess_match.captured_pieces().is_empty());
        assert_eq!(chess_match.turn(), 3);
        assert_eq!(chess_match.current_player(), Color::White);

        chess_match.undo_last_move()?;
        chess_match.undo_last_move()?;
        assert_eq!(chess_match.placement(), STARTING_PLACEMENT);
        assert_eq!(chess_match.undo_last_move(), Err(ChessErrors::NothingToUndo));
        Ok(())
    }

    #[test]
    fn undo_reopens_a_finished_match() -> Result<(), ChessErrors> {
        let mut chess_match = ChessMatch::new();
        play(
            &mut chess_match,
            &[("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")],
        )?;
        chess_match.undo_last_move()?;
        assert!(!chess_match.check_mate());
        assert!(!chess_match.check());
        assert_eq!(chess_match.current_player(), Color::Black);
        assert_eq!(chess_match.turn(), 4);
        chess_match.perform_move(at("D8"), at("E7"))?;
        assert_eq!(chess_match.turn(), 5);
        Ok(())
    }

    #[test]
    fn from_placement_validates_kings_and_turn() {
        assert_eq!(
            ChessMatch::from_placement("8/8/8/8/8/8/8/K7", Color::White).err(),
            Some(ChessErrors::MissingKing(Color::Black))
        );
        assert!(matches!(
            ChessMatch::from_placement("k7/8/8/8/8/8/8/K6K", Color::White),
            Err(ChessErrors::InvalidPlacement(_))
        ));
        // Black is in check with White to move.
        assert!(matches!(
            ChessMatch::from_placement("k7/8/8/8/8/8/R7/1K6", Color::White),
            Err(ChessErrors::InvalidPlacement(_))
        ));
    }

    #[test]
    fn from_placement_detects_an_existing_mate() -> Result<(), ChessErrors> {
        let chess_match = ChessMatch::from_placement("k7/8/8/8/8/8/8/KR5R", Color::Black)?;
        assert!(!chess_match.check());
        assert!(!chess_match.check_mate());

        let chess_match = ChessMatch::from_placement("k6R/8/1K6/8/8/8/8/8", Color::Black)?;
        assert!(chess_match.check());
        assert!(chess_match.check_mate());
        Ok(())
    }
}
