use bricks::board::{Board, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Makes up to `max_moves` uniformly random legal moves starting from `board`.
/// Returns the moves together with the (normalized) boards they produce.
/// Stops earlier when the board gets solved or no move is legal.
pub fn walk(board: &Board, max_moves: usize, rng: &mut impl Rng) -> Vec<(Move, Board)> {
    let mut result = Vec::with_capacity(max_moves);
    let mut current = board.clone();
    for _ in 0..max_moves {
        if current.is_solved() { break; }
        let Some(&m) = current.legal_moves().choose(rng) else { break };
        current = current.apply_move(m).normalize();
        result.push((m, current.clone()));
    }
    result
}

/// Prints `board`, then each move of a random walk followed by the board it produces.
pub fn random_walk(board: &Board, max_moves: usize, rng: &mut impl Rng) {
    print!("{}", board);
    let steps = walk(board, max_moves, rng);
    for (m, b) in &steps {
        println!("{}", m);
        print!("{}", b);
    }
    if steps.len() < max_moves {
        if steps.last().map_or(board, |(_, b)| b).is_solved() {
            println!("solved after {} moves", steps.len());
        } else {
            println!("no legal moves after {} moves", steps.len());
        }
    }
}
