use std::rc::Rc;
use crate::board::{Board, Move};

/// Node of the search tree: a board together with the move that produced it from the parent's board.
///
/// Nodes are never modified after creation. Each child shares its parent through `Rc`,
/// so the ancestry of every node forms a path to the root.
pub struct SearchNode {
    board: Board,
    parent: Option<Rc<SearchNode>>,
    last_move: Option<Move>,
    depth: usize
}

impl SearchNode {
    /// Constructs the root of a search tree.
    pub fn root(board: Board) -> Self {
        Self { board, parent: None, last_move: None, depth: 0 }
    }

    #[inline(always)] pub fn board(&self) -> &Board { &self.board }

    /// Returns the parent node or `None` for the root.
    #[inline(always)] pub fn parent(&self) -> Option<&SearchNode> { self.parent.as_deref() }

    /// Returns the move that transforms the parent's board into this node's board (before normalization).
    #[inline(always)] pub fn last_move(&self) -> Option<Move> { self.last_move }

    /// Returns the number of moves from the root.
    #[inline(always)] pub fn depth(&self) -> usize { self.depth }

    /// Returns the children of this node, one for each legal move, in the order of `Board::legal_moves`.
    /// Boards of the children are normalized.
    pub fn children(self: &Rc<Self>) -> Vec<SearchNode> {
        self.board.legal_moves().into_iter().map(|m| SearchNode {
            board: self.board.apply_move(m).normalize(),
            parent: Some(Rc::clone(self)),
            last_move: Some(m),
            depth: self.depth + 1
        }).collect()
    }

    /// Returns iterator over this node and all its ancestors, ending at the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Returns the moves that lead from the root's board to this node's board, in order of execution.
    pub fn path(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.ancestors().filter_map(|n| n.last_move).collect();
        moves.reverse();
        moves
    }
}

impl Drop for SearchNode {
    // Releases the chain of exclusively owned ancestors iteratively, as long depth-first paths could exhaust the stack otherwise.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None
            };
        }
    }
}

/// Iterator over a node and its ancestors.
#[derive(Copy, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a SearchNode>
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next?;
        self.next = result.parent();
        Some(result)
    }
}

impl std::iter::FusedIterator for Ancestors<'_> {}
