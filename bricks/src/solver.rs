use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use log::{debug, info};
use crate::board::{Board, Move};
use crate::error::UnknownStrategy;
use crate::node::SearchNode;
use crate::stats::SearchStatsCollector;

/// Search strategy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    /// Breadth-first search, finds a shortest solution.
    BreadthFirst,
    /// Depth-first search, finds any solution.
    DepthFirst,
    /// Iterative deepening, finds a shortest solution using depth-limited passes.
    IterativeDeepening,
}

impl Strategy {
    /// All strategies, in the order the runner executes them by default.
    pub const ALL: [Strategy; 3] = [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::IterativeDeepening];

    pub fn short_name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::IterativeDeepening => "ids",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Strategy::ALL.into_iter()
            .find(|strategy| strategy.short_name() == name)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

/// Order in which nodes leave the frontier.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Discipline { Fifo, Lifo }

/// How a child whose board is already in the visited map is treated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum VisitedPolicy {
    /// The child is dropped.
    InsertOnce,
    /// The child is admitted (and its depth recorded) if it is strictly shallower than the recorded one.
    ReplaceIfShallower
}

/// Parameters of a single search pass.
#[derive(Clone, Copy, Debug)]
struct Pass {
    discipline: Discipline,
    /// Children are generated only for nodes with depth below the limit.
    depth_limit: Option<usize>,
    policy: VisitedPolicy
}

impl Pass {
    const BFS: Pass = Pass { discipline: Discipline::Fifo, depth_limit: None, policy: VisitedPolicy::InsertOnce };
    const DFS: Pass = Pass { discipline: Discipline::Lifo, depth_limit: None, policy: VisitedPolicy::InsertOnce };

    fn depth_limited(depth_limit: usize) -> Self {
        Pass { discipline: Discipline::Lifo, depth_limit: Some(depth_limit), policy: VisitedPolicy::ReplaceIfShallower }
    }

    #[inline(always)] fn expands(&self, depth: usize) -> bool {
        self.depth_limit.map_or(true, |limit| depth < limit)
    }
}

struct Frontier {
    nodes: VecDeque<Rc<SearchNode>>,
    discipline: Discipline
}

impl Frontier {
    fn new(root: SearchNode, discipline: Discipline) -> Self {
        Self { nodes: VecDeque::from([Rc::new(root)]), discipline }
    }

    #[inline(always)] fn push(&mut self, node: SearchNode) { self.nodes.push_back(Rc::new(node)); }

    #[inline(always)] fn pop(&mut self) -> Option<Rc<SearchNode>> {
        match self.discipline {
            Discipline::Fifo => self.nodes.pop_front(),
            Discipline::Lifo => self.nodes.pop_back(),
        }
    }
}

/// Canonical boards seen during one pass, with the minimal depth each was reached at.
struct Visited {
    depths: HashMap<Board, usize>,
    policy: VisitedPolicy
}

impl Visited {
    fn new(root: &Board, policy: VisitedPolicy) -> Self {
        Self { depths: HashMap::from([(root.normalize(), 0)]), policy }
    }

    /// Records `board` (which must be canonical) reached at `depth` and returns whether it should be enqueued.
    fn admit(&mut self, board: &Board, depth: usize) -> bool {
        debug_assert!(board.is_normalized());
        if let Some(recorded) = self.depths.get_mut(board) {
            return match self.policy {
                VisitedPolicy::InsertOnce => false,
                VisitedPolicy::ReplaceIfShallower if depth < *recorded => { *recorded = depth; true }
                VisitedPolicy::ReplaceIfShallower => false,
            };
        }
        self.depths.insert(board.clone(), depth);
        true
    }

    #[inline(always)] fn len(&self) -> usize { self.depths.len() }
}

/// Solved board reached by the search, together with the way to it.
pub struct Solution {
    node: Rc<SearchNode>,
    visited: usize
}

impl Solution {
    /// Returns the number of distinct canonical boards recorded by the successful run.
    #[inline(always)] pub fn visited(&self) -> usize { self.visited }

    /// Returns the number of moves of the solution.
    #[inline(always)] pub fn len(&self) -> usize { self.node.depth() }

    /// Returns `true` if the initial board is already solved.
    #[inline(always)] pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the moves that lead from the initial board to the solved one, in order of execution.
    pub fn moves(&self) -> Vec<Move> { self.node.path() }

    /// Returns the solved board. It is canonical, unless no move was needed:
    /// then it is the initial board exactly as given.
    #[inline(always)] pub fn board(&self) -> &Board { self.node.board() }

    #[inline(always)] pub fn node(&self) -> &SearchNode { &self.node }
}

/// Result of a search run.
pub enum SearchOutcome {
    Solved(Solution),
    /// The frontier became empty without reaching a solved board.
    Exhausted { visited: usize },
    /// The statistics collector stopped the search.
    Cancelled { visited: usize },
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self { SearchOutcome::Solved(s) => Some(s), _ => None }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self { SearchOutcome::Solved(s) => Some(s), _ => None }
    }

    /// Returns the number of distinct canonical boards recorded by the (last) run.
    pub fn visited(&self) -> usize {
        match self {
            SearchOutcome::Solved(s) => s.visited(),
            SearchOutcome::Exhausted { visited } | SearchOutcome::Cancelled { visited } => *visited,
        }
    }

    #[inline(always)] pub fn is_solved(&self) -> bool { matches!(self, SearchOutcome::Solved(_)) }
}

/// Solves sliding bricks puzzle starting from the given board.
///
/// Each search builds its own root node and visited map, so many searches can be run by the same solver.
pub struct BrickSolver {
    initial: Board
}

impl BrickSolver {
    pub fn new(initial: Board) -> Self { Self { initial } }

    #[inline(always)] pub fn initial(&self) -> &Board { &self.initial }

    /// Searches for a solution with given `strategy`, reporting progress to `stats`.
    pub fn solve_stats(&self, strategy: Strategy, stats: &mut impl SearchStatsCollector) -> SearchOutcome {
        match strategy {
            Strategy::BreadthFirst => self.run(Pass::BFS, stats),
            Strategy::DepthFirst => self.run(Pass::DFS, stats),
            Strategy::IterativeDeepening => self.ids_stats(stats),
        }
    }

    #[inline] pub fn solve(&self, strategy: Strategy) -> SearchOutcome { self.solve_stats(strategy, &mut ()) }

    #[inline] pub fn bfs(&self) -> SearchOutcome { self.solve(Strategy::BreadthFirst) }

    #[inline] pub fn dfs(&self) -> SearchOutcome { self.solve(Strategy::DepthFirst) }

    /// Iterative deepening: depth-limited passes with limits 0, 1, 2, ...
    ///
    /// Never returns `Exhausted`, on unsolvable boards it runs until `stats` cancels it.
    pub fn ids_stats(&self, stats: &mut impl SearchStatsCollector) -> SearchOutcome {
        let mut depth_limit = 0;
        loop {
            stats.iteration(depth_limit);
            debug!("iterative deepening with depth limit {}", depth_limit);
            match self.depth_limited_stats(depth_limit, stats) {
                SearchOutcome::Exhausted { .. } => depth_limit += 1,
                outcome => return outcome
            }
        }
    }

    #[inline] pub fn ids(&self) -> SearchOutcome { self.ids_stats(&mut ()) }

    /// Single depth-first pass that does not expand nodes at depth `depth_limit` or deeper.
    /// Finds a solution iff one with at most `depth_limit` moves exists.
    pub fn depth_limited_stats(&self, depth_limit: usize, stats: &mut impl SearchStatsCollector) -> SearchOutcome {
        self.run(Pass::depth_limited(depth_limit), stats)
    }

    #[inline] pub fn depth_limited(&self, depth_limit: usize) -> SearchOutcome {
        self.depth_limited_stats(depth_limit, &mut ())
    }

    fn run(&self, pass: Pass, stats: &mut impl SearchStatsCollector) -> SearchOutcome {
        let mut visited = Visited::new(&self.initial, pass.policy);
        let mut frontier = Frontier::new(SearchNode::root(self.initial.clone()), pass.discipline);
        while let Some(node) = frontier.pop() {
            if !stats.visit() {
                debug!("search cancelled after recording {} boards", visited.len());
                return SearchOutcome::Cancelled { visited: visited.len() };
            }
            if node.board().is_solved() {
                info!("found solution of length {}, {} boards recorded", node.depth(), visited.len());
                return SearchOutcome::Solved(Solution { node, visited: visited.len() });
            }
            if !pass.expands(node.depth()) { continue; }
            stats.expand();
            for child in node.children() {
                if visited.admit(child.board(), child.depth()) { frontier.push(child); }
            }
        }
        debug!("search space exhausted, {} boards recorded", visited.len());
        SearchOutcome::Exhausted { visited: visited.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Direction::*, GOAL_BRICK};
    use crate::stats::{Limited, SearchAllStats};

    fn board(rows: &[&[Cell]]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn level0() -> Board {
        board(&[
            &[1, -1, -1, 1, 1],
            &[1,  0,  3, 4, 1],
            &[1,  0,  2, 2, 1],
            &[1,  1,  1, 1, 1]])
    }

    fn stuck() -> Board {
        board(&[
            &[1, 1, 1,  1, 1],
            &[1, 2, 1, -1, 1],
            &[1, 1, 1,  1, 1]])
    }

    fn three_obstacles() -> Board {
        board(&[
            &[1,  1, 1, 1, 1, 1],
            &[1,  5, 5, 0, 3, 1],
            &[1,  0, 2, 2, 3, 1],
            &[1,  4, 0, 0, 0, 1],
            &[1,  1, -1, -1, 1, 1]])
    }

    fn check_replay(initial: &Board, solution: &Solution) {
        let mut b = initial.clone();
        for m in solution.moves() {
            assert!(b.legal_moves().contains(&m), "move {} is illegal on\n{}", m, b);
            b = b.apply_move(m).normalize();
        }
        assert_eq!(&b, solution.board());
        assert!(b.is_solved());
        assert_eq!(solution.moves().len(), solution.len());
    }

    #[test]
    fn test_strategy_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("BFS".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("astar".parse::<Strategy>(), Err(UnknownStrategy("astar".to_owned())));
    }

    #[test]
    fn test_bfs_level0() {
        let solution = BrickSolver::new(level0()).bfs().into_solution().unwrap();
        assert_eq!(solution.moves(), [
            Move::new(GOAL_BRICK, Left), Move::new(4, Down), Move::new(3, Right),
            Move::new(GOAL_BRICK, Up), Move::new(GOAL_BRICK, Up)]);
        assert_eq!(solution.len(), 5);
        assert!(solution.visited() > 5);
        check_replay(&level0(), &solution);
    }

    #[test]
    fn test_all_strategies_level0() {
        let solver = BrickSolver::new(level0());
        let bfs = solver.bfs().into_solution().unwrap();
        for strategy in Strategy::ALL {
            let solution = solver.solve(strategy).into_solution().unwrap();
            check_replay(&level0(), &solution);
            assert!(bfs.len() <= solution.len(), "{} found shorter solution than bfs", strategy);
        }
        assert_eq!(solver.ids().solution().map(Solution::len), Some(bfs.len()));
    }

    #[test]
    fn test_ids_is_minimal() {
        let solver = BrickSolver::new(level0());
        for d in 0..5 {
            assert!(matches!(solver.depth_limited(d), SearchOutcome::Exhausted { .. }), "solved with depth limit {}", d);
        }
        assert_eq!(solver.depth_limited(5).solution().map(Solution::len), Some(5));
        let deeper = solver.depth_limited(9).into_solution().unwrap();
        assert!((5..=9).contains(&deeper.len()));
        check_replay(&level0(), &deeper);
        let mut stats = SearchAllStats::default();
        assert_eq!(solver.ids_stats(&mut stats).solution().map(Solution::len), Some(5));
        assert_eq!(stats.iterations, 6);
        assert!(stats.visits >= stats.expansions);
    }

    #[test]
    fn test_replay_from_unnormalized_board() {
        let initial = board(&[
            &[1, -1, -1, 1, 1],
            &[1,  0,  9, 6, 1],
            &[1,  0,  2, 2, 1],
            &[1,  1,  1, 1, 1]]);
        let solver = BrickSolver::new(initial.clone());
        for strategy in Strategy::ALL {
            check_replay(&initial, &solver.solve(strategy).into_solution().unwrap());
        }
        assert_eq!(solver.bfs().solution().map(Solution::len), Some(5));
    }

    #[test]
    fn test_bigger_board() {
        let solver = BrickSolver::new(three_obstacles());
        let bfs = solver.bfs().into_solution().unwrap();
        check_replay(&three_obstacles(), &bfs);
        let dfs = solver.dfs().into_solution().unwrap();
        check_replay(&three_obstacles(), &dfs);
        assert!(bfs.len() <= dfs.len());
        let ids = solver.ids().into_solution().unwrap();
        check_replay(&three_obstacles(), &ids);
        assert_eq!(ids.len(), bfs.len());
    }

    #[test]
    fn test_dfs_follows_move_order() {
        let initial = board(&[
            &[1, 1, 1, 1, 1, 1],
            &[1, 0, 3, 4, 0, 1],
            &[1, 0, 3, 4, 0, 1],
            &[1, 2, 2, 0, 0, 1],
            &[1, 1, -1, -1, 1, 1]]);
        let solver = BrickSolver::new(initial.clone());
        let dfs = solver.dfs().into_solution().unwrap();
        assert_eq!(dfs.moves(), [
            Move::new(GOAL_BRICK, Right), Move::new(GOAL_BRICK, Right), Move::new(3, Down),
            Move::new(4, Left), Move::new(GOAL_BRICK, Left), Move::new(GOAL_BRICK, Down)]);
        assert_eq!(dfs.visited(), 20);
        check_replay(&initial, &dfs);
        let ids = solver.ids().into_solution().unwrap();
        assert_eq!(ids.moves(), [Move::new(GOAL_BRICK, Right), Move::new(GOAL_BRICK, Down)]);
        assert_eq!(ids.visited(), 9);
    }

    #[test]
    fn test_already_solved() {
        let solved = board(&[
            &[1, 1, 1, 1],
            &[1, 2, 2, 1],
            &[1, 0, 3, 1],
            &[1, 1, 1, 1]]);
        for strategy in Strategy::ALL {
            let solution = BrickSolver::new(solved.clone()).solve(strategy).into_solution().unwrap();
            assert!(solution.is_empty());
            assert!(solution.moves().is_empty());
            assert_eq!(solution.visited(), 1);
        }
        let unnumbered = board(&[
            &[1, 1, 1, 1],
            &[1, 2, 2, 1],
            &[1, 7, 0, 1],
            &[1, 1, 1, 1]]);
        let solution = BrickSolver::new(unnumbered.clone()).bfs().into_solution().unwrap();
        assert_eq!(solution.board(), &unnumbered);
    }

    #[test]
    fn test_unsolvable() {
        let solver = BrickSolver::new(stuck());
        assert!(matches!(solver.bfs(), SearchOutcome::Exhausted { visited: 1 }));
        assert!(matches!(solver.dfs(), SearchOutcome::Exhausted { visited: 1 }));
        let mut stats = Limited::with_limit(100);
        let outcome = solver.ids_stats(&mut stats);
        assert!(matches!(outcome, SearchOutcome::Cancelled { visited: 1 }));
        assert_eq!(stats.visits(), 100);
        assert_eq!(stats.stats.iterations, 101);
    }

    #[test]
    fn test_cancel() {
        let solver = BrickSolver::new(level0());
        let mut stats = Limited::with_limit(3);
        let outcome = solver.solve_stats(Strategy::BreadthFirst, &mut stats);
        assert!(!outcome.is_solved());
        assert!(matches!(outcome, SearchOutcome::Cancelled { .. }));
        assert!(outcome.visited() >= 3);
        let mut visits = 0u64;
        assert!(solver.solve_stats(Strategy::BreadthFirst, &mut visits).is_solved());
        assert!(visits > 5);
    }

    #[test]
    fn test_fresh_state_per_run() {
        let solver = BrickSolver::new(level0());
        let first = solver.bfs();
        let second = solver.bfs();
        assert_eq!(first.visited(), second.visited());
        assert_eq!(first.solution().map(Solution::moves), second.solution().map(Solution::moves));
    }
}
