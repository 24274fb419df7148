use std::ops::AddAssign;

/// Search statistic collector.
/// It collects data during search and can cancel it.
pub trait SearchStatsCollector {
    /// Called for each node taken from the frontier, can return false to cancel search process.
    #[inline(always)] fn visit(&mut self) -> bool { true }
    /// Called for each node whose children are generated.
    #[inline(always)] fn expand(&mut self) { }
    /// Called when iterative deepening starts a new pass with given depth limit.
    #[inline(always)] fn iteration(&mut self, _depth_limit: usize) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

/// Counts visited nodes.
impl SearchStatsCollector for u64 {
    #[inline(always)] fn visit(&mut self) -> bool { *self += 1; true }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub visits: u64,
    pub expansions: u64,
    pub iterations: u64
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.visits += rhs.visits;
        self.expansions += rhs.expansions;
        self.iterations += rhs.iterations;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn visit(&mut self) -> bool { self.visits += 1; true }
    #[inline(always)] fn expand(&mut self) { self.expansions += 1; }
    #[inline(always)] fn iteration(&mut self, _depth_limit: usize) { self.iterations += 1; }
}

/// Collects statistics and cancels search after `limit` visits.
#[derive(Copy, Clone, Debug)]
pub struct Limited {
    pub stats: SearchAllStats,
    pub limit: u64
}

impl Limited {
    pub fn with_limit(limit: u64) -> Self { Self { stats: SearchAllStats::default(), limit } }

    /// Clears the statistics, keeping the limit.
    pub fn reset_visits(&mut self) { self.stats = SearchAllStats::default(); }

    #[inline(always)] pub fn visits(&self) -> u64 { self.stats.visits }
}

impl SearchStatsCollector for Limited {
    #[inline(always)] fn visit(&mut self) -> bool {
        if self.visits() >= self.limit { return false; }
        self.stats.visit()
    }

    #[inline(always)] fn expand(&mut self) { self.stats.expand(); }

    #[inline(always)] fn iteration(&mut self, depth_limit: usize) { self.stats.iteration(depth_limit); }
}
