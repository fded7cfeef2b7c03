use crate::{TableEngine, TableProblem};

pub struct EngineBuilder<P: TableProblem> {
    problem: P,
    cell_limit: Option<usize>,
}

impl<P: TableProblem> EngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            cell_limit: None,
        }
    }
    pub fn with_cell_limit(mut self, cell_limit: usize) -> Self {
        self.cell_limit = Some(cell_limit);
        self
    }
    /// Set or clear an explicit limit; `None` keeps the engine defaults.
    pub fn with_cell_limit_opt(mut self, cell_limit: Option<usize>) -> Self {
        self.cell_limit = cell_limit;
        self
    }
    pub fn build(self) -> TableEngine<P> {
        match self.cell_limit {
            Some(limit) => TableEngine::with_cell_limit(self.problem, limit),
            None => TableEngine::new(self.problem),
        }
    }
}
