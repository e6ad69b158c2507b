use derive_more::{Display, Error};

/// Error returned by a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// The search exhausted every branch without finding a completion.
    ///
    /// Also reported when the givens themselves conflict (the same digit
    /// twice in one row, column, or box): such a puzzle has no solution in
    /// which the givens are preserved.
    #[display("puzzle has no solution")]
    Unsolvable,
    /// The search node budget ran out before the puzzle was either solved
    /// or proven unsolvable.
    ///
    /// This is an abort, not a verdict: a larger budget (or none) may still
    /// find a solution.
    #[display("search budget exhausted before a verdict was reached")]
    BudgetExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SolveError::Unsolvable.to_string(), "puzzle has no solution");
        assert_eq!(
            SolveError::BudgetExhausted.to_string(),
            "search budget exhausted before a verdict was reached"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SolveError>();
    }
}
