use thiserror::Error;

/// Errors raised by the search engine and the online replanning loop.
///
/// All variants are terminal for the call that raised them: the only retry
/// mechanism in this crate is the designed replanning cycle (a stale plan
/// triggers a fresh planning pass), never a blind retry of a failed call.
#[derive(Error, Debug)]
pub enum WayfindError {
    #[error("World must define both a start and a goal cell")]
    InvalidProblem,
    #[error("No solution found for the search problem")]
    NoSolutionFound,
    #[error("No plan found on the current belief map")]
    NoPlanFound,
    #[error("Agent is stuck: no forward progress possible")]
    Stuck,
    #[error("Invalid maze: {0}")]
    InvalidMaze(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WayfindError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_problem_display() {
        let err = WayfindError::InvalidProblem;
        assert_eq!(
            format!("{}", err),
            "World must define both a start and a goal cell"
        );
    }

    #[test]
    fn test_no_plan_found_display() {
        let err = WayfindError::NoPlanFound;
        assert_eq!(format!("{}", err), "No plan found on the current belief map");
    }

    #[test]
    fn test_invalid_maze_display() {
        let err = WayfindError::InvalidMaze("ragged rows".to_string());
        assert_eq!(format!("{}", err), "Invalid maze: ragged rows");
    }

    #[test]
    fn test_stuck_display() {
        let err = WayfindError::Stuck;
        assert_eq!(
            format!("{}", err),
            "Agent is stuck: no forward progress possible"
        );
    }

    #[test]
    fn test_error_trait() {
        let err = WayfindError::NoSolutionFound;
        let _ = err.source(); // Should be None
    }
}
