pub mod assign;
pub mod barrier;
pub mod judge;
pub mod tally;
pub mod transition;
