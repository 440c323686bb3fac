/// Random-policy batch simulation and summary statistics
pub mod simulation;
