pub mod algorithm;
pub mod budget;
pub mod hyperparameters;
pub mod mcts_result;
pub mod node;
pub mod selection;
pub mod simulation;
