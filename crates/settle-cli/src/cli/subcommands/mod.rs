mod risk;

pub use risk::RiskCommands;
