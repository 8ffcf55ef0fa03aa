pub mod health;
pub mod instituicoes;
pub mod metrics;
