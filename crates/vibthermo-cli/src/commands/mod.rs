pub mod eval;
pub mod export;
