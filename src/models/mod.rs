pub mod goal;
pub mod plan;
pub mod reward;
