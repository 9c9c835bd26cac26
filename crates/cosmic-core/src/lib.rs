pub mod flow;
pub mod planet;
