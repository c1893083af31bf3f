pub mod assess;
pub mod system;
