//! Command implementations.

pub mod plan;
pub mod rotate;
pub mod run;

pub use self::plan::execute_plan;
pub use self::rotate::execute_rotate;
pub use self::run::execute_run;
