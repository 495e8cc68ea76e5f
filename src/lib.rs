pub mod cli;
pub mod ctx;
pub mod eval;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod plot;
pub mod schema;
pub mod select;
pub mod tools;
