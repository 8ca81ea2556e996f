pub mod cli;
pub mod convert;
pub mod error;
pub mod extract;
pub mod logging;
pub mod row;
pub mod scan;
pub mod writer;
