pub mod dictionary;
pub mod error;
pub mod io;
pub mod lang;
pub mod pipelines;
