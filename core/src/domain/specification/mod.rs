pub mod entities;
pub mod evaluator;
pub mod ports;

pub use entities::{Criteria, FieldValue, PageWindow, Predicate, SortDirection, SortKey};
pub use ports::{QuerySource, Repository, Specifiable};
