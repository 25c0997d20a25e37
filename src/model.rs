pub use self::catalog::{Catalog, Program, capitalize};
pub use self::subject::Subject;

mod catalog;
mod subject;
