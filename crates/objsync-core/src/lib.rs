pub mod action;
pub mod document;
pub mod error;
pub mod object;
pub mod time;

pub use action::Action;
pub use document::{Document, OperationData, OperationDetail, Transition};
pub use error::{CoreError, Result};
pub use object::{ObjectRecord, ObjectReference};
pub use time::now_utc;
