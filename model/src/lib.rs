pub mod error;
pub mod field;
pub mod game;

pub use error::FieldError;
pub use field::{Field, Side};
pub use game::{Game, State};
