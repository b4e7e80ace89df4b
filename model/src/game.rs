use log::info;

use crate::error::FieldError;
use crate::field::{Field, Side};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Playing,
    Over,
}

#[derive(Debug)]
pub struct Game {
    field: Field,
    state: State,
}

impl Game {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            state: State::Playing,
        }
    }

    pub fn start(size: usize, seed: Option<u64>) -> Result<Self, FieldError> {
        let field = match seed {
            Some(seed) => Field::with_seed(size, seed)?,
            None => Field::new(size)?,
        };
        Ok(Self::new(field))
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == State::Over
    }

    pub fn swipe(&mut self, side: Side) -> Result<bool, FieldError> {
        if self.is_over() {
            return Ok(false);
        }
        if !self.field.swipe(side) {
            return Ok(false);
        }
        self.field.spawn_tile()?;
        if !self.field.can_move() {
            info!("game over, best tile {}", self.field.max_tile());
            self.state = State::Over;
        }
        Ok(true)
    }

    pub fn reset(&mut self, field: Field) {
        self.field = field;
        self.state = State::Playing;
    }
}
