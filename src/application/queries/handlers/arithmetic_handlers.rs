//! Arithmetic Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::{DoubleQuery, SquareQuery};
use crate::domain::{double, square};

/// Square Handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareHandler;

impl SquareHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: SquareQuery) -> Result<i64, ApplicationError> {
        Ok(square(query.x)?)
    }
}

/// Double Handler
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleHandler;

impl DoubleHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: DoubleQuery) -> Result<i128, ApplicationError> {
        Ok(double(query.x, query.validated)?)
    }
}
