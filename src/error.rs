// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BusyboxError {
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BusyboxError>;
