use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Rules shown alongside every rejected custom board size.
pub const SIZE_RULES: &str = "Rules:\n\
    - Both dimensions must be integers\n\
    - Dimensions must be between 2 and 10\n\
    - At least one dimension must be an even number";

/// Reasons a custom board size is rejected, checked in declaration order.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("Please enter valid numbers for rows and columns.\n\n{rules}", rules = SIZE_RULES)]
    NotANumber,
    #[error("Dimensions must be between 2 and 10.\n\n{rules}", rules = SIZE_RULES)]
    OutOfRange,
    #[error(
        "At least one dimension (rows or columns) must be an even number.\n\n\
         This is required to ensure we can create pairs of matching cards.\n\n{rules}",
        rules = SIZE_RULES
    )]
    OddDimensions,
}
