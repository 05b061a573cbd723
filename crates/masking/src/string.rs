//!
//! Secret strings
//!
//! There is not alias type by design.

use alloc::{
    str::FromStr,
    string::{String, ToString},
};

use super::{Secret, Strategy};

impl<I> FromStr for Secret<String, I>
where
    I: Strategy<String>,
{
    type Err = core::convert::Infallible;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(src.to_string()))
    }
}

impl<I> From<&str> for Secret<String, I>
where
    I: Strategy<String>,
{
    fn from(src: &str) -> Self {
        Self::new(src.to_string())
    }
}
