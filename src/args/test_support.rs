use clap::Parser;

use crate::error::{AppError, AppResult};

use super::CirculateArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<CirculateArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CirculateArgs::try_parse_from(args).map_err(AppError::from)
}
