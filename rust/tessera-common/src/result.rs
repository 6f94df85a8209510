pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_range(name, condition)
    }
}

/// Fails with `IndexOutOfBounds` unless `index < size`.
#[inline]
pub fn check_index(index: u64, size: u64) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        out_of_bounds(index, size)
    }
}

#[cold]
pub fn invalid_range(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidRange {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
fn out_of_bounds(index: u64, size: u64) -> Result<()> {
    Err(crate::error::Error::out_of_bounds(index, size))
}
