//! Bulk helpers over data sources.

use tessera_common::{Algebra, Result, error::Error};

use crate::data_source::IndexedDataSource;

/// Writes `value` into every slot of `dest`.
pub fn fill<U>(value: &U, dest: &dyn IndexedDataSource<U>) -> Result<()> {
    for i in 0..dest.size() {
        dest.set(i, value)?;
    }
    Ok(())
}

/// Copies `count` elements from `src[src_start..]` into `dest[dest_start..]`
/// through one scratch element.
///
/// Both ranges are checked before the first element moves.
pub fn copy<A: Algebra>(
    algebra: &A,
    count: u64,
    src: &dyn IndexedDataSource<A::Element>,
    src_start: u64,
    dest: &dyn IndexedDataSource<A::Element>,
    dest_start: u64,
) -> Result<()> {
    check_range("src", src_start, count, src.size())?;
    check_range("dest", dest_start, count, dest.size())?;
    let mut scratch = algebra.construct();
    for i in 0..count {
        src.get(src_start + i, &mut scratch)?;
        dest.set(dest_start + i, &scratch)?;
    }
    Ok(())
}

/// Reads every element into a new vector.
pub fn to_vec<A: Algebra>(
    algebra: &A,
    src: &dyn IndexedDataSource<A::Element>,
) -> Result<Vec<A::Element>> {
    let len = usize::try_from(src.size())
        .map_err(|_| Error::invalid_range("src", "size exceeds the native array capacity"))?;
    let mut values = Vec::with_capacity(len);
    for i in 0..src.size() {
        let mut element = algebra.construct();
        src.get(i, &mut element)?;
        values.push(element);
    }
    Ok(values)
}

fn check_range(name: &str, start: u64, count: u64, size: u64) -> Result<()> {
    match start.checked_add(count) {
        Some(end) if end <= size => Ok(()),
        _ => Err(Error::invalid_range(
            name,
            format!("range {start}+{count} exceeds size {size}"),
        )),
    }
}
