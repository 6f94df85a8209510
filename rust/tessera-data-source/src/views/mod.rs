//! Lazy views composed over other data sources.
//!
//! Every view holds its operands through [`DataSourceRef`](crate::DataSourceRef)
//! handles. `duplicate()` on a view is always shallow: the copy shares the
//! operand handles, so writes through either reach the same storage. A view
//! reports its operands' [`Ownership`](crate::Ownership) tag, which names who
//! owns the memory underneath, not what duplicating the view does.

pub mod concatenated;
pub mod conditional;
pub mod fft;
pub mod fixed_size;
pub mod masked;
pub mod procedure;
pub mod read_only;
pub mod sequenced;
pub mod transformed;
pub mod trimmed;

pub use concatenated::ConcatenatedDataSource;
pub use conditional::ConditionalDataSource;
pub use fft::FftDataSource;
pub use fixed_size::FixedSizeDataSource;
pub use masked::MaskedDataSource;
pub use procedure::{ProcedureDataSource, ProcedurePaddedDataSource, UNBOUNDED_SIZE};
pub use read_only::{ReadOnlyDataSource, ReadOnlyHighPrecisionDataSource};
pub use sequenced::SequencedDataSource;
pub use transformed::{Conversion, TransformedDataSource};
pub use trimmed::TrimmedDataSource;
