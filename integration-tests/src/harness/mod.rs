pub mod events;
pub mod io;
pub mod tracing;

pub use events::{EventLine, stream};
pub use io::{FailingReader, SharedBuffer};
pub use self::tracing::{CapturedEvent, init_test_tracing};
