pub mod color;
pub mod error;
pub mod numeric;
pub mod pad;
pub mod reader;
pub mod table;

pub use color::{Color, resolve_color};
pub use error::{CogexError, Result};
pub use numeric::{DEFAULT_STEP, clamp, round_to_step, to_percent};
pub use pad::{PadSide, PadValue, fill_zeros};
pub use reader::{DelimitedReader, ExtensionReader, TableReader, WorkbookReader, reader_for_path};
pub use table::{Cell, Column, DEFAULT_TIME_COLUMN, ResponseTable};
