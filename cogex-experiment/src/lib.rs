pub mod config;
pub mod filename;
pub mod grid;
pub mod group;
pub mod resume;
pub mod sample;

pub use config::{INTEGER_COLUMNS, ResponseLogConfig};
pub use filename::{FreeFilename, Subject, next_free_filename, subject_index_used, used_numbers};
pub use grid::{ParamGrid, expand_grid};
pub use group::{Truthy, group_runs};
pub use resume::{ResumePoint, continue_log, continue_log_auto};
pub use sample::grow_sample;
