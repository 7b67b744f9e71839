pub mod builder;
pub mod pipeline;
pub mod postprocess;

pub use builder::{BuildStats, RecordBuilder, build_record};
pub use pipeline::{
    LoadSummary, PipelineError, Result, load_elements, load_reader, run_load,
    run_load_to,
};
pub use postprocess::{ADDRESS_FIELD, AddressDefaults, finalize};
