mod trace_upload;

pub use trace_upload::upload_trace;
