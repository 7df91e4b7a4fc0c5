mod output;

pub use output::{display_error, error_report, pretty_json, render};
