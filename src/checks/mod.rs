//! Check-run commands: report and query GitHub check runs for the
//! repository of the current working directory.

pub mod create;
mod error;
pub mod info;
pub mod list;
