//! 提交流程层

pub mod submit_flow;

pub use submit_flow::{validate_draft, SubmitFlow, SubmitOutcome};
