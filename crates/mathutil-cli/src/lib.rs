//! # mathutil-cli
//!
//! Console input, result presentation, and shell completion.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;
pub mod report;
pub mod ui;

pub use input::{Prompter, TokenReader};
pub use presenter::{JsonPresenter, ResultPresenter, TextPresenter};
