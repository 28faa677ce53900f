#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod quiz;
pub mod result;

pub use quiz::{Question, Quiz};
pub use result::{Answer, QuizResult, Verdict};
