//! Helpers that prepare feature matrices before they reach a model.
//!
//! None of the models scale or encode internally; these run first.

pub mod encoding;
pub mod scaling;
pub mod split;

pub use encoding::{append_one_hot, one_hot_encode};
pub use scaling::MinMaxScaler;
pub use split::{Split, train_test_split};
