#![allow(dead_code)]

mod mock_runner;

pub use mock_runner::MockServiceRunner;
