//! Tests for the job registry runner and email jobs

#[cfg(test)]
mod mocks;
