pub mod client;
pub mod diagnostics;
pub mod input;
pub mod submitter;

#[cfg(test)]
pub mod stub;
