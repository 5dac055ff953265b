pub mod constants;
pub mod nullable;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
