// Test helpers are compiled for unit tests only.
#[cfg(test)]
pub(crate) mod testing;
