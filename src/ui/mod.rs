pub mod console;
pub mod formatter;
#[cfg(test)]
pub(crate) mod tests;
