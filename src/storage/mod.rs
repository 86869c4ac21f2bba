pub mod interface;
pub mod matches;
#[cfg(test)]
mod tests;
