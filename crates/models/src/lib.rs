pub mod errors;
pub mod db;
pub mod market;

#[cfg(test)]
mod tests;
