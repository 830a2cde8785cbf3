pub mod answer;

#[cfg(test)]
mod tests;

pub use answer::extract_answer;
