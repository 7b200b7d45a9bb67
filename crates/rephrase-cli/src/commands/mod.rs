pub mod correct_ops;
pub mod paraphrase_ops;
pub mod settings_ops;

#[cfg(test)]
mod tests;
