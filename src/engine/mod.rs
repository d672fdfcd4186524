pub mod combat;
pub mod decoder;
pub mod error;
pub mod llm_client;
pub mod narrative;
pub mod protocol;
pub mod schema;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
