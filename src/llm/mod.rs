pub mod client;
pub mod oracle;
