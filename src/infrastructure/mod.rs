pub mod http;
pub mod tsv;
