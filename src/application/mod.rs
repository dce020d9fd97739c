pub mod use_cases;

pub use use_cases::table_ingestor::TableIngestor;
