pub mod table_ingestor;
