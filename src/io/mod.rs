pub mod clustal;
pub mod fasta;
pub mod json_writer;
pub mod stockholm;
pub mod summary;
pub mod tblout;
pub mod tsv_writer;
