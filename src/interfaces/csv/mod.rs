pub mod candidate_writer;
pub mod command_reader;
