pub mod mutation_message;
