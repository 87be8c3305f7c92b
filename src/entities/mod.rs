pub mod glove_vector;
