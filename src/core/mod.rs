mod compare;
pub use compare::compare;

mod error;
pub use error::CoreError;

mod reconcile;
pub use reconcile::{VectorEntry, retrieve_vectors};

mod similarity;
pub use similarity::cosine_similarity;

mod word_vector;
pub use word_vector::WordVector;
