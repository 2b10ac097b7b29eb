pub mod dilithium;

pub use dilithium::{Dilithium2, Dilithium3, Dilithium5};
