pub mod alphabet;
pub mod entropy;
pub mod hash;
pub mod id_generator;
