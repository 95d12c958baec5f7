pub mod base64;
pub mod bitset;
pub mod indexmap;
pub mod xxhash;
