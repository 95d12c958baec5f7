mod file_system;
mod memory;
mod os;

pub use crate::{file_system::FileSystem, memory::MemoryFileSystem, os::OsFileSystem};
