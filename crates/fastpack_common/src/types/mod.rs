pub mod chunk_kind;
pub mod entry_point;
pub mod manifest;
pub mod module_id;
pub mod output_asset;
pub mod raw_idx;
