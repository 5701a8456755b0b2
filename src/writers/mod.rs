pub mod ghcnm_writer;
pub mod inventory_writer;

pub use ghcnm_writer::{format_month, format_record, GhcnmWriter};
pub use inventory_writer::{format_inventory_line, InventoryWriter};
