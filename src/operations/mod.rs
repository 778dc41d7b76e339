pub mod identify;
pub mod resize;
