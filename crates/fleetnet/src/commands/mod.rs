pub mod network;
pub mod regions;
