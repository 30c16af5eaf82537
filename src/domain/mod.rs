pub mod data_layer;
pub mod todo;
