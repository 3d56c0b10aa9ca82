pub mod return_flow;
pub mod selection;
