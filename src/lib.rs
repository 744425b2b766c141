pub mod sp_tree;
pub mod nice_tree;
pub mod graph;
pub mod cust_error;
pub mod mwis_instance;
pub mod tree_dp;
