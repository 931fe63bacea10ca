pub mod lcs_table;
