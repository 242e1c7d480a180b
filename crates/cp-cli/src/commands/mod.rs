pub mod converse;
pub mod price;
