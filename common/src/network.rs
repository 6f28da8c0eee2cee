pub mod address;
pub mod hostport;
pub mod scope;
