pub mod db;
pub mod memory;
pub mod product {
    pub mod entity;
    pub mod query;
    pub mod repository;
}
pub mod wish {
    pub mod repository;
}
