pub mod db;
pub mod image {
    pub mod entity;
    pub mod store;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
