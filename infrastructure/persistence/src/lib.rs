pub mod db;
pub mod memory;
pub mod price_list {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod supplier {
    pub mod entity;
    pub mod repository;
}
