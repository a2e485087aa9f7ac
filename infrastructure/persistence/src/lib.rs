pub mod db;
mod error;
pub mod address {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
