pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod price_list {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod pricing {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod supplier {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
