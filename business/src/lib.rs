pub mod application {
    pub mod price_list {
        pub mod list;
        pub mod upload;
    }
    pub mod pricing {
        pub mod cached_query_best;
        pub mod query_best;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod supplier {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod price_list {
        pub mod errors;
        pub mod ingestion;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod list;
            pub mod upload;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod pricing {
        pub mod errors;
        pub mod model;
        pub mod rate_converter;
        pub mod selector;
        pub mod services;
        pub mod use_cases {
            pub mod query_best;
        }
    }
    pub mod supplier {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
