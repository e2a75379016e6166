pub mod application {
    pub mod image {
        pub mod fetch;
        pub mod ingest;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_mine;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod identity {
        pub mod errors;
        pub mod verifier;
    }
    pub mod image {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod fetch;
            pub mod ingest;
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
            pub mod get_mine;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
