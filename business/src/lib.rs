pub mod application {
    pub mod product {
        pub mod delete;
        pub mod get_by_id;
        pub mod insert;
        pub mod list;
        pub mod list_by_user;
        pub mod list_wished;
        pub mod update;
    }
    pub mod wish {
        pub mod add;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod cursor;
        pub mod errors;
        pub mod model;
        pub mod ownership;
        pub mod page;
        pub mod repository;
        pub mod sort;
        pub mod storage;
        pub mod use_cases {
            pub mod delete;
            pub mod get_by_id;
            pub mod insert;
            pub mod list;
            pub mod list_by_user;
            pub mod list_wished;
            pub mod update;
        }
    }
    pub mod wish {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod remove;
        }
    }
}
