pub mod application {
    pub mod address {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_default;
    }
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod update_item;
    }
    pub mod order {
        pub mod get_by_id;
        pub mod get_by_status;
        pub mod get_user_orders;
        pub mod place;
        pub mod update_status;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod search;
        pub mod update;
    }
    pub mod user {
        pub mod bootstrap_admin;
        pub mod get_profile;
        pub mod login;
        pub mod register;
        pub mod update_profile;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod identity;
        pub mod pagination;
        pub mod value_objects;
    }
    pub mod address {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_default;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_item;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_by_status;
            pub mod get_user_orders;
            pub mod place;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod search;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod bootstrap_admin;
            pub mod get_profile;
            pub mod login;
            pub mod register;
            pub mod update_profile;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
