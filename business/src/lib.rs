pub mod application {
    pub mod inventory_metric {
        pub mod compute;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod list_paginated;
        pub mod update;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod inventory_metric {
        pub mod aggregator;
        pub mod model;
        pub mod use_cases {
            pub mod compute;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod sort;
        pub mod validation;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod list_paginated;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod pagination;
    }
}

#[cfg(test)]
mod test_support;
