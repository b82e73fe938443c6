// Crate entry point. Declare and expose modules so tests and the binary can import them.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod config;

pub mod shared {
    pub mod core {
        pub mod interval;
    }
    pub mod infrastructure {
        pub mod id_generator;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod commands;
            pub mod event;
            pub mod ports;
            pub mod queries;
            pub mod schedule;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod errors;
                pub mod graphql_types;
            }
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
