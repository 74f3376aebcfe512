pub mod modules {
    pub mod matches {
        pub mod core {
            pub mod incident;
            pub mod match_record;
            pub mod ports;
            pub mod snapshot;
        }
        pub mod use_cases {
            pub mod create_match {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_matches {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_match {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_match {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_match {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_incident {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod restore_matches {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod match_store_in_memory;
                pub mod snapshot_file;
                pub mod snapshot_publisher;
                pub mod snapshot_store_in_memory;
            }
        }
    }
}

pub mod shell;
