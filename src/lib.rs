pub mod shared {
    pub mod http {
        pub mod api_error;
        pub mod json_body;
    }
}

pub mod modules {
    pub mod students {
        pub mod core {
            pub mod errors;
            pub mod filters;
            pub mod seed;
            pub mod student;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod list_students {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_student {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_student {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_students_by_status {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_students_by_grade {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod student_id_path;
            }
            pub mod outbound {
                pub mod student_repository;
                pub mod students_in_memory;
            }
        }
    }
}

pub mod shell;
