// Crate entry point. Declare the module tree and re-export the public operations.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Callers with raw JSON input use the inbound operations re-exported below.
// - Callers with typed records reach the handlers through the module paths.

pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod validation;
    }
}

pub mod modules {
    pub mod activity_log {
        pub mod core {
            pub mod action;
            pub mod record;
            pub mod time_window;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod list_users_by_action {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod json;
                }
            }
            pub mod calculate_playback_time {
                pub mod config;
                pub mod device_interval;
                pub mod handler;
                pub mod merge;
                pub mod inbound {
                    pub mod json;
                }
            }
        }
    }
    pub mod app_permissions {
        pub mod core {
            pub mod model;
        }
        pub mod use_cases {
            pub mod resolve_user_app_permissions {
                pub mod handler;
                pub mod inbound {
                    pub mod json;
                }
            }
        }
    }
}

pub use modules::activity_log::core::action::Action;
pub use modules::activity_log::core::record::ActionRecord;
pub use modules::activity_log::use_cases::calculate_playback_time::config::{
    MergeStrategy, PlaybackConfig,
};
pub use modules::activity_log::use_cases::calculate_playback_time::inbound::json::{
    get_playback_time, get_playback_time_with,
};
pub use modules::activity_log::use_cases::list_users_by_action::inbound::json::get_users;
pub use modules::app_permissions::use_cases::resolve_user_app_permissions::inbound::json::get_user_app_permissions;
pub use shared::core::validation::{RecordDefect, ValidationError};
