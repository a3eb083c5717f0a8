pub mod config_gen;
pub mod dashboard;
pub mod shorten;

pub use config_gen::generate_config;
pub use dashboard::{
    DashboardRow, DashboardSnapshot, build_rows, fetch_snapshot, render_table, run_dashboard,
};
pub use shorten::{CONNECT_FAILED, SHORTEN_FAILED, describe_shorten_error, shorten_url};
