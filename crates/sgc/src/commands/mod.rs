//! Command handlers, one module per subcommand.

pub mod check_branch;
pub mod commit;
pub mod completion;
pub mod config_cmd;
pub mod create_branch;
pub mod default_branch;
pub mod diff_cmd;
pub mod push;
pub mod stage_all;
pub mod status;
pub mod switch;
pub mod version;
