//! Command handler modules for the rochambot CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: output streams (`&mut dyn Write`) and stdin
//!   (`&mut dyn BufRead`) passed as parameters
//! - Error propagation via the `CliError` enum

mod cfg;
mod classify;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
