mod gateway;
mod parser;

pub use gateway::Wmctrl;
pub use parser::{parse_current_workspace, parse_window_list};
