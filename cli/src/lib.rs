// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_bounds;
mod cmd_event;
mod cmd_generate_completion;
mod config;
mod event_formatter;
mod session;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_bounds::CmdBounds;
pub use crate::cmd_event::{CmdEventList, CmdNext, EventScope};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::config::{Config, parse_config};
pub use crate::util::OutputFormat;
