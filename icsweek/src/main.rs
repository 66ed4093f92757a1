// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! icsweek - read an iCalendar feed and list this week's events

use icsweek_cli::run;

#[tokio::main]
async fn main() {
    run().await;
}
