/* =======================================================================
Woodpusher is a chess playing engine.

Woodpusher is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License version 3 as published
by the Free Software Foundation.

Woodpusher is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
more details.
======================================================================= */

use super::Engine;
use crate::defs::About;

impl Engine {
    pub(super) fn print_about(&self) {
        println!(
            "{} {} (depth {}, {} threads)",
            About::ENGINE,
            About::VERSION,
            self.settings.depth,
            self.settings.threads
        );
    }
}
