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

use super::defs::ErrFatal;
use super::Engine;
use crate::comm::uci::Input;
use crate::comm::CommInput;

impl Engine {
    pub(super) fn main_loop(&mut self) {
        // Set up the channel between the reader thread and this loop.
        let (input_tx, input_rx) = crossbeam_channel::unbounded::<CommInput>();
        self.input_rx = Some(input_rx);

        let mut reader = Input::start(input_tx);

        // Keep handling commands until quit or EOF is received.
        while !self.quit {
            let input = self.next_input();
            self.handle_input(input);
        }

        reader.wait_for_shutdown();
    }

    fn next_input(&mut self) -> CommInput {
        match &self.input_rx {
            Some(rx) => rx.recv().unwrap_or(CommInput::Quit),
            None => panic!("{}", ErrFatal::CHANNEL),
        }
    }
}
