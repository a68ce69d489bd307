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

// log.rs is the debug line sink. It is injected where needed instead of
// living in a global, and it is strictly best-effort: a sink that fails
// to accept a line is silently ignored.

use std::io::{self, Write};

pub struct DebugLog {
    sink: Option<Box<dyn Write + Send>>,
}

impl DebugLog {
    pub fn stderr() -> Self {
        Self {
            sink: Some(Box::new(io::stderr())),
        }
    }

    pub fn quiet() -> Self {
        Self { sink: None }
    }

    pub fn to_sink(sink: Box<dyn Write + Send>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn line(&mut self, message: &str) {
        if let Some(sink) = &mut self.sink {
            let _ = writeln!(sink, "{message}");
            let _ = sink.flush();
        }
    }
}
