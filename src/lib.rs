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

//! Woodpusher: a figure-list chess engine with a parallel fixed-depth
//! search and a line-oriented command front-end.

pub mod board;
pub mod comm;
pub mod defs;
pub mod engine;
pub mod misc;
pub mod movegen;
pub mod search;
