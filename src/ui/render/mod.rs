mod all;
mod footer;
mod header;
mod log;
mod main;
mod task_list;

use self::log::log;
use super::*;
use footer::footer;
use header::header;
use main::main;
use task_list::task_list;

pub use all::all as render;
