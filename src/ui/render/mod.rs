mod all;
mod attachment;
mod footer;
mod log;
mod modal;
mod page;
mod sidebar;
mod workflow;

use self::log::log;
use super::*;
use attachment::attachment;
use footer::footer;
use sidebar::sidebar;

pub use all::all as render;
