mod all;
mod footer;
mod log;
mod login;
mod register;

use self::log::log;
use super::*;
use footer::footer;
use login::login;
use register::register;

pub use all::all as render;
