#![allow(warnings)]
//! Todo Frontend Entry Point

mod board;
mod notification;
mod controller;
mod config;
mod context;
mod logging;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
