#![allow(warnings)]
//! Comidas Admin Frontend Entry Point

mod actions;
mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod dialog;
mod editor;
mod logging;
mod models;
mod search;
mod store;
mod table;
mod validation;


use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
