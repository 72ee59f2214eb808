/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

pub mod emit;
pub mod error;
pub mod input;
pub mod logging;
