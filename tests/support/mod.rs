#![allow(dead_code)]

pub mod census;
