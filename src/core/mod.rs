pub mod catalog;
pub mod demo;
pub mod helpers;
pub mod lookup;
pub mod property;
pub mod shelf;
