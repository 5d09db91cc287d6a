pub mod detect;
pub mod hold;
pub mod process;
pub mod report;
pub mod reset;
pub mod resource;
pub mod scenario;
pub mod show;
pub mod trace;
pub mod wait;
