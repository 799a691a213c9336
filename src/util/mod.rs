//! Small cross-cutting helpers shared by state and net modules.

pub mod storage;
