//! Wire format of the remote article API.

pub mod dto;
