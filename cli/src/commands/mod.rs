//! Argument shims shared by the standalone binaries and `skillkit`.
//!
//! A missing argument prints the usage line and returns
//! [`Outcome::Usage`] without touching the filesystem.

pub mod init;
pub mod landing;
pub mod package;
pub mod validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Arguments were missing; carries the line that was printed.
    Usage(&'static str),
    Done(T),
}

pub(crate) fn usage<T>(line: &'static str) -> Outcome<T> {
    println!("{}", line);
    Outcome::Usage(line)
}
